//! Seed and input value types.
//!
//! These newtypes validate caller input once, at the boundary, so the
//! synthesis path can assume 1-based indices and finite, non-negative error
//! rates.

use std::fmt;
use std::num::NonZeroU64;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SynthesisError;

/// Exclusive upper bound for randomly chosen run seeds.
const RANDOM_SEED_BOUND: u64 = 1_000_000_000;

/// Caller-supplied value identifying one reproducible generation run.
///
/// Integer and text seeds are both accepted; integers are rendered in
/// decimal, so `RunSeed::from(42)` and `RunSeed::from("42")` are the same run.
///
/// # Example
///
/// ```
/// use identity_forge::RunSeed;
///
/// assert_eq!(RunSeed::from(42), RunSeed::from("42"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunSeed(String);

impl RunSeed {
    /// Picks a fresh integer seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        Self::from(rand::rng().random_range(0..RANDOM_SEED_BOUND))
    }

    /// Returns the seed as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for RunSeed {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for RunSeed {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for RunSeed {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for RunSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A 1-based record position within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordIndex(NonZeroU64);

impl RecordIndex {
    /// Validates a raw index.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::InvalidIndex`] for zero.
    pub fn new(index: u64) -> Result<Self, SynthesisError> {
        NonZeroU64::new(index)
            .map(Self)
            .ok_or(SynthesisError::InvalidIndex { index })
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for RecordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Expected number of corrupting edits per record.
///
/// Fractional rates are allowed: `2.5` means two edits always, plus a third
/// with probability one half. There is no upper cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct ErrorRate(f64);

impl ErrorRate {
    /// No corruption at all.
    pub const ZERO: Self = Self(0.0);

    /// Validates a raw rate.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::InvalidErrorRate`] if the value is negative,
    /// NaN or infinite. Values are never clamped.
    ///
    /// # Example
    ///
    /// ```
    /// use identity_forge::ErrorRate;
    ///
    /// let rate = ErrorRate::new(2.5).expect("valid rate");
    /// assert_eq!(rate.whole(), 2);
    /// assert!(ErrorRate::new(-1.0).is_err());
    /// ```
    pub fn new(value: f64) -> Result<Self, SynthesisError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(SynthesisError::InvalidErrorRate { value })
        }
    }

    /// Returns the raw rate.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Number of edits applied unconditionally.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the rate is validated non-negative and float casts saturate"
    )]
    pub fn whole(self) -> u64 {
        self.0.floor() as u64
    }

    /// Probability of one extra edit.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the fractional remainder is defined on the float rate"
    )]
    pub fn fraction(self) -> f64 {
        self.0 - self.0.floor()
    }
}

/// The key that fully determines a record: `"{run_seed}-{index}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CombinedSeed(String);

impl CombinedSeed {
    /// Combines a run seed with a record index.
    ///
    /// # Example
    ///
    /// ```
    /// use identity_forge::{CombinedSeed, RecordIndex, RunSeed};
    ///
    /// let index = RecordIndex::new(7).expect("non-zero");
    /// let combined = CombinedSeed::new(&RunSeed::from(42), index);
    /// assert_eq!(combined.as_str(), "42-7");
    /// ```
    #[must_use]
    pub fn new(run_seed: &RunSeed, index: RecordIndex) -> Self {
        Self(format!("{run_seed}-{index}"))
    }

    /// Returns the combined seed text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the combined seed bytes fed to the hash.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}
