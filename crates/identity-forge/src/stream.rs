//! Reproducible random streams derived from a combined seed.
//!
//! A combined seed is hashed with SHA-256 and the digest seeds two separately
//! constructed `ChaCha8` generators. The first yields the 32-bit identity seed
//! handed to the identity provider; the second is the decision stream that
//! drives error counts and corruption. Both start from the same key, so they
//! are correlated, but neither consumes the other's draws.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

use crate::seed::CombinedSeed;

/// Seeds derived for one record.
#[derive(Debug, Clone)]
pub struct DerivedSeeds {
    /// Seed for the identity provider.
    pub identity_seed: i32,
    /// Uniform draws for error decisions.
    pub decisions: DecisionStream,
}

/// Derives the identity seed and decision stream for a combined seed.
///
/// # Example
///
/// ```
/// use identity_forge::{CombinedSeed, RecordIndex, RunSeed, derive};
///
/// let index = RecordIndex::new(1).expect("non-zero");
/// let combined = CombinedSeed::new(&RunSeed::from(42), index);
///
/// let first = derive(&combined);
/// let second = derive(&combined);
/// assert_eq!(first.identity_seed, second.identity_seed);
/// ```
#[must_use]
pub fn derive(combined: &CombinedSeed) -> DerivedSeeds {
    let material = seed_material(combined);
    let identity_seed = ChaCha8Rng::from_seed(material).random();
    DerivedSeeds {
        identity_seed,
        decisions: DecisionStream::from_material(material),
    }
}

fn seed_material(combined: &CombinedSeed) -> [u8; 32] {
    Sha256::digest(combined.as_bytes()).into()
}

/// An infinite sequence of uniform draws in `[0, 1)`.
///
/// Draw order matters: every draw shifts all later decisions. The stream
/// counts draws so callers can check they consume exactly what they expect.
#[derive(Debug, Clone)]
pub struct DecisionStream {
    rng: ChaCha8Rng,
    draws: u64,
}

impl DecisionStream {
    fn from_material(material: [u8; 32]) -> Self {
        Self {
            rng: ChaCha8Rng::from_seed(material),
            draws: 0,
        }
    }

    /// Builds a stream directly from a combined seed.
    #[must_use]
    pub fn new(combined: &CombinedSeed) -> Self {
        Self::from_material(seed_material(combined))
    }

    /// Draws the next uniform value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.random()
    }

    /// Draws `floor(u * len)` for the next uniform `u`.
    ///
    /// The result is clamped to `len - 1`. A `len` of zero still consumes a
    /// draw and returns zero.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "index selection is defined as floor(u * len) on floats"
    )]
    pub fn next_index(&mut self, len: usize) -> usize {
        let unit = self.next_unit();
        let scaled = (unit * len as f64).floor() as usize;
        scaled.min(len.saturating_sub(1))
    }

    /// Returns how many values have been drawn so far.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::seed::{RecordIndex, RunSeed};

    fn combined(run_seed: &str, index: u64) -> CombinedSeed {
        let record_index = RecordIndex::new(index).expect("non-zero");
        CombinedSeed::new(&RunSeed::from(run_seed), record_index)
    }

    #[test]
    fn derivation_is_deterministic() {
        let mut first = derive(&combined("42", 1));
        let mut second = derive(&combined("42", 1));

        assert_eq!(first.identity_seed, second.identity_seed);
        for _ in 0..32 {
            assert_eq!(
                first.decisions.next_unit().to_bits(),
                second.decisions.next_unit().to_bits()
            );
        }
    }

    #[test]
    fn golden_stream_for_seed_42_index_1() {
        let mut seeds = derive(&combined("42", 1));

        assert_eq!(seeds.identity_seed, 392_331_000);
        let expected = [
            0.012_601_229_383_457_98_f64,
            0.424_164_209_101_221_77,
            0.721_813_639_909_645_5,
            0.272_391_929_636_705_8,
        ];
        for value in expected {
            assert_eq!(seeds.decisions.next_unit().to_bits(), value.to_bits());
        }
    }

    #[rstest]
    #[case("42", 2, 369_815_645)]
    #[case("7", 1, -1_595_708_684)]
    fn golden_identity_seeds(#[case] run_seed: &str, #[case] index: u64, #[case] expected: i32) {
        assert_eq!(derive(&combined(run_seed, index)).identity_seed, expected);
    }

    #[test]
    fn neighbouring_indices_diverge() {
        let first = derive(&combined("42", 1));
        let second = derive(&combined("42", 2));
        assert_ne!(first.identity_seed, second.identity_seed);
    }

    #[test]
    fn draws_stay_in_unit_interval() {
        let mut stream = DecisionStream::new(&combined("range", 1));
        for _ in 0..10_000 {
            let value = stream.next_unit();
            assert!((0.0..1.0).contains(&value), "out of range: {value}");
        }
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(35)]
    fn indices_stay_below_length(#[case] len: usize) {
        let mut stream = DecisionStream::new(&combined("index", 9));
        for _ in 0..1_000 {
            assert!(stream.next_index(len) < len);
        }
    }

    #[test]
    fn zero_length_index_still_consumes_a_draw() {
        let mut stream = DecisionStream::new(&combined("empty", 1));
        assert_eq!(stream.next_index(0), 0);
        assert_eq!(stream.draws(), 1);
    }

    #[test]
    fn counts_every_draw() {
        let mut stream = DecisionStream::new(&combined("count", 4));
        stream.next_unit();
        stream.next_index(3);
        stream.next_index(26);
        assert_eq!(stream.draws(), 3);
    }

    #[test]
    fn new_matches_derived_stream() {
        let seed = combined("42", 5);
        let mut direct = DecisionStream::new(&seed);
        let mut derived = derive(&seed).decisions;
        assert_eq!(direct.next_unit().to_bits(), derived.next_unit().to_bits());
    }
}
