//! Deterministic record synthesis.
//!
//! A record is a pure function of run seed, index, region and error rate.
//! Synthesis derives the record's seeds, asks the identity provider for the
//! base fields, rolls the error budget and applies that many corruption
//! passes. Nothing is shared between records, so indices may be synthesized
//! in any order, in any batch shape, or on several threads at once.

use tracing::{debug, warn};

use crate::corruption::CorruptionEngine;
use crate::error::SynthesisError;
use crate::identity::{FakerIdentityProvider, IdentityProvider};
use crate::record::Record;
use crate::region::Region;
use crate::seed::{CombinedSeed, ErrorRate, RecordIndex, RunSeed};
use crate::stream::{DecisionStream, DerivedSeeds, derive};

/// Rolls the number of corruption passes for one record.
///
/// The whole part of the rate is always applied. The fractional remainder is
/// a single Bernoulli trial against one draw from the stream. Exactly one
/// draw is consumed, even for whole-number rates.
///
/// # Example
///
/// ```
/// use identity_forge::{CombinedSeed, DecisionStream, ErrorRate, RecordIndex, RunSeed, error_budget};
///
/// let index = RecordIndex::new(1).expect("non-zero");
/// let mut stream = DecisionStream::new(&CombinedSeed::new(&RunSeed::from(42), index));
/// let rate = ErrorRate::new(3.0).expect("valid rate");
///
/// assert_eq!(error_budget(rate, &mut stream), 3);
/// assert_eq!(stream.draws(), 1);
/// ```
pub fn error_budget(rate: ErrorRate, stream: &mut DecisionStream) -> u64 {
    let draw = stream.next_unit();
    rate.whole().saturating_add(u64::from(rate.fraction() > draw))
}

/// Synthesizes records with a given identity provider.
///
/// # Example
///
/// ```
/// use identity_forge::{ErrorRate, RecordIndex, RecordSynthesizer, Region, RunSeed};
///
/// let synthesizer = RecordSynthesizer::default();
/// let index = RecordIndex::new(1).expect("non-zero");
/// let seed = RunSeed::from(42);
///
/// let first = synthesizer
///     .synthesize(index, Region::Usa, ErrorRate::ZERO, &seed)
///     .expect("record");
/// let second = synthesizer
///     .synthesize(index, Region::Usa, ErrorRate::ZERO, &seed)
///     .expect("record");
///
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone)]
pub struct RecordSynthesizer<P> {
    provider: P,
}

impl Default for RecordSynthesizer<FakerIdentityProvider> {
    fn default() -> Self {
        Self::new(FakerIdentityProvider)
    }
}

impl<P: IdentityProvider> RecordSynthesizer<P> {
    /// Creates a synthesizer around an identity provider.
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the identity provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Synthesizes the record at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::IdentityGenerationFailure`] if the identity
    /// provider fails. No partial record is produced.
    pub fn synthesize(
        &self,
        index: RecordIndex,
        region: Region,
        error_rate: ErrorRate,
        run_seed: &RunSeed,
    ) -> Result<Record, SynthesisError> {
        let combined = CombinedSeed::new(run_seed, index);
        let DerivedSeeds {
            identity_seed,
            mut decisions,
        } = derive(&combined);

        let bundle = self
            .provider
            .identity(region, identity_seed)
            .map_err(|source| SynthesisError::IdentityGenerationFailure {
                index: index.get(),
                source,
            })?;

        let mut record = Record {
            index: index.get(),
            identifier: bundle.identifier,
            name: bundle.name,
            address: bundle.address,
            phone: bundle.phone,
        };

        let total_errors = error_budget(error_rate, &mut decisions);
        let engine = CorruptionEngine::for_region(region);
        let applied = engine.corrupt(&mut record, &mut decisions, total_errors);

        debug!(
            index = index.get(),
            %region,
            total_errors,
            applied,
            "synthesized record"
        );
        Ok(record)
    }

    /// Synthesizes `count` records starting at `start_index`, in index order.
    ///
    /// Records whose identity cannot be generated are logged, collected in
    /// [`Batch::failures`] and skipped; the rest of the batch continues.
    ///
    /// # Errors
    ///
    /// Fails the whole call, before synthesizing anything, when:
    /// - `error_rate` is negative, NaN or infinite
    ///   ([`SynthesisError::InvalidErrorRate`])
    /// - `start_index` is zero ([`SynthesisError::InvalidIndex`])
    /// - the last index would overflow `u64`
    ///   ([`SynthesisError::IndexOverflow`])
    ///
    /// # Example
    ///
    /// ```
    /// use identity_forge::{RecordSynthesizer, Region, RunSeed};
    ///
    /// let synthesizer = RecordSynthesizer::default();
    /// let batch = synthesizer
    ///     .generate_batch(21, 10, Region::Poland, 2.5, &RunSeed::from(42))
    ///     .expect("batch");
    ///
    /// let indices: Vec<u64> = batch.records().iter().map(|record| record.index).collect();
    /// assert_eq!(indices, (21..=30).collect::<Vec<_>>());
    /// ```
    pub fn generate_batch(
        &self,
        start_index: u64,
        count: u64,
        region: Region,
        error_rate: f64,
        run_seed: &RunSeed,
    ) -> Result<Batch, SynthesisError> {
        let rate = ErrorRate::new(error_rate)?;
        let start = RecordIndex::new(start_index)?;
        let mut batch = Batch::default();
        if count == 0 {
            return Ok(batch);
        }
        let last = start_index
            .checked_add(count - 1)
            .ok_or(SynthesisError::IndexOverflow {
                start: start_index,
                count,
            })?;

        for raw_index in start.get()..=last {
            let index = RecordIndex::new(raw_index)?;
            match self.synthesize(index, region, rate, run_seed) {
                Ok(record) => batch.records.push(record),
                Err(err) => {
                    warn!(index = raw_index, %region, error = %err, "skipping record");
                    batch.failures.push(err);
                }
            }
        }
        Ok(batch)
    }
}

/// Records produced by one batch call, plus the indices that were skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    records: Vec<Record>,
    failures: Vec<SynthesisError>,
}

impl Batch {
    /// Successfully synthesized records in ascending index order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Per-record failures, in ascending index order.
    #[must_use]
    pub fn failures(&self) -> &[SynthesisError] {
        &self.failures
    }

    /// Consumes the batch, keeping only the records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}
