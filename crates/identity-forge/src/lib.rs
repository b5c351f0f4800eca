//! Reproducible, regionally formatted fake identity records.
//!
//! This crate synthesizes believable identity records (identifier, name,
//! address, phone) for testing and demonstrations, and can corrupt a
//! controllable share of them with realistic typos.
//!
//! # Overview
//!
//! A record is fully determined by four inputs: the run seed, the 1-based
//! record index, the [`Region`] and the [`ErrorRate`]. The crate provides:
//!
//! - Seed derivation into an identity seed and a decision stream
//! - A pluggable [`IdentityProvider`] with a `fake`-backed default
//! - Character-level corruption with region-aware alphabets
//! - Batch generation that skips, rather than aborts on, failed records
//! - Infinite-scroll page ranges
//!
//! # Example
//!
//! ```
//! use identity_forge::{RecordSynthesizer, Region, RunSeed};
//!
//! let synthesizer = RecordSynthesizer::default();
//! let seed = RunSeed::from(42);
//!
//! let page = synthesizer
//!     .generate_batch(1, 20, Region::Usa, 0.0, &seed)
//!     .expect("batch");
//! let again = synthesizer
//!     .generate_batch(1, 20, Region::Usa, 0.0, &seed)
//!     .expect("batch");
//!
//! assert_eq!(page.records().len(), 20);
//! assert_eq!(page, again);
//! ```

pub mod cli;
mod corruption;
mod error;
mod identity;
mod paging;
mod record;
mod region;
mod seed;
mod stream;
mod synthesizer;

pub use corruption::{Corruption, CorruptionEngine, Edit, Field, apply_edit};
pub use error::{IdentityError, SynthesisError};
pub use identity::{FakerIdentityProvider, IdentityBundle, IdentityProvider};
pub use paging::{DEFAULT_FIRST_PAGE_SIZE, DEFAULT_PAGE_SIZE, IndexRange, PagePlan};
pub use record::Record;
pub use region::{AddressParts, PhoneNumber, Region};
pub use seed::{CombinedSeed, ErrorRate, RecordIndex, RunSeed};
pub use stream::{DecisionStream, DerivedSeeds, derive};
pub use synthesizer::{Batch, RecordSynthesizer, error_budget};
