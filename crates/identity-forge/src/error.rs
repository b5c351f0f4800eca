//! Error types for the identity-forge crate.
//!
//! This module defines semantic error enums for identity providers and record
//! synthesis, following the project's error handling conventions with
//! `thiserror`.

use thiserror::Error;

/// Errors raised by an [`IdentityProvider`](crate::IdentityProvider).
///
/// Providers are pure functions of region and seed, so the same inputs always
/// fail the same way. Retrying without changing the provider is pointless.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// A locale table the provider draws from is empty.
    #[error("identity dataset '{dataset}' is empty")]
    EmptyDataset {
        /// Name of the exhausted dataset.
        dataset: &'static str,
    },

    /// The provider rejected the request for another reason.
    #[error("identity provider failed: {message}")]
    Provider {
        /// Description of the provider failure.
        message: String,
    },
}

/// Errors that can occur while synthesizing records.
///
/// Input validation errors are fatal to the call that supplied them. An
/// [`SynthesisError::IdentityGenerationFailure`] only affects the record it
/// names; batch generation records it and moves on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthesisError {
    /// The identity provider failed for the given record index.
    #[error("identity generation failed for record {index}: {source}")]
    IdentityGenerationFailure {
        /// Index of the record that could not be produced.
        index: u64,
        /// Underlying provider error.
        #[source]
        source: IdentityError,
    },

    /// The error rate is negative or not a finite number.
    #[error("error rate must be a finite, non-negative number, got {value}")]
    InvalidErrorRate {
        /// The rejected rate.
        value: f64,
    },

    /// The region name is not one of the supported regions.
    #[error("unknown region '{value}'; expected one of USA, Germany, Poland")]
    UnknownRegion {
        /// The unrecognised region name.
        value: String,
    },

    /// Record indices are 1-based.
    #[error("record index must be at least 1, got {index}")]
    InvalidIndex {
        /// The rejected index.
        index: u64,
    },

    /// The requested batch runs past the largest representable index.
    #[error("batch of {count} records starting at {start} overflows the index range")]
    IndexOverflow {
        /// First index of the batch.
        start: u64,
        /// Number of records requested.
        count: u64,
    },

    /// Page numbers are 1-based.
    #[error("page number must be at least 1, got {page}")]
    InvalidPage {
        /// The rejected page number.
        page: u64,
    },

    /// The page starts past the largest representable index.
    #[error("page {page} lies past the largest record index")]
    PageOverflow {
        /// The rejected page number.
        page: u64,
    },
}
