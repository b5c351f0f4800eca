//! Infinite-scroll page layout.
//!
//! The first page of a listing is larger than the pages loaded after it. This
//! module only maps page numbers to index ranges; callers fetch the records
//! with [`RecordSynthesizer::generate_batch`](crate::RecordSynthesizer::generate_batch).

use crate::error::SynthesisError;

/// Records shown before the first scroll.
pub const DEFAULT_FIRST_PAGE_SIZE: u64 = 20;

/// Records appended on each later scroll.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// A contiguous run of 1-based record indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    /// First index in the range.
    pub start: u64,
    /// Number of indices in the range.
    pub count: u64,
}

/// Page sizes for a scrolling listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    /// Size of page 1.
    pub first_page_size: u64,
    /// Size of every later page.
    pub page_size: u64,
}

impl Default for PagePlan {
    fn default() -> Self {
        Self {
            first_page_size: DEFAULT_FIRST_PAGE_SIZE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PagePlan {
    /// Returns the index range shown on a 1-based page.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::InvalidPage`] for page zero and
    /// [`SynthesisError::PageOverflow`] when the page starts past `u64::MAX`.
    ///
    /// # Example
    ///
    /// ```
    /// use identity_forge::{IndexRange, PagePlan};
    ///
    /// let plan = PagePlan::default();
    /// assert_eq!(plan.page(1).expect("page"), IndexRange { start: 1, count: 20 });
    /// assert_eq!(plan.page(3).expect("page"), IndexRange { start: 31, count: 10 });
    /// ```
    pub fn page(&self, page: u64) -> Result<IndexRange, SynthesisError> {
        match page {
            0 => Err(SynthesisError::InvalidPage { page }),
            1 => Ok(IndexRange {
                start: 1,
                count: self.first_page_size,
            }),
            later => {
                let start = (later - 2)
                    .checked_mul(self.page_size)
                    .and_then(|offset| offset.checked_add(self.first_page_size))
                    .and_then(|offset| offset.checked_add(1))
                    .ok_or(SynthesisError::PageOverflow { page })?;
                Ok(IndexRange {
                    start,
                    count: self.page_size,
                })
            }
        }
    }
}
