//! Merge a small unsorted batch of integers into an already sorted sequence.
//!
//! The batch minimum is located in the sorted input by binary search. Only
//! the suffix starting at that position is re-sorted; the prefix before it is
//! copied untouched. Every prefix element is `<=` the batch minimum, so the
//! result is fully sorted.

mod error;
mod search;
mod suffix;

use log::{debug, trace};

pub use error::IntegrateError;
pub use search::{ALL_POLICIES, SearchPolicy, insertion_index, policy_name};
pub use suffix::{ALL_STRATEGIES, SuffixSort, strategy_name};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IntegrateParams {
    pub search: SearchPolicy,
    pub suffix: SuffixSort,
    /// Batches up to this length are ordered by insertion sort under
    /// [`SuffixSort::RunMerge`].
    pub insertion_threshold: usize,
}

/// Minimum retained merge buffer, in elements.
pub const SCRATCH_RETAIN_MIN: usize = 1024;
pub const SCRATCH_RETAIN_FACTOR: usize = 4;

pub const DEFAULT_PARAMS: IntegrateParams = IntegrateParams {
    search: SearchPolicy::MidpointProbe,
    suffix: SuffixSort::RunMerge,
    insertion_threshold: 24,
};

impl Default for IntegrateParams {
    fn default() -> Self {
        DEFAULT_PARAMS
    }
}

/// Output of one integration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Integration {
    pub combined: Vec<i64>,
    /// `combined[..insertion_index]` equals `sorted[..insertion_index]`.
    pub insertion_index: usize,
}

/// Minimum of `batch`, or [`IntegrateError::EmptyBatch`].
pub fn min_value(batch: &[i64]) -> Result<i64, IntegrateError> {
    batch.iter().copied().min().ok_or(IntegrateError::EmptyBatch)
}

/// Reusable integrator. Holds the parameters and a merge buffer that is kept
/// across calls. The buffer is released once it exceeds
/// [`SCRATCH_RETAIN_FACTOR`] times the current batch length.
#[derive(Clone, Debug, Default)]
pub struct Integrator {
    params: IntegrateParams,
    scratch: Vec<i64>,
}

impl Integrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: IntegrateParams) -> Self {
        Self {
            params,
            scratch: Vec::new(),
        }
    }

    pub fn params(&self) -> IntegrateParams {
        self.params
    }

    pub fn integrate_and_sort(&mut self, sorted: &[i64], batch: &[i64]) -> Vec<i64> {
        self.integrate(sorted, batch).combined
    }

    pub fn integrate(&mut self, sorted: &[i64], batch: &[i64]) -> Integration {
        let mut combined = Vec::with_capacity(sorted.len() + batch.len());
        combined.extend_from_slice(sorted);
        let insertion_index = self.integrate_in_place(&mut combined, batch);
        Integration {
            combined,
            insertion_index,
        }
    }

    /// Integrates `batch` directly into the caller's vector and returns the
    /// insertion index. `data` must be non-decreasing on entry; it is
    /// modified in place.
    pub fn integrate_in_place(&mut self, data: &mut Vec<i64>, batch: &[i64]) -> usize {
        debug_assert!(data.is_sorted(), "input sequence is not sorted");

        let min_new = match min_value(batch) {
            Ok(min) => min,
            Err(_) => {
                debug!("empty batch, {} elements left as is", data.len());
                return data.len();
            }
        };

        let index = match insertion_index(data.as_slice(), min_new, self.params.search) {
            Ok(index) => index,
            Err(_) => {
                debug!("empty sorted input, sorting batch of {}", batch.len());
                0
            }
        };

        let run_len = data.len() - index;
        data.extend_from_slice(batch);
        trace!(
            "min_new={min_new} insertion_index={index} suffix_len={}",
            data.len() - index
        );

        suffix::sort_suffix(
            &mut data[index..],
            run_len,
            self.params.suffix,
            self.params.insertion_threshold,
            &mut self.scratch,
        );
        self.trim_scratch(batch.len());
        index
    }

    fn trim_scratch(&mut self, batch_len: usize) {
        let keep = (batch_len * SCRATCH_RETAIN_FACTOR).max(SCRATCH_RETAIN_MIN);
        if self.scratch.capacity() > keep {
            trace!("releasing merge buffer of {}", self.scratch.capacity());
            self.scratch.clear();
            self.scratch.shrink_to(batch_len);
        }
    }
}

/// Returns `sorted` with `batch` merged in, using [`DEFAULT_PARAMS`].
pub fn integrate_and_sort(sorted: &[i64], batch: &[i64]) -> Vec<i64> {
    Integrator::new().integrate_and_sort(sorted, batch)
}

/// Like [`integrate_and_sort`], also reporting the insertion index.
pub fn integrate(sorted: &[i64], batch: &[i64]) -> Integration {
    Integrator::new().integrate(sorted, batch)
}
