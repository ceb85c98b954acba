use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 500;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1000;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Where the batch values fall relative to the sorted sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BatchPlacement {
    /// Anywhere in the value range of the sorted sequence.
    Uniform,
    /// Only in the top tenth, so the re-sorted suffix stays short.
    Tail,
    /// At least one value below everything, forcing a full-length suffix.
    Head,
}

impl BatchPlacement {
    pub fn label(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Tail => "tail",
            Self::Head => "head",
        }
    }
}

pub const ALL_PLACEMENTS: [BatchPlacement; 3] = [
    BatchPlacement::Uniform,
    BatchPlacement::Tail,
    BatchPlacement::Head,
];

/// Non-decreasing sequence of `len` values in `0..len * 4`.
pub fn sorted_dataset<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i64> {
    let span = (len as i64 * 4).max(1);
    let mut data = (0..len)
        .map(|_| rng.random_range(0..span))
        .collect::<Vec<_>>();
    data.sort_unstable();
    data
}

/// Copy of `sorted` with spare capacity for `extra` more elements, so that
/// appending a batch inside a timed region never reallocates.
pub fn with_spare_capacity(sorted: &[i64], extra: usize) -> Vec<i64> {
    let mut data = Vec::with_capacity(sorted.len() + extra);
    data.extend_from_slice(sorted);
    data
}

/// Unsorted batch for a sorted sequence of length `sorted_len` built by
/// [`sorted_dataset`].
pub fn unsorted_batch<R: Rng + ?Sized>(
    rng: &mut R,
    sorted_len: usize,
    len: usize,
    placement: BatchPlacement,
) -> Vec<i64> {
    let span = (sorted_len as i64 * 4).max(1);
    let low = match placement {
        BatchPlacement::Uniform | BatchPlacement::Head => 0,
        BatchPlacement::Tail => span - (span / 10).max(1),
    };

    let mut batch = (0..len)
        .map(|_| rng.random_range(low..span))
        .collect::<Vec<_>>();
    if placement == BatchPlacement::Head && len > 0 {
        let at = rng.random_range(0..len);
        batch[at] = -1;
    }
    batch
}
