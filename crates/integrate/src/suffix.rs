/// How the re-sorted suffix `combined[insertion_index..]` is ordered.
///
/// The suffix always starts with a sorted run (the tail of the sorted input)
/// followed by the raw batch, so the two strategies produce identical output.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum SuffixSort {
    /// `sort_unstable` over the whole suffix.
    Unstable,
    /// Sort the batch alone, then merge it backwards into the sorted run.
    /// Scratch space is proportional to the batch, not the suffix.
    #[default]
    RunMerge,
}

pub const ALL_STRATEGIES: [SuffixSort; 2] = [SuffixSort::Unstable, SuffixSort::RunMerge];

pub fn strategy_name(strategy: SuffixSort) -> &'static str {
    match strategy {
        SuffixSort::Unstable => "unstable",
        SuffixSort::RunMerge => "run_merge",
    }
}

/// Sorts `suffix` in place. `suffix[..run_len]` must already be non-decreasing.
pub(crate) fn sort_suffix(
    suffix: &mut [i64],
    run_len: usize,
    strategy: SuffixSort,
    insertion_threshold: usize,
    scratch: &mut Vec<i64>,
) {
    debug_assert!(run_len <= suffix.len());
    debug_assert!(suffix[..run_len].is_sorted());

    match strategy {
        SuffixSort::Unstable => suffix.sort_unstable(),
        SuffixSort::RunMerge => {
            let batch = &mut suffix[run_len..];
            if batch.len() <= insertion_threshold {
                insertion_sort(batch);
            } else {
                batch.sort_unstable();
            }
            merge_sorted_tail(suffix, run_len, scratch);
        }
    }
}

fn insertion_sort(data: &mut [i64]) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
}

// Merges the sorted runs `data[..mid]` and `data[mid..]`, buffering the
// right-hand run and filling from the back.
fn merge_sorted_tail(data: &mut [i64], mid: usize, buf: &mut Vec<i64>) {
    if mid == 0 || mid == data.len() || data[mid - 1] <= data[mid] {
        return;
    }

    buf.clear();
    buf.extend_from_slice(&data[mid..]);

    let mut i = mid;
    let mut j = buf.len();
    let mut k = data.len();
    while i > 0 && j > 0 {
        k -= 1;
        if data[i - 1] > buf[j - 1] {
            data[k] = data[i - 1];
            i -= 1;
        } else {
            data[k] = buf[j - 1];
            j -= 1;
        }
    }

    // Whatever is left of the buffer belongs at the very front.
    data[..j].copy_from_slice(&buf[..j]);
}
