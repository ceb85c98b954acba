use crate::IntegrateError;

/// How the insertion point for the batch minimum is located.
///
/// Both policies return an index `i` such that `sorted[..i]` holds only values
/// `<= target` and `sorted[i..]` holds only values `>= target`. They differ
/// only when `target` occurs more than once in `sorted`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum SearchPolicy {
    /// Narrowing binary search that stops at the first probed midpoint equal
    /// to the target. With duplicates of the target the returned index may be
    /// any of the tied positions, depending on the probe path.
    #[default]
    MidpointProbe,
    /// Classic lower bound: the first index whose value is `>= target`.
    Leftmost,
}

pub const ALL_POLICIES: [SearchPolicy; 2] = [SearchPolicy::MidpointProbe, SearchPolicy::Leftmost];

pub fn policy_name(policy: SearchPolicy) -> &'static str {
    match policy {
        SearchPolicy::MidpointProbe => "midpoint_probe",
        SearchPolicy::Leftmost => "leftmost",
    }
}

/// Finds where `target` belongs in the non-decreasing slice `sorted`.
///
/// Returns `sorted.len()` when every element is smaller than `target`.
/// An empty `sorted` has no search range and yields
/// [`IntegrateError::EmptyInput`].
pub fn insertion_index(
    sorted: &[i64],
    target: i64,
    policy: SearchPolicy,
) -> Result<usize, IntegrateError> {
    if sorted.is_empty() {
        return Err(IntegrateError::EmptyInput);
    }
    Ok(match policy {
        SearchPolicy::MidpointProbe => midpoint_probe(sorted, target),
        SearchPolicy::Leftmost => leftmost(sorted, target),
    })
}

// Closed range [low, high]. `high` never drops below `low`: a left step from
// `mid == low` means `sorted[low] > target`, which already answers `low`.
fn midpoint_probe(sorted: &[i64], target: i64) -> usize {
    debug_assert!(!sorted.is_empty());

    let mut low = 0usize;
    let mut high = sorted.len() - 1;
    loop {
        if low >= high {
            return if sorted[low] < target { low + 1 } else { low };
        }

        let mid = low + ((high - low) >> 1);
        let probe = sorted[mid];
        if probe == target {
            return mid;
        } else if probe < target {
            low = mid + 1;
        } else {
            if mid == low {
                return low;
            }
            high = mid - 1;
        }
    }
}

fn leftmost(sorted: &[i64], target: i64) -> usize {
    let mut left = 0usize;
    let mut right = sorted.len();
    while left < right {
        let mid = left + ((right - left) >> 1);
        if sorted[mid] < target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    left
}
