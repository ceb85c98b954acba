use thiserror::Error;

/// Precondition violations reported by the fallible helpers.
///
/// The top-level integration entry points guard both cases and never return
/// these; they surface only from [`crate::min_value`] and
/// [`crate::insertion_index`] when called directly.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum IntegrateError {
    #[error("cannot take the minimum of an empty batch")]
    EmptyBatch,
    #[error("cannot search an empty sorted sequence")]
    EmptyInput,
}
