// Error outcomes of the GC analysis that callers need to tell apart.

use thiserror::Error;

/// Errors raised by the sequence store and the GC computations.
///
/// An empty windowed scan is not an error: it is reported as a scan with
/// zero samples and a `None` summary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GcError {
    /// The requested identifier is not in the store.
    #[error("Sequence {0} not found")]
    NotFound(String),

    /// Window sizes must be strictly positive.
    #[error("Invalid window size: {0} (must be greater than zero)")]
    InvalidWindowSize(usize),

    /// A sequence with no bases cannot be scanned.
    #[error("Sequence {0} is empty")]
    EmptySequence(String),

    /// Two records share an identifier and the store refuses to replace one.
    #[error("Duplicate sequence identifier {id} (first seen in {first}, again in {second})")]
    DuplicateIdentifier {
        id: String,
        first: String,
        second: String,
    },

    /// A character that is neither a nucleotide nor an IUPAC ambiguity code.
    #[error("Invalid base: {0:?}")]
    InvalidBase(char),
}
