//! Errors reported by tree mutations.

use thiserror::Error;

/// An error raised by a structural edit of the IR tree.
///
/// All variants signal a programming error in tree construction, not a
/// transient condition: nothing is retried or recovered internally, and an
/// operation that fails has not mutated anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A handle was passed where a live node was required.
    #[error("operation requires a live node handle")]
    InvalidArgument,

    /// An index argument is outside the valid bound for the operation.
    #[error("index {index} out of range for collection of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The collection length at the time of the call.
        len: usize,
    },

    /// An element already belongs to a different collection, or an
    /// occupant's back-reference disagrees with the collection holding it.
    #[error("element belongs to a different collection")]
    OwnershipConflict,
}
