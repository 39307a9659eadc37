use thiserror::Error;

/// Error returned when a read is attempted past the last element.
///
/// End of sequence is the designed way to detect "no more input". It is a
/// recoverable control-flow signal reported through `Result`, never a panic:
/// a caller that drains a cursor to the end has done nothing wrong.
///
/// `position` is the cursor's read offset at the time of the failed read.
/// For an exhausted cursor this is always the total element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("end of sequence at position {position}")]
pub struct EndOfSequence {
    /// Read offset at which the failed read was attempted
    pub position: usize,
}
