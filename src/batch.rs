/// Outcome of a predicate-bounded batch read.
///
/// A scan either ends inside the sequence because the stop condition fired,
/// or runs off the end without it ever firing. The two outcomes are mutually
/// exclusive, but both carry the elements consumed so far: on exhaustion the
/// caller gets "here is what I found; you also hit the end".
///
/// The carried slice borrows from the cursor's underlying sequence and is
/// empty (never absent) when zero elements qualified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Batch<'seq, T> {
    /// The stop condition fired on an element inside the sequence
    Stopped(&'seq [T]),
    /// The scan reached the end of the sequence without the stop condition
    /// firing; holds everything consumed, possibly nothing
    Exhausted(&'seq [T]),
}

impl<'seq, T> Batch<'seq, T> {
    /// The elements consumed by the scan, regardless of how it ended.
    pub fn items(&self) -> &'seq [T] {
        match self {
            Batch::Stopped(items) => items,
            Batch::Exhausted(items) => items,
        }
    }

    /// Whether the scan ended by reaching the end of the sequence.
    pub fn eos(&self) -> bool {
        matches!(self, Batch::Exhausted(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_accessors() {
        let batch = Batch::Stopped(&[1, 2, 3][..]);
        assert_eq!(batch.items(), &[1, 2, 3]);
        assert!(!batch.eos());
    }

    #[test]
    fn test_exhausted_accessors() {
        let batch = Batch::Exhausted(&[7u8][..]);
        assert_eq!(batch.items(), &[7]);
        assert!(batch.eos());
    }

    #[test]
    fn test_exhausted_empty_is_still_a_result() {
        let batch: Batch<u8> = Batch::Exhausted(&[]);
        assert!(batch.items().is_empty());
        assert!(batch.eos());
    }
}
