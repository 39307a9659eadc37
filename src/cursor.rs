use crate::batch::Batch;
use crate::error::EndOfSequence;

/// Sequential read cursor over a borrowed slice
///
/// A cursor wraps a slice and a read offset that only ever moves forward,
/// by exactly one per consumed element. The slice is borrowed, never copied:
/// single reads yield `&'seq T` and batch reads yield contiguous subslices
/// of the original data. The borrow also rules out mutation of the sequence
/// for the cursor's whole lifetime.
///
/// Reading past the last element is not a fault. It returns the
/// [`EndOfSequence`] signal, leaves the offset untouched, and can be
/// retried indefinitely.
///
/// ```rust
/// use slicecursor::SliceCursor;
///
/// let line = [3, 1, 4, 0, 5, 9];
/// let mut cursor = SliceCursor::new(&line);
///
/// let head = cursor.read_until(|v| *v == 0);
/// assert_eq!(head.items(), &[3, 1, 4]);
/// assert!(!head.eos());
///
/// // the terminator is still unread
/// assert_eq!(cursor.read(), Ok(&0));
/// assert_eq!(cursor.remaining(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SliceCursor<'seq, T> {
    elements: &'seq [T],
    /// Read offset, `0..=elements.len()`, monotonically non-decreasing
    position: usize,
}

impl<'seq, T> SliceCursor<'seq, T> {
    /// Create a cursor positioned at the first element.
    ///
    /// Any slice is valid input, including an empty one, which produces a
    /// cursor that is exhausted from the start.
    pub fn new(elements: &'seq [T]) -> Self {
        Self {
            elements,
            position: 0,
        }
    }

    /// Number of unread elements.
    pub fn remaining(&self) -> usize {
        self.elements.len() - self.position
    }

    /// Length of the underlying slice.
    ///
    /// The returned value is fixed at construction and is not affected by
    /// calls to any read operation.
    pub fn total(&self) -> usize {
        self.elements.len()
    }

    /// Current read offset, in `0..=total()`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Check whether every element has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.elements.len()
    }

    /// The full underlying slice, independent of the read offset.
    pub fn source(&self) -> &'seq [T] {
        self.elements
    }

    /// Element at the read offset, without consuming it.
    pub fn peek(&self) -> Result<&'seq T, EndOfSequence> {
        self.elements.get(self.position).ok_or(EndOfSequence {
            position: self.position,
        })
    }

    /// Read a single element and advance the offset past it.
    ///
    /// On an exhausted cursor this returns [`EndOfSequence`] and leaves the
    /// offset unchanged, so further calls keep returning the same signal.
    pub fn read(&mut self) -> Result<&'seq T, EndOfSequence> {
        let element = self.peek()?;
        self.position += 1;
        Ok(element)
    }

    /// Read elements for as long as `keep` returns true.
    ///
    /// Stops on the first element where `keep` is false and leaves that
    /// element unread. Reaching the end of the sequence instead yields
    /// [`Batch::Exhausted`] with everything consumed.
    pub fn read_while<P>(&mut self, keep: P) -> Batch<'seq, T>
    where
        P: Fn(&T) -> bool,
    {
        self.scan(|element| !keep(element), false)
    }

    /// Read elements until `stop` returns true.
    ///
    /// The triggering element is left unread, positioned at the new offset.
    /// Reaching the end of the sequence instead yields [`Batch::Exhausted`]
    /// with everything consumed.
    pub fn read_until<P>(&mut self, stop: P) -> Batch<'seq, T>
    where
        P: Fn(&T) -> bool,
    {
        self.scan(stop, false)
    }

    /// Read elements for as long as `keep` returns true, consuming the
    /// element that ended the scan as well.
    ///
    /// The triggering element is the last item of the returned batch and
    /// the offset advances past it.
    pub fn read_while_inclusive<P>(&mut self, keep: P) -> Batch<'seq, T>
    where
        P: Fn(&T) -> bool,
    {
        self.scan(|element| !keep(element), true)
    }

    /// Read elements until `stop` returns true, consuming the element that
    /// ended the scan as well.
    pub fn read_until_inclusive<P>(&mut self, stop: P) -> Batch<'seq, T>
    where
        P: Fn(&T) -> bool,
    {
        self.scan(stop, true)
    }

    /// Forward scan shared by the four batch reads.
    ///
    /// The predicate runs before the offset advances past the element under
    /// test, so a panicking predicate unwinds with the cursor positioned
    /// exactly at the element it rejected.
    fn scan<P>(&mut self, stop: P, consume_trigger: bool) -> Batch<'seq, T>
    where
        P: Fn(&T) -> bool,
    {
        let elements = self.elements;
        let start = self.position;
        while let Some(element) = elements.get(self.position) {
            if stop(element) {
                if consume_trigger {
                    self.position += 1;
                }
                return Batch::Stopped(&elements[start..self.position]);
            }
            self.position += 1;
        }
        Batch::Exhausted(&elements[start..])
    }
}

impl<'seq, T> Iterator for SliceCursor<'seq, T> {
    type Item = &'seq T;

    fn next(&mut self) -> Option<Self::Item> {
        self.read().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<'seq, T> ExactSizeIterator for SliceCursor<'seq, T> {}

// read() keeps failing once exhausted, so next() is fused for free
impl<'seq, T> std::iter::FusedIterator for SliceCursor<'seq, T> {}
