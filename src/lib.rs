//! # SliceCursor - Sequential Slice Reader
//!
//! A sequential-access cursor over a borrowed in-memory slice, read the way
//! an `io::Read` source is read: one element at a time or in
//! predicate-delimited batches, with a monotonic offset tracking how far the
//! consumer has gotten. The library emphasizes:
//!
//! - **Zero panics**: running off the end of the sequence is an ordinary
//!   `Result`, the designed way to detect "no more input"
//! - **Zero copies**: the cursor borrows its slice; reads hand out references
//!   and contiguous subslices of the original data
//! - **Predicate-bounded batches**: `read_while`/`read_until` and their
//!   `_inclusive` variants segment a sequence without the caller juggling
//!   indices

pub mod batch;
pub mod cursor;
pub mod error;

pub use batch::Batch;
pub use cursor::SliceCursor;
pub use error::EndOfSequence;
