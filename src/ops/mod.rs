//! High-level operations: merging and splitting PDF documents.

pub mod merge;
pub mod split;

pub use merge::{MergeOutcome, merge_pdfs};
pub use split::{SplitOutcome, SplitSegment, split_pdf};
