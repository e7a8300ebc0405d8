//! PDF file I/O: loading (with optional decryption) and safe writing.

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteOptions};
