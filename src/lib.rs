//! pdfsplice - Merge and split PDF files.
//!
//! This crate provides the library behind the `pdfsplice` CLI: loading
//! PDFs (with optional password decryption), concatenating documents in
//! order, and cutting a document into pieces selected by a page-range
//! mini-language.
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplice::config::MergeConfig;
//! use pdfsplice::ops::merge_pdfs;
//! use std::path::PathBuf;
//!
//! # async fn example() -> pdfsplice::Result<()> {
//! let config = MergeConfig {
//!     inputs: vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
//!     output: PathBuf::from("combined.pdf"),
//!     password: None,
//!     overwrite: false,
//!     quiet: false,
//!     verbose: false,
//! };
//! let outcome = merge_pdfs(&config).await?;
//! println!("{} pages", outcome.total_pages);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod naming;
pub mod ops;
pub mod output;
pub mod range;
pub mod utils;

pub use error::{Result, SpliceError};
pub use ops::{MergeOutcome, SplitOutcome, merge_pdfs, split_pdf};
pub use range::{PageRange, parse_range_spec};

/// Crate version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name from Cargo.toml.
pub const NAME: &str = env!("CARGO_PKG_NAME");
