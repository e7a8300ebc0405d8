//! Error types for pdfsplice.
//!
//! All fallible operations in the crate return [`SpliceError`]. Variants map
//! onto the user-visible failure classes: bad range specs, missing inputs,
//! encrypted inputs, output collisions, and write failures. Each variant
//! carries enough context (paths, tokens, sources) to print an actionable
//! message, and maps to a distinct process exit code.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pdfsplice operations.
pub type Result<T> = std::result::Result<T, SpliceError>;

/// Main error type for pdfsplice operations.
#[derive(Debug, Error)]
pub enum SpliceError {
    /// A page-range token is malformed or out of bounds.
    #[error("Invalid range token '{spec}': {reason}")]
    InvalidRange {
        /// The offending token (or whole spec when no single token applies).
        spec: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Invalid arguments or argument combinations.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong.
        message: String,
    },

    /// An input file does not exist (or a glob pattern matched nothing).
    #[error("Input not found: {}", path.display())]
    FileNotFound {
        /// Path (or pattern) that resolved to nothing.
        path: PathBuf,
    },

    /// An input file exists but could not be parsed as a PDF.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", path.display())]
    FailedToLoadPdf {
        /// Path to the file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// An input is encrypted and no password was supplied.
    #[error("File is encrypted: {} (pass --password)", path.display())]
    EncryptedInput {
        /// Path to the encrypted input.
        path: PathBuf,
    },

    /// The supplied password does not decrypt an encrypted input.
    #[error("Failed to decrypt: {} (check --password)", path.display())]
    DecryptionFailed {
        /// Path to the encrypted input.
        path: PathBuf,
    },

    /// The page tree of a document is not structured the way lopdf expects.
    #[error("Malformed PDF page tree: {reason}")]
    MalformedPageTree {
        /// Details about the failure.
        reason: String,
    },

    /// One or more planned output paths already exist and `--overwrite`
    /// was not given.
    #[error("Refusing to overwrite existing file(s):\n{}\n(use --overwrite)", list_paths(paths))]
    OutputExists {
        /// Every planned path that already exists.
        paths: Vec<PathBuf>,
    },

    /// Failed to create an output file or directory.
    #[error("Failed to create output: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Path that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write to an output file.
    #[error("Failed to write output: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
}

fn list_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

impl SpliceError {
    /// Create an InvalidRange error.
    pub fn invalid_range(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            spec: spec.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create an EncryptedInput error.
    pub fn encrypted_input(path: PathBuf) -> Self {
        Self::EncryptedInput { path }
    }

    /// Create a DecryptionFailed error.
    pub fn decryption_failed(path: PathBuf) -> Self {
        Self::DecryptionFailed { path }
    }

    /// Create a MalformedPageTree error.
    pub fn malformed_page_tree(reason: impl Into<String>) -> Self {
        Self::MalformedPageTree {
            reason: reason.into(),
        }
    }

    /// Create an OutputExists error.
    pub fn output_exists(paths: Vec<PathBuf>) -> Self {
        Self::OutputExists { paths }
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidRange { .. } => 1,
            Self::InvalidConfig { .. } => 1,
            Self::FileNotFound { .. } => 2,
            Self::FailedToLoadPdf { .. } => 3,
            Self::EncryptedInput { .. } => 3,
            Self::DecryptionFailed { .. } => 3,
            Self::MalformedPageTree { .. } => 3,
            Self::OutputExists { .. } => 4,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::Io { .. } => 5,
        }
    }
}
