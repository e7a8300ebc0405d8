//! PDF loading with optional decryption.
//!
//! Loads run inside `spawn_blocking` since lopdf's parser is synchronous.
//! Multi-file loads are strictly sequential and fail fast: the first bad
//! input aborts the whole operation before anything is written.

use lopdf::Document;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::{Result, SpliceError};

/// A loaded PDF document with the facts the operations need.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The parsed (and, if needed, decrypted) document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: u32,

    /// File size in bytes.
    pub file_size: u64,
}

/// PDF reader with an optional shared password.
///
/// The same password is tried against every encrypted input, matching the
/// CLI's single `--password` argument. Unencrypted inputs ignore it.
#[derive(Debug, Clone, Default)]
pub struct PdfReader {
    password: Option<String>,
}

impl PdfReader {
    /// Create a reader without a password.
    pub fn new() -> Self {
        Self { password: None }
    }

    /// Create a reader that decrypts encrypted inputs with `password`.
    pub fn with_password(password: Option<String>) -> Self {
        Self { password }
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// - [`SpliceError::FileNotFound`] if the path does not exist
    /// - [`SpliceError::FailedToLoadPdf`] if it is not a parseable PDF or
    ///   has no pages
    /// - [`SpliceError::EncryptedInput`] if it is encrypted and no
    ///   password was supplied
    /// - [`SpliceError::DecryptionFailed`] if the password is wrong
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let path_buf = path.to_path_buf();

        match tokio::fs::try_exists(&path_buf).await {
            Ok(true) => {}
            Ok(false) => return Err(SpliceError::file_not_found(path_buf)),
            Err(source) => return Err(SpliceError::Io { source }),
        }

        let password = self.password.clone();
        task::spawn_blocking(move || load_blocking(path_buf, password))
            .await
            .map_err(|err| SpliceError::Io {
                source: std::io::Error::other(format!("load task failed: {err}")),
            })?
    }

    /// Load multiple PDF documents sequentially, in order, failing fast.
    pub async fn load_all(&self, paths: &[PathBuf]) -> Result<Vec<LoadedPdf>> {
        let mut loaded = Vec::with_capacity(paths.len());
        for path in paths {
            loaded.push(self.load(path).await?);
        }
        Ok(loaded)
    }
}

fn load_blocking(path: PathBuf, password: Option<String>) -> Result<LoadedPdf> {
    let mut document = Document::load(&path)
        .map_err(|err| SpliceError::failed_to_load_pdf(path.clone(), err.to_string()))?;

    if document.is_encrypted() {
        let Some(password) = password else {
            return Err(SpliceError::encrypted_input(path));
        };
        document
            .decrypt(&password)
            .map_err(|_| SpliceError::decryption_failed(path.clone()))?;
    }

    let page_count = document.get_pages().len() as u32;
    if page_count == 0 {
        return Err(SpliceError::failed_to_load_pdf(path, "PDF has no pages"));
    }

    let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

    Ok(LoadedPdf {
        document,
        path,
        page_count,
        file_size,
    })
}
