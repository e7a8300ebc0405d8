//! PDF writing with overwrite protection and atomic replacement.
//!
//! Writes go to a temp file in the target directory and are renamed into
//! place, so a failure mid-write never leaves a truncated PDF at the
//! target path. The overwrite guard runs over a whole plan of paths at
//! once: split reports every clash in one error rather than one per run.

use lopdf::Document;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::{Result, SpliceError};

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Write to a temp file, then rename into place.
    pub atomic: bool,

    /// Compress streams before writing.
    pub compress: bool,

    /// Buffer size for writing, in bytes.
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compress: true,
            buffer_size: 8192,
        }
    }
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a writer with default options.
    pub fn new() -> Self {
        Self {
            options: WriteOptions::default(),
        }
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Check a plan of output paths against existing files.
    ///
    /// With `overwrite` set this always succeeds. Otherwise it fails with
    /// [`SpliceError::OutputExists`] listing every planned path that is
    /// already on disk, before anything gets written.
    pub fn guard_overwrite(&self, planned: &[PathBuf], overwrite: bool) -> Result<()> {
        if overwrite {
            return Ok(());
        }

        let clashes: Vec<PathBuf> = planned.iter().filter(|p| p.exists()).cloned().collect();
        if clashes.is_empty() {
            Ok(())
        } else {
            Err(SpliceError::output_exists(clashes))
        }
    }

    /// Save a PDF document to a file, creating parent directories as
    /// needed.
    ///
    /// Returns the size of the written file in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SpliceError::FailedToCreateOutput`] if the file or its
    /// directory cannot be created, [`SpliceError::FailedToWrite`] if
    /// serialization, flushing, or the final rename fails.
    pub async fn save(&self, doc: &Document, path: &Path) -> Result<u64> {
        let path_buf = path.to_path_buf();
        let options = self.options.clone();

        // lopdf mutates during save prep, so work on a clone off the
        // async runtime.
        let mut doc = doc.clone();

        task::spawn_blocking(move || {
            if options.compress {
                doc.compress();
            }
            doc.renumber_objects();

            if let Some(parent) = path_buf.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent).map_err(|err| {
                    SpliceError::FailedToCreateOutput {
                        path: parent.to_path_buf(),
                        source: err,
                    }
                })?;
            }

            let write_path = if options.atomic {
                path_buf.with_extension("pdf.tmp")
            } else {
                path_buf.clone()
            };

            let file = std::fs::File::create(&write_path).map_err(|err| {
                SpliceError::FailedToCreateOutput {
                    path: write_path.clone(),
                    source: err,
                }
            })?;

            let mut writer = std::io::BufWriter::with_capacity(options.buffer_size, file);

            doc.save_to(&mut writer)
                .map_err(|err| SpliceError::FailedToWrite {
                    path: write_path.clone(),
                    source: std::io::Error::other(err),
                })?;

            writer.flush().map_err(|err| SpliceError::FailedToWrite {
                path: write_path.clone(),
                source: err,
            })?;

            if options.atomic {
                std::fs::rename(&write_path, &path_buf).map_err(|err| {
                    SpliceError::FailedToWrite {
                        path: path_buf.clone(),
                        source: err,
                    }
                })?;
            }

            let file_size = std::fs::metadata(&path_buf).map(|m| m.len()).unwrap_or(0);
            Ok(file_size)
        })
        .await
        .map_err(|err| SpliceError::Io {
            source: std::io::Error::other(format!("write task failed: {err}")),
        })?
    }
}
