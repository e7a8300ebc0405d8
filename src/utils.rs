//! Shared helpers: input pattern expansion and size formatting.

use std::path::PathBuf;

use crate::error::{Result, SpliceError};

/// Expand merge input arguments, resolving shell-style glob patterns.
///
/// Arguments without glob metacharacters pass through untouched (a missing
/// file is reported by the reader, with the path the user typed). Arguments
/// containing `*`, `?`, or `[` are expanded via [`glob`]; a pattern that
/// matches nothing is an error, since silently merging fewer files than
/// asked for is worse than failing.
///
/// Pattern examples:
/// - `"chapter*.pdf"`
/// - `"scans/[0-9][0-9].pdf"`
pub fn expand_input_patterns(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut resolved = Vec::with_capacity(inputs.len());

    for input in inputs {
        let Some(text) = input.to_str() else {
            resolved.push(input.clone());
            continue;
        };

        if !text.chars().any(|c| matches!(c, '*' | '?' | '[')) {
            resolved.push(input.clone());
            continue;
        }

        let entries = glob::glob(text).map_err(|err| {
            SpliceError::invalid_config(format!("Invalid glob pattern '{text}': {err}"))
        })?;

        let mut matches = Vec::new();
        for entry in entries {
            let path = entry.map_err(|err| SpliceError::Io {
                source: err.into_error(),
            })?;
            matches.push(path);
        }

        if matches.is_empty() {
            return Err(SpliceError::file_not_found(input.clone()));
        }

        resolved.extend(matches);
    }

    Ok(resolved)
}

/// Format a byte count as a human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
