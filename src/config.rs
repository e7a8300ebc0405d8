//! Operation configuration for pdfsplice.
//!
//! CLI arguments are turned into one of these validated configs before any
//! file is touched. Validation here covers logical consistency only; file
//! existence and PDF structure are checked by the reader when inputs are
//! actually opened.

use std::path::PathBuf;

use crate::error::{Result, SpliceError};

/// Configuration for a merge operation.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Input PDF paths, in merge order.
    pub inputs: Vec<PathBuf>,

    /// Output PDF path.
    pub output: PathBuf,

    /// Password applied to any encrypted input.
    pub password: Option<String>,

    /// Allow replacing an existing output file.
    pub overwrite: bool,

    /// Suppress non-error output.
    pub quiet: bool,

    /// Show per-file details.
    pub verbose: bool,
}

impl MergeConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no inputs are given, the output path is also an
    /// input, or quiet and verbose are both set.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(SpliceError::invalid_config("No input files specified"));
        }

        if self.quiet && self.verbose {
            return Err(SpliceError::invalid_config(
                "Cannot use both --verbose and --quiet",
            ));
        }

        for input in &self.inputs {
            if input == &self.output {
                return Err(SpliceError::invalid_config(format!(
                    "Output file cannot be the same as an input file: {}",
                    self.output.display()
                )));
            }
        }

        Ok(())
    }
}

/// Configuration for a split operation.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Input PDF path.
    pub input: PathBuf,

    /// Raw range spec (parsed against the real page count once the input
    /// is open).
    pub ranges: String,

    /// Directory that receives the segment files.
    pub outdir: PathBuf,

    /// Optional name pattern with `{base}`/`{page}`/`{start}`/`{end}`
    /// placeholders.
    pub name_pattern: Option<String>,

    /// Password if the input is encrypted.
    pub password: Option<String>,

    /// Allow replacing existing segment files.
    pub overwrite: bool,

    /// Suppress non-error output.
    pub quiet: bool,

    /// Show per-segment details.
    pub verbose: bool,
}

impl SplitConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the range spec is blank or quiet and verbose
    /// are both set.
    pub fn validate(&self) -> Result<()> {
        if self.ranges.trim().is_empty() {
            return Err(SpliceError::invalid_config(
                "--ranges must not be empty",
            ));
        }

        if self.quiet && self.verbose {
            return Err(SpliceError::invalid_config(
                "Cannot use both --verbose and --quiet",
            ));
        }

        Ok(())
    }

    /// The input filename's stem, used for `{base}` substitution.
    pub fn base_stem(&self) -> &str {
        self.input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("page")
    }
}
