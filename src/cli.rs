//! CLI argument parsing for pdfsplice.
//!
//! This module defines the command-line interface structure using `clap`.
//! It handles argument parsing, validation, and help text generation.
//!
//! # Examples
//!
//! ```no_run
//! use pdfsplice::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{MergeConfig, SplitConfig};
use crate::error::Result;
use crate::utils::expand_input_patterns;

/// Merge and split PDF files from the command line.
///
/// pdfsplice concatenates multiple PDFs into one, or cuts a single PDF
/// into pieces selected by page ranges. Page numbers are 1-indexed and
/// ranges are inclusive on both ends.
#[derive(Parser, Debug)]
#[command(name = "pdfsplice")]
#[command(version)]
#[command(about = "Merge and split PDF files", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress all non-error output
    ///
    /// Only errors and warnings will be printed.
    /// Useful for scripts and automation.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output - show detailed information about each file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the operation summary as JSON on stdout
    ///
    /// Human-readable progress messages are suppressed.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge multiple PDF files into a single document
    ///
    /// Files are concatenated in the order given. Metadata from the
    /// first input is preserved in the output.
    ///
    /// Examples:
    ///   pdfsplice merge a.pdf b.pdf -o combined.pdf
    ///   pdfsplice merge chapter*.pdf -o book.pdf
    Merge {
        /// Input PDF files to merge (in order)
        ///
        /// Specify multiple files or use glob patterns.
        #[arg(required = true, value_name = "FILE")]
        inputs: Vec<PathBuf>,

        /// Output PDF file path
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Password for encrypted input files
        ///
        /// Applied to every encrypted input.
        #[arg(long, value_name = "PASSWORD")]
        password: Option<String>,

        /// Overwrite the output file if it already exists
        #[arg(long)]
        overwrite: bool,
    },

    /// Split a PDF into one output file per page range
    ///
    /// Ranges use a comma-separated mini-language: "3" is a single
    /// page, "2-5" is inclusive, "-4" runs from the first page, and
    /// "7-" runs to the last page.
    ///
    /// Examples:
    ///   pdfsplice split report.pdf --ranges 1-3,7,9-
    ///   pdfsplice split report.pdf --ranges 1-5 --outdir parts
    Split {
        /// Input PDF file to split
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Page ranges to extract, one output file per range
        #[arg(short, long, value_name = "RANGES")]
        ranges: String,

        /// Directory for the output files
        ///
        /// Created if it does not exist.
        #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
        outdir: PathBuf,

        /// Output filename pattern
        ///
        /// Placeholders: {base} (input stem), {start}, {end}, and
        /// {page} for single-page ranges. Default is
        /// "{base}_p{start}-{end}.pdf" ("{base}_p{page}.pdf" for a
        /// single page).
        #[arg(long, value_name = "PATTERN")]
        name_pattern: Option<String>,

        /// Password for an encrypted input file
        #[arg(long, value_name = "PASSWORD")]
        password: Option<String>,

        /// Overwrite output files that already exist
        #[arg(long)]
        overwrite: bool,
    },
}

impl Cli {
    /// Convert merge arguments into a validated [`MergeConfig`].
    ///
    /// Glob patterns in the inputs are expanded here, so the config
    /// always holds concrete paths.
    ///
    /// # Errors
    ///
    /// Returns an error if called on a non-merge command, if a glob
    /// pattern is invalid or matches nothing, or if the configuration
    /// fails validation.
    pub fn to_merge_config(&self) -> Result<MergeConfig> {
        let Commands::Merge {
            inputs,
            output,
            password,
            overwrite,
        } = &self.command
        else {
            return Err(crate::error::SpliceError::invalid_config(
                "not a merge command",
            ));
        };

        let config = MergeConfig {
            inputs: expand_input_patterns(inputs)?,
            output: output.clone(),
            password: password.clone(),
            overwrite: *overwrite,
            quiet: self.quiet || self.json,
            verbose: self.verbose,
        };

        config.validate()?;
        Ok(config)
    }

    /// Convert split arguments into a validated [`SplitConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if called on a non-split command or if the
    /// configuration fails validation.
    pub fn to_split_config(&self) -> Result<SplitConfig> {
        let Commands::Split {
            input,
            ranges,
            outdir,
            name_pattern,
            password,
            overwrite,
        } = &self.command
        else {
            return Err(crate::error::SpliceError::invalid_config(
                "not a split command",
            ));
        };

        let config = SplitConfig {
            input: input.clone(),
            ranges: ranges.clone(),
            outdir: outdir.clone(),
            name_pattern: name_pattern.clone(),
            password: password.clone(),
            overwrite: *overwrite,
            quiet: self.quiet || self.json,
            verbose: self.verbose,
        };

        config.validate()?;
        Ok(config)
    }
}
