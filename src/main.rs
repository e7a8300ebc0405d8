//! pdfsplice - Merge and split PDF files from the command line.

use clap::Parser;
use std::process;

use pdfsplice::cli::{Cli, Commands};
use pdfsplice::error::SpliceError;
use pdfsplice::ops::{MergeOutcome, SplitOutcome, merge_pdfs, split_pdf};
use pdfsplice::output::OutputFormatter;
use pdfsplice::utils::format_file_size;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

/// Main application logic.
async fn run(cli: Cli) -> Result<(), SpliceError> {
    match cli.command {
        Commands::Merge { .. } => {
            let config = cli.to_merge_config()?;
            let formatter = OutputFormatter::new(config.quiet, config.verbose);

            formatter.info(&format!("Merging {} file(s)...", config.inputs.len()));

            let outcome = merge_pdfs(&config).await?;

            if cli.json {
                print_json(&outcome)?;
            } else {
                report_merge(&formatter, &outcome);
            }
        }
        Commands::Split { .. } => {
            let config = cli.to_split_config()?;
            let formatter = OutputFormatter::new(config.quiet, config.verbose);

            formatter.info(&format!("Splitting {}...", config.input.display()));

            let outcome = split_pdf(&config).await?;

            if cli.json {
                print_json(&outcome)?;
            } else {
                report_split(&formatter, &outcome);
            }
        }
    }

    Ok(())
}

fn report_merge(formatter: &OutputFormatter, outcome: &MergeOutcome) {
    formatter.success(&format!(
        "Merged {} file(s) into {} ({} pages, {})",
        outcome.files_merged,
        outcome.output.display(),
        outcome.total_pages,
        format_file_size(outcome.output_size)
    ));

    if formatter.is_verbose() {
        formatter.blank_line();
        formatter.detail("Output", &outcome.output.display().to_string());
        formatter.detail("Pages", &outcome.total_pages.to_string());
        formatter.detail("Size", &format_file_size(outcome.output_size));
    }
}

fn report_split(formatter: &OutputFormatter, outcome: &SplitOutcome) {
    for (idx, segment) in outcome.segments.iter().enumerate() {
        formatter.list_item(
            idx + 1,
            &format!(
                "{} ({} page(s), {})",
                segment.path.display(),
                segment.page_count,
                format_file_size(segment.file_size)
            ),
        );
    }

    formatter.success(&format!(
        "Split {} ({} pages) into {} file(s)",
        outcome.input.display(),
        outcome.total_pages,
        outcome.segments.len()
    ));
}

fn print_json<T: serde::Serialize>(outcome: &T) -> Result<(), SpliceError> {
    let json = serde_json::to_string_pretty(outcome).map_err(|err| SpliceError::Io {
        source: std::io::Error::other(format!("failed to encode JSON: {err}")),
    })?;
    println!("{json}");
    Ok(())
}
