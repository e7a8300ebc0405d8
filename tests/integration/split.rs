//! Integration tests for splitting PDFs end to end.

use pdfsplice::config::SplitConfig;
use pdfsplice::error::SpliceError;
use pdfsplice::ops::split_pdf;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::common::{page_count, write_pdf};

fn split_config(input: PathBuf, outdir: PathBuf, ranges: &str) -> SplitConfig {
    SplitConfig {
        input,
        ranges: ranges.to_string(),
        outdir,
        name_pattern: None,
        password: None,
        overwrite: false,
        quiet: true,
        verbose: false,
    }
}

#[tokio::test]
async fn test_split_ranges_and_default_names() {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(dir.path(), "report.pdf", 10);
    let outdir = dir.path().join("parts");

    let outcome = split_pdf(&split_config(input, outdir.clone(), "1-3,7,9-"))
        .await
        .unwrap();

    assert_eq!(outcome.total_pages, 10);
    assert_eq!(outcome.segments.len(), 3);

    assert_eq!(outcome.segments[0].path, outdir.join("report_p1-3.pdf"));
    assert_eq!(page_count(&outcome.segments[0].path), 3);

    assert_eq!(outcome.segments[1].path, outdir.join("report_p7.pdf"));
    assert_eq!(page_count(&outcome.segments[1].path), 1);

    assert_eq!(outcome.segments[2].path, outdir.join("report_p9-10.pdf"));
    assert_eq!(page_count(&outcome.segments[2].path), 2);
}

#[tokio::test]
async fn test_split_whole_document_range() {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(dir.path(), "doc.pdf", 4);

    let outcome = split_pdf(&split_config(input, dir.path().to_path_buf(), "1-"))
        .await
        .unwrap();

    assert_eq!(outcome.segments.len(), 1);
    assert_eq!(outcome.segments[0].page_count, 4);
    assert_eq!(page_count(&outcome.segments[0].path), 4);
}

#[tokio::test]
async fn test_split_creates_outdir() {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(dir.path(), "doc.pdf", 2);
    let outdir = dir.path().join("deep").join("nested");

    split_pdf(&split_config(input, outdir.clone(), "1"))
        .await
        .unwrap();

    assert!(outdir.join("doc_p1.pdf").exists());
}

#[tokio::test]
async fn test_split_custom_name_pattern() {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(dir.path(), "report.pdf", 6);

    let mut config = split_config(input, dir.path().to_path_buf(), "1-2,5");
    config.name_pattern = Some("{base}-{start}_{end}.pdf".to_string());

    let outcome = split_pdf(&config).await.unwrap();
    assert_eq!(outcome.segments[0].path, dir.path().join("report-1_2.pdf"));
    assert_eq!(outcome.segments[1].path, dir.path().join("report-5_5.pdf"));
}

#[tokio::test]
async fn test_split_page_placeholder() {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(dir.path(), "doc.pdf", 3);

    let mut config = split_config(input, dir.path().to_path_buf(), "2");
    config.name_pattern = Some("page_{page}.pdf".to_string());

    let outcome = split_pdf(&config).await.unwrap();
    assert_eq!(outcome.segments[0].path, dir.path().join("page_2.pdf"));
}

#[tokio::test]
async fn test_split_page_placeholder_rejected_for_multi_page_range() {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(dir.path(), "doc.pdf", 5);

    let mut config = split_config(input, dir.path().to_path_buf(), "1-3");
    config.name_pattern = Some("page_{page}.pdf".to_string());

    let err = split_pdf(&config).await.unwrap_err();
    assert!(matches!(err, SpliceError::InvalidConfig { .. }));

    // Nothing was written
    assert!(!dir.path().join("page_1.pdf").exists());
}

#[tokio::test]
async fn test_split_rerun_requires_overwrite() {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(dir.path(), "doc.pdf", 5);

    let config = split_config(input, dir.path().to_path_buf(), "1-2,4");
    split_pdf(&config).await.unwrap();

    let err = split_pdf(&config).await.unwrap_err();
    match err {
        SpliceError::OutputExists { paths } => assert_eq!(paths.len(), 2),
        other => panic!("unexpected error: {other}"),
    }

    let mut config = config;
    config.overwrite = true;
    let outcome = split_pdf(&config).await.unwrap();
    assert_eq!(outcome.segments.len(), 2);
}

#[tokio::test]
async fn test_split_overlapping_ranges() {
    let dir = TempDir::new().unwrap();
    let input = write_pdf(dir.path(), "doc.pdf", 5);

    let outcome = split_pdf(&split_config(input, dir.path().to_path_buf(), "1-3,2-4"))
        .await
        .unwrap();

    assert_eq!(outcome.segments.len(), 2);
    assert_eq!(page_count(&outcome.segments[0].path), 3);
    assert_eq!(page_count(&outcome.segments[1].path), 3);
}
