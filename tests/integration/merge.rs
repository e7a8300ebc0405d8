//! Integration tests for merging PDFs end to end.

use lopdf::{Document, Object};
use pdfsplice::config::MergeConfig;
use pdfsplice::error::SpliceError;
use pdfsplice::ops::merge_pdfs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::common::{page_count, write_pdf, write_pdf_with_title};

fn merge_config(inputs: Vec<PathBuf>, output: PathBuf) -> MergeConfig {
    MergeConfig {
        inputs,
        output,
        password: None,
        overwrite: false,
        quiet: true,
        verbose: false,
    }
}

fn document_title(path: &Path) -> Option<String> {
    let doc = Document::load(path).unwrap();
    let info_id = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let info = doc.get_object(info_id).ok()?.as_dict().ok()?;
    match info.get(b"Title").ok()? {
        Object::String(bytes, _) => Some(String::from_utf8_lossy(bytes).into_owned()),
        _ => None,
    }
}

#[tokio::test]
async fn test_merge_two_pdfs() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", 2);
    let b = write_pdf(dir.path(), "b.pdf", 3);
    let output = dir.path().join("merged.pdf");

    let outcome = merge_pdfs(&merge_config(vec![a, b], output.clone()))
        .await
        .unwrap();

    assert_eq!(outcome.files_merged, 2);
    assert_eq!(outcome.total_pages, 5);
    assert_eq!(page_count(&output), 5);
}

#[tokio::test]
async fn test_merge_many_pdfs_in_order() {
    let dir = TempDir::new().unwrap();
    let inputs: Vec<PathBuf> = (0..4)
        .map(|i| write_pdf(dir.path(), &format!("doc_{i}.pdf"), i + 1))
        .collect();
    let output = dir.path().join("merged.pdf");

    let outcome = merge_pdfs(&merge_config(inputs, output.clone()))
        .await
        .unwrap();

    // 1 + 2 + 3 + 4 pages
    assert_eq!(outcome.total_pages, 10);
    assert_eq!(page_count(&output), 10);
}

#[tokio::test]
async fn test_merge_single_input() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", 3);
    let output = dir.path().join("merged.pdf");

    let outcome = merge_pdfs(&merge_config(vec![a], output.clone()))
        .await
        .unwrap();

    assert_eq!(outcome.files_merged, 1);
    assert_eq!(outcome.total_pages, 3);
    assert_eq!(page_count(&output), 3);
}

#[tokio::test]
async fn test_merge_keeps_first_input_metadata() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf_with_title(dir.path(), "a.pdf", 1, Some("First Title"));
    let b = write_pdf_with_title(dir.path(), "b.pdf", 1, Some("Second Title"));
    let output = dir.path().join("merged.pdf");

    merge_pdfs(&merge_config(vec![a, b], output.clone()))
        .await
        .unwrap();

    assert_eq!(document_title(&output).as_deref(), Some("First Title"));
}

#[tokio::test]
async fn test_merge_refuses_existing_output() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", 1);
    let output = dir.path().join("merged.pdf");
    std::fs::write(&output, b"keep me").unwrap();

    let err = merge_pdfs(&merge_config(vec![a], output.clone()))
        .await
        .unwrap_err();

    assert!(matches!(err, SpliceError::OutputExists { .. }));
    assert_eq!(std::fs::read(&output).unwrap(), b"keep me");
}

#[tokio::test]
async fn test_merge_overwrite_replaces_output() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", 2);
    let output = dir.path().join("merged.pdf");
    std::fs::write(&output, b"old").unwrap();

    let mut config = merge_config(vec![a], output.clone());
    config.overwrite = true;

    merge_pdfs(&config).await.unwrap();
    assert_eq!(page_count(&output), 2);
}

#[tokio::test]
async fn test_merge_output_equal_to_input_rejected() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", 1);

    let err = merge_pdfs(&merge_config(vec![a.clone()], a))
        .await
        .unwrap_err();

    assert!(matches!(err, SpliceError::InvalidConfig { .. }));
}

#[tokio::test]
async fn test_merge_same_input_twice() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", 2);
    let output = dir.path().join("merged.pdf");

    let outcome = merge_pdfs(&merge_config(vec![a.clone(), a], output.clone()))
        .await
        .unwrap();

    assert_eq!(outcome.total_pages, 4);
    assert_eq!(page_count(&output), 4);
}
