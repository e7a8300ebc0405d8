//! Merging multiple PDF documents into one.
//!
//! The first input becomes the base document, so its trailer metadata
//! (Info dictionary, document title) carries over to the output. Every
//! subsequent document is renumbered past the base's highest object id
//! before its objects are folded in, then its pages are appended to the
//! base's page tree.

use lopdf::{Document, Object, ObjectId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::MergeConfig;
use crate::error::{Result, SpliceError};
use crate::io::{LoadedPdf, PdfReader, PdfWriter};

/// Summary of a completed merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeOutcome {
    /// Number of input files merged.
    pub files_merged: usize,

    /// Total pages in the output document.
    pub total_pages: usize,

    /// Path of the written output file.
    pub output: PathBuf,

    /// Size of the output file in bytes.
    pub output_size: u64,
}

/// Merge the configured inputs into a single output PDF.
///
/// Inputs are loaded in order and concatenated in that order. The output
/// path is checked against existing files before any input is loaded, so
/// a refused overwrite costs nothing.
pub async fn merge_pdfs(config: &MergeConfig) -> Result<MergeOutcome> {
    config.validate()?;

    let writer = PdfWriter::new();
    writer.guard_overwrite(std::slice::from_ref(&config.output), config.overwrite)?;

    let reader = PdfReader::with_password(config.password.clone());
    let documents = reader.load_all(&config.inputs).await?;

    let merged = merge_documents(&documents)?;
    let total_pages = merged.get_pages().len();

    let output_size = writer.save(&merged, &config.output).await?;

    Ok(MergeOutcome {
        files_merged: documents.len(),
        total_pages,
        output: config.output.clone(),
        output_size,
    })
}

/// Concatenate loaded documents into one, in input order.
pub fn merge_documents(documents: &[LoadedPdf]) -> Result<Document> {
    let (first, rest) = documents
        .split_first()
        .ok_or_else(|| SpliceError::invalid_config("no input files to merge"))?;

    // Cloning the first document keeps its Info dictionary and trailer
    // intact, which is where title and author metadata live.
    let mut merged = first.document.clone();

    if rest.is_empty() {
        return Ok(merged);
    }

    let mut max_id = merged.max_id;

    for loaded in rest {
        let mut doc = loaded.document.clone();

        // Renumber the incoming document to avoid object id collisions
        doc.renumber_objects_with(max_id + 1);
        max_id = doc.max_id;

        let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
        let page_count = page_ids.len();

        merged.objects.extend(doc.objects);

        append_pages_to_page_tree(&mut merged, page_ids, page_count)?;
    }

    merged.renumber_objects();

    Ok(merged)
}

/// Append page references to the base document's root Pages dictionary.
fn append_pages_to_page_tree(
    merged: &mut Document,
    page_ids: Vec<ObjectId>,
    page_count: usize,
) -> Result<()> {
    let pages_id = merged
        .catalog_mut()
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(Object::as_reference)
        .map_err(|err| SpliceError::malformed_page_tree(format!("missing Pages entry: {err}")))?;

    let pages_dict = merged
        .get_object_mut(pages_id)
        .and_then(Object::as_dict_mut)
        .map_err(|err| {
            SpliceError::malformed_page_tree(format!("Pages object is not a dictionary: {err}"))
        })?;

    let kids_array = pages_dict
        .get_mut(b"Kids")
        .and_then(Object::as_array_mut)
        .map_err(|err| SpliceError::malformed_page_tree(format!("missing Kids array: {err}")))?;

    for id in page_ids {
        kids_array.push(Object::Reference(id));
    }

    let current_count = pages_dict
        .get(b"Count")
        .and_then(Object::as_i64)
        .map_err(|err| SpliceError::malformed_page_tree(format!("missing Count entry: {err}")))?;
    pages_dict.set("Count", Object::Integer(current_count + page_count as i64));

    Ok(())
}
