//! Splitting a PDF into one output per page range.
//!
//! Each requested range becomes its own output document built from a
//! clone of the input: the root page tree's Kids array is rewritten to
//! hold only the selected pages, then unreferenced objects are pruned.
//! Output names are resolved for every range up front so overwrite
//! clashes are reported before anything is written.

use lopdf::{Document, Object, ObjectId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::SplitConfig;
use crate::error::{Result, SpliceError};
use crate::io::{PdfReader, PdfWriter};
use crate::naming::resolve_segment_name;
use crate::range::{PageRange, parse_range_spec};

/// One output file produced by a split.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitSegment {
    /// Path of the written segment file.
    pub path: PathBuf,

    /// The page range this segment covers.
    pub range: PageRange,

    /// Number of pages in the segment.
    pub page_count: u32,

    /// Size of the segment file in bytes.
    pub file_size: u64,
}

/// Summary of a completed split.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitOutcome {
    /// Path of the input file that was split.
    pub input: PathBuf,

    /// Total pages in the input document.
    pub total_pages: u32,

    /// The segments written, in range order.
    pub segments: Vec<SplitSegment>,
}

/// Split the configured input into one output file per range.
///
/// Ranges are extracted in the order given, duplicates and overlaps
/// included. All segment names are resolved before the first write, and
/// the whole plan is checked against existing files in one pass.
pub async fn split_pdf(config: &SplitConfig) -> Result<SplitOutcome> {
    config.validate()?;

    let reader = PdfReader::with_password(config.password.clone());
    let loaded = reader.load(&config.input).await?;

    let ranges = parse_range_spec(&config.ranges, loaded.page_count)?;

    let base = config.base_stem();
    let mut planned: Vec<PathBuf> = Vec::with_capacity(ranges.len());
    for range in &ranges {
        let name = resolve_segment_name(config.name_pattern.as_deref(), base, range)?;
        planned.push(config.outdir.join(name));
    }

    let writer = PdfWriter::new();
    writer.guard_overwrite(&planned, config.overwrite)?;

    let mut segments = Vec::with_capacity(ranges.len());
    for (range, path) in ranges.iter().zip(planned) {
        let segment = extract_segment(&loaded.document, range)?;
        let file_size = writer.save(&segment, &path).await?;

        segments.push(SplitSegment {
            path,
            range: *range,
            page_count: range.page_count(),
            file_size,
        });
    }

    Ok(SplitOutcome {
        input: config.input.clone(),
        total_pages: loaded.page_count,
        segments,
    })
}

/// Build a new document containing only the pages in `range`.
pub fn extract_segment(document: &Document, range: &PageRange) -> Result<Document> {
    let pages = document.get_pages();

    let kept: Vec<ObjectId> = range
        .pages()
        .map(|number| {
            pages.get(&number).copied().ok_or_else(|| {
                SpliceError::malformed_page_tree(format!("page {number} not found in document"))
            })
        })
        .collect::<Result<_>>()?;

    let mut segment = document.clone();
    rewrite_page_tree(&mut segment, &kept)?;

    // Drop everything no longer reachable from the trimmed page tree
    segment.prune_objects();
    segment.renumber_objects();

    Ok(segment)
}

/// Replace the root Pages dictionary's Kids with the kept page ids.
fn rewrite_page_tree(segment: &mut Document, kept: &[ObjectId]) -> Result<()> {
    let pages_id = segment
        .catalog_mut()
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(Object::as_reference)
        .map_err(|err| SpliceError::malformed_page_tree(format!("missing Pages entry: {err}")))?;

    let pages_dict = segment
        .get_object_mut(pages_id)
        .and_then(Object::as_dict_mut)
        .map_err(|err| {
            SpliceError::malformed_page_tree(format!("Pages object is not a dictionary: {err}"))
        })?;

    let kids: Vec<Object> = kept.iter().map(|id| Object::Reference(*id)).collect();
    pages_dict.set("Kids", Object::Array(kids));
    pages_dict.set("Count", Object::Integer(kept.len() as i64));

    // Reparent the kept pages onto the root Pages node. Pages pulled out
    // of a nested tree would otherwise point at a pruned intermediate.
    for id in kept {
        let page_dict = segment
            .get_object_mut(*id)
            .and_then(Object::as_dict_mut)
            .map_err(|err| {
                SpliceError::malformed_page_tree(format!("page object is not a dictionary: {err}"))
            })?;
        page_dict.set("Parent", Object::Reference(pages_id));
    }

    Ok(())
}
