//! Output filename resolution for split segments.
//!
//! A name pattern is a template with `{base}`, `{start}`, `{end}`, and
//! `{page}` placeholders, resolved once per segment. Without an explicit
//! pattern, segments are named `{base}_p7.pdf` (single page) or
//! `{base}_p1-3.pdf` (multi-page range).

use crate::error::{Result, SpliceError};
use crate::range::PageRange;

/// Resolve the output filename for one split segment.
///
/// `base` is the input filename's stem (no directory, no extension).
/// `{page}` is a single-page convenience: it substitutes `start` when the
/// range covers exactly one page, and is rejected otherwise so a pattern
/// like `{base}_page{page}.pdf` can never silently mangle a multi-page
/// segment's name.
///
/// Placeholders the resolver doesn't know pass through literally.
///
/// # Examples
///
/// ```
/// use pdfsplice::naming::resolve_segment_name;
/// use pdfsplice::range::PageRange;
///
/// let range = PageRange { start: 1, end: 3 };
/// assert_eq!(
///     resolve_segment_name(None, "report", &range).unwrap(),
///     "report_p1-3.pdf"
/// );
/// ```
pub fn resolve_segment_name(
    pattern: Option<&str>,
    base: &str,
    range: &PageRange,
) -> Result<String> {
    let Some(pattern) = pattern else {
        return Ok(if range.is_single() {
            format!("{base}_p{}.pdf", range.start)
        } else {
            format!("{base}_p{}-{}.pdf", range.start, range.end)
        });
    };

    if pattern.contains("{page}") && !range.is_single() {
        return Err(SpliceError::invalid_config(format!(
            "name pattern uses {{page}} but range {}-{} spans multiple pages \
             (use {{start}}/{{end}} instead)",
            range.start, range.end
        )));
    }

    let mut name = pattern
        .replace("{base}", base)
        .replace("{start}", &range.start.to_string())
        .replace("{end}", &range.end.to_string());
    if range.is_single() {
        name = name.replace("{page}", &range.start.to_string());
    }
    Ok(name)
}
