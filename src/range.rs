//! Page-range parsing.
//!
//! A range spec is a comma-separated list of tokens, each describing one
//! 1-based inclusive interval of pages:
//!
//! - `"7"` - single page
//! - `"1-3"` - pages 1 through 3
//! - `"-3"` - pages 1 through 3 (open start)
//! - `"9-"` - page 9 through the last page (open end)
//!
//! Tokens are independent: order is preserved, and overlapping or repeated
//! tokens each produce their own interval. Every bound is validated against
//! the document's actual page count before anything is extracted.
//!
//! # Examples
//!
//! ```
//! use pdfsplice::range::{PageRange, parse_range_spec};
//!
//! let ranges = parse_range_spec("1-3,7,9-", 10).unwrap();
//! assert_eq!(
//!     ranges,
//!     vec![
//!         PageRange { start: 1, end: 3 },
//!         PageRange { start: 7, end: 7 },
//!         PageRange { start: 9, end: 10 },
//!     ]
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpliceError};

/// One contiguous interval of pages, 1-based and inclusive on both ends.
///
/// Invariant: `1 <= start <= end <= total_pages` of the document the range
/// was parsed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    /// First page of the interval.
    pub start: u32,
    /// Last page of the interval.
    pub end: u32,
}

impl PageRange {
    /// Whether this range covers exactly one page.
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Number of pages in the interval.
    pub fn page_count(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Iterate over the 1-based page numbers in the interval, in order.
    pub fn pages(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }
}

/// Parse a comma-separated range spec against a known page count.
///
/// Returns one [`PageRange`] per token, in spec order. Duplicate and
/// overlapping tokens are kept as-is; each one becomes an independent
/// output segment.
///
/// # Errors
///
/// Returns [`SpliceError::InvalidRange`] when a token is empty, a bare
/// `-`, non-numeric, reversed (`A > B`), or has a bound outside
/// `1..=total_pages`.
pub fn parse_range_spec(spec: &str, total_pages: u32) -> Result<Vec<PageRange>> {
    spec.split(',')
        .map(|token| parse_token(token.trim(), total_pages))
        .collect()
}

fn parse_token(token: &str, total_pages: u32) -> Result<PageRange> {
    if token.is_empty() {
        return Err(SpliceError::invalid_range(token, "empty token"));
    }
    if token == "-" {
        return Err(SpliceError::invalid_range(token, "missing both bounds"));
    }

    let (start, end) = if let Some(rest) = token.strip_prefix('-') {
        // -B  => 1..B
        (1, parse_bound(rest, token)?)
    } else if let Some(rest) = token.strip_suffix('-') {
        // A-  => A..end
        (parse_bound(rest, token)?, total_pages)
    } else if let Some((a, b)) = token.split_once('-') {
        (parse_bound(a, token)?, parse_bound(b, token)?)
    } else {
        let page = parse_bound(token, token)?;
        (page, page)
    };

    if start == 0 || end == 0 {
        return Err(SpliceError::invalid_range(
            token,
            "page numbers are 1-based",
        ));
    }
    if start > end {
        return Err(SpliceError::invalid_range(
            token,
            "start is greater than end",
        ));
    }
    if start > total_pages || end > total_pages {
        return Err(SpliceError::invalid_range(
            token,
            format!("out of bounds for a document with {total_pages} page(s)"),
        ));
    }

    Ok(PageRange { start, end })
}

fn parse_bound(bound: &str, token: &str) -> Result<u32> {
    bound
        .trim()
        .parse()
        .map_err(|_| SpliceError::invalid_range(token, format!("'{}' is not a page number", bound.trim())))
}
