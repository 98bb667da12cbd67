//! Lyric pagination.
//!
//! Lyrics are split on `'\n'` into verse lines and served one page at a
//! time. Out-of-range windows produce an empty page rather than an error.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Page used when the caller does not supply one.
pub const DEFAULT_PAGE: i64 = 1;

/// Lines per page used when the caller does not supply a limit.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

/// A page of lines expressed as `[start, end)` offsets into the line list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseWindow {
    pub start: usize,
    pub end: usize,
}

impl VerseWindow {
    /// Compute the window for `page` (1-based) of `page_size` lines over
    /// `total` lines.
    ///
    /// Returns `None` when the page is empty: non-positive `page` or
    /// `page_size`, or a start offset at or past the last line.
    pub fn compute(page: i64, page_size: i64, total: usize) -> Option<Self> {
        if page < 1 || page_size < 1 {
            return None;
        }
        let start = usize::try_from((page - 1).saturating_mul(page_size)).ok()?;
        if start >= total {
            return None;
        }
        let size = usize::try_from(page_size).ok()?;
        let end = start.saturating_add(size).min(total);
        Some(Self { start, end })
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Split `text` into lines and return page `page` of `page_size` lines.
///
/// Empty lines are kept, so `""` is a single empty line.
pub fn paginate(text: &str, page: i64, page_size: i64) -> Vec<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    match VerseWindow::compute(page, page_size, lines.len()) {
        Some(window) => lines[window.start..window.end]
            .iter()
            .map(|line| (*line).to_string())
            .collect(),
        None => Vec::new(),
    }
}
