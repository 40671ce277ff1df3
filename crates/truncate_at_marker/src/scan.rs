// crates/truncate_at_marker/src/scan.rs

/// Splits `content` on `\n`, dropping the delimiter.
///
/// Unlike [`str::lines`], a trailing newline yields a final empty line and
/// `\r` is kept, so `"a\nb\n"` becomes `["a", "b", ""]` and an empty string
/// becomes `[""]`.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

/// Returns the index (zero-based) of the first line that contains `marker`.
/// Matching is a case-sensitive literal substring test.
pub fn find_boundary<S: AsRef<str>>(lines: &[S], marker: &str) -> Option<usize> {
    lines.iter().position(|line| line.as_ref().contains(marker))
}

/// Keeps lines `[0, boundary)` and appends `closing_lines`.
///
/// A `boundary` past the end keeps every line.
pub fn truncate_lines<'a, C: AsRef<str>>(
    lines: &[&'a str],
    boundary: usize,
    closing_lines: &'a [C],
) -> Vec<&'a str> {
    let boundary = boundary.min(lines.len());
    let mut kept = Vec::with_capacity(boundary + closing_lines.len());
    kept.extend_from_slice(&lines[..boundary]);
    kept.extend(closing_lines.iter().map(|line| line.as_ref()));
    kept
}

/// Counts reported for a successful truncation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TruncationReport {
    /// Source line count minus the boundary index. The appended closing
    /// lines are not subtracted.
    pub lines_removed: usize,
    /// 1-based line number of the marker line.
    pub boundary_line: usize,
}

/// A truncated document, ready to be written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Truncation {
    pub content: String,
    pub line_count: usize,
    pub report: TruncationReport,
}

/// Runs the whole scan over in-memory text. Returns `None` when no line
/// contains the marker.
pub fn truncate_content<C: AsRef<str>>(
    content: &str,
    marker: &str,
    closing_lines: &[C],
) -> Option<Truncation> {
    let lines = split_lines(content);
    let boundary = find_boundary(&lines, marker)?;
    let kept = truncate_lines(&lines, boundary, closing_lines);

    Some(Truncation {
        content: kept.join("\n"),
        line_count: kept.len(),
        report: TruncationReport {
            lines_removed: lines.len() - boundary,
            boundary_line: boundary + 1,
        },
    })
}
