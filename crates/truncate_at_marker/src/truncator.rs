// crates/truncate_at_marker/src/truncator.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::TruncateError;
use crate::scan::{truncate_content, TruncationReport};

/// Result of a run that did not fail on I/O.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The output file was written.
    Truncated(TruncationReport),
    /// No line contains the marker. Nothing was written.
    BoundaryNotFound,
}

/// Reads a file, cuts it at the first marker line and writes the kept
/// lines plus the closing lines to a separate file.
#[derive(Clone, Debug)]
pub struct Truncator {
    marker: String,
    closing_lines: Vec<String>,
}

impl Truncator {
    pub fn new(marker: impl Into<String>, closing_lines: Vec<String>) -> Result<Self, TruncateError> {
        let marker = marker.into();
        if marker.is_empty() {
            return Err(TruncateError::EmptyMarker);
        }
        Ok(Self { marker, closing_lines })
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn closing_lines(&self) -> &[String] {
        &self.closing_lines
    }

    /// Runs one truncation from `input` to `output`.
    ///
    /// The input is read fully before scanning. On a match, `output` is
    /// overwritten with a single write; otherwise it is left untouched.
    pub fn run(&self, input: &Path, output: &Path) -> Result<Outcome, TruncateError> {
        if same_file(input, output) {
            return Err(TruncateError::SamePath(input.to_path_buf()));
        }

        let content = fs::read_to_string(input).map_err(|source| TruncateError::Read {
            path: input.to_path_buf(),
            source,
        })?;
        debug!(path = %input.display(), bytes = content.len(), "read source document");

        let Some(truncation) = truncate_content(&content, &self.marker, self.closing_lines.as_slice()) else {
            debug!(marker = %self.marker, "marker not present in any line");
            return Ok(Outcome::BoundaryNotFound);
        };
        debug!(
            boundary_line = truncation.report.boundary_line,
            kept_lines = truncation.line_count,
            "found boundary"
        );

        fs::write(output, &truncation.content).map_err(|source| TruncateError::Write {
            path: output.to_path_buf(),
            source,
        })?;
        debug!(path = %output.display(), "wrote truncated document");

        Ok(Outcome::Truncated(truncation.report))
    }
}

/// Convenience wrapper building a [`Truncator`] for a single run.
pub fn truncate_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    marker: &str,
    output: Q,
    closing_lines: &[&str],
) -> Result<Outcome, TruncateError> {
    let closing_lines = closing_lines.iter().map(|line| line.to_string()).collect();
    Truncator::new(marker, closing_lines)?.run(input.as_ref(), output.as_ref())
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
