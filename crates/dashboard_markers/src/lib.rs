// crates/dashboard_markers/src/lib.rs

//! Fixed values for trimming the legacy photo-management code out of
//! `dashboard.php`.

/// Comment that opens the legacy block. Everything from the first line
/// containing it onward is dropped.
pub const LEGACY_BOUNDARY_MARKER: &str = "// Keep existing loadPhotos function for compatibility";

/// Lines appended after truncation so the page's `<script>`, `<body>` and
/// `<html>` elements are closed again.
pub const CLOSING_LINES: [&str; 3] = ["    </script>", "</body>", "</html>"];

pub const DEFAULT_INPUT: &str = "dashboard.php";

pub const DEFAULT_OUTPUT: &str = "dashboard_clean.php";

/// Owned copy of [`CLOSING_LINES`], handy as a clap default.
pub fn default_closing_lines() -> Vec<String> {
    CLOSING_LINES.iter().map(|line| line.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closing_lines_close_script_body_html_in_order() {
        let trimmed: Vec<&str> = CLOSING_LINES.iter().map(|l| l.trim()).collect();
        assert_eq!(trimmed, vec!["</script>", "</body>", "</html>"]);
        assert_eq!(default_closing_lines().len(), CLOSING_LINES.len());
    }
}
