// crates/clean_dashboard/src/report.rs

use truncate_at_marker::Outcome;

pub const NOT_FOUND_MESSAGE: &str = "Could not find the boundary between new and old systems";

/// Lines printed to stdout for a finished run.
pub fn render(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Truncated(report) => vec![
            format!(
                "Cleaned dashboard: removed {} lines of conflicting code",
                report.lines_removed
            ),
            format!("Old system started at line {}", report.boundary_line),
        ],
        Outcome::BoundaryNotFound => vec![NOT_FOUND_MESSAGE.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use truncate_at_marker::TruncationReport;

    #[test]
    fn test_render_success() {
        let outcome = Outcome::Truncated(TruncationReport { lines_removed: 2, boundary_line: 3 });
        assert_eq!(
            render(&outcome),
            vec![
                "Cleaned dashboard: removed 2 lines of conflicting code",
                "Old system started at line 3",
            ]
        );
    }

    #[test]
    fn test_render_not_found() {
        assert_eq!(render(&Outcome::BoundaryNotFound), vec![NOT_FOUND_MESSAGE]);
    }
}
