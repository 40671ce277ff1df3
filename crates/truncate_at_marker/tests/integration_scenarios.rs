// crates/truncate_at_marker/tests/integration_scenarios.rs

use std::fs;
use tempfile::tempdir;
use truncate_at_marker::{truncate_file, Outcome, TruncationReport, Truncator};

const CLOSING: [&str; 3] = ["</script>", "</body>", "</html>"];

fn output_lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .split('\n')
        .map(|line| line.to_string())
        .collect()
}

#[test]
fn test_marker_in_middle() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.php");
    let output = dir.path().join("out.php");
    fs::write(&input, "A\nB\nMARK:start\nC").unwrap();

    let outcome = truncate_file(&input, "MARK:start", &output, &CLOSING).unwrap();

    assert_eq!(
        outcome,
        Outcome::Truncated(TruncationReport { lines_removed: 2, boundary_line: 3 })
    );
    assert_eq!(output_lines(&output), vec!["A", "B", "</script>", "</body>", "</html>"]);
}

#[test]
fn test_marker_absent() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.php");
    let output = dir.path().join("out.php");
    fs::write(&input, "A\nB\nC").unwrap();

    let outcome = truncate_file(&input, "MARK:start", &output, &CLOSING).unwrap();

    assert_eq!(outcome, Outcome::BoundaryNotFound);
    assert!(!output.exists());
}

#[test]
fn test_marker_on_first_line() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.php");
    let output = dir.path().join("out.php");
    fs::write(&input, "// MARK:start here\nA\nB\nC\n").unwrap();

    let outcome = truncate_file(&input, "MARK:start", &output, &CLOSING).unwrap();

    // Five lines after the split, counting the empty one after the final newline.
    assert_eq!(
        outcome,
        Outcome::Truncated(TruncationReport { lines_removed: 5, boundary_line: 1 })
    );
    assert_eq!(output_lines(&output), CLOSING.to_vec());
}

#[test]
fn test_truncator_reused_across_files() {
    let dir = tempdir().unwrap();
    let truncator = Truncator::new(
        "<!-- legacy -->",
        CLOSING.iter().map(|line| line.to_string()).collect(),
    )
    .unwrap();
    assert_eq!(truncator.marker(), "<!-- legacy -->");
    assert_eq!(truncator.closing_lines().len(), 3);

    for (name, body, expected) in [
        ("a.php", "x\n<!-- legacy -->\ny", Some(2)),
        ("b.php", "x\ny", None),
    ] {
        let input = dir.path().join(name);
        let output = dir.path().join(format!("clean_{}", name));
        fs::write(&input, body).unwrap();

        match (truncator.run(&input, &output).unwrap(), expected) {
            (Outcome::Truncated(report), Some(line)) => assert_eq!(report.boundary_line, line),
            (Outcome::BoundaryNotFound, None) => assert!(!output.exists()),
            (outcome, _) => panic!("unexpected outcome {:?} for {}", outcome, name),
        }
    }
}
