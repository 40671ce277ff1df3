// crates/truncate_at_marker/src/lib.rs

//! Cuts a text file at the first line containing a marker and appends
//! closing lines to what is kept.
//!
//! The scan lives in [`scan`] and never touches the filesystem; the
//! [`Truncator`] wraps it with the read and the write.

pub mod error;
pub mod scan;
pub mod truncator;

pub use error::TruncateError;
pub use scan::{find_boundary, split_lines, truncate_content, truncate_lines, Truncation, TruncationReport};
pub use truncator::{truncate_file, Outcome, Truncator};
