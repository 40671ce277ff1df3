// crates/truncate_at_marker/src/error.rs

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TruncateError {
    #[error("Error reading file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Boundary marker must not be empty")]
    EmptyMarker,

    #[error("Refusing to overwrite the input file {} in place", .0.display())]
    SamePath(PathBuf),
}
