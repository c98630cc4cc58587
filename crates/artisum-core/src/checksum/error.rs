//! Errors raised while selecting algorithms or calculating checksums.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChecksumError>;

#[derive(Debug, Error)]
pub enum ChecksumError {
    /// The requested name is not registered. `supported` is sorted.
    #[error("unsupported checksum algorithm {name}, supported ones are [{}]", .supported.join(", "))]
    UnsupportedAlgorithm { name: String, supported: Vec<String> },

    #[error("no checksum algorithms requested")]
    NoAlgorithms,

    #[error("open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the input failed; any partial digests were discarded.
    #[error("read failed after {consumed} bytes")]
    Read {
        consumed: u64,
        #[source]
        source: io::Error,
    },
}
