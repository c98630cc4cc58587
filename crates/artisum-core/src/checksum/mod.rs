//! Checksum algorithms and single-pass multi-algorithm calculation.
//!
//! The registry maps canonical names (`SHA-512`, `SHA-256`, `SHA-1`, `MD5`)
//! to factories. A calculation reads its input exactly once and feeds every
//! window to all requested algorithms, so unbuffered or single-use sources
//! are safe to pass in.

mod algorithm;
mod error;
mod map;
mod selector;

pub use algorithm::{
    builtin_factories, ChecksumAlgorithm, ChecksumAlgorithmFactory, DigestFactory, MD5, SHA_1,
    SHA_256, SHA_512,
};
pub use error::{ChecksumError, Result};
pub use map::ChecksumMap;
pub use selector::{ChecksumAlgorithmFactorySelector, DEFAULT_BUFFER_SIZE};
