//! Checksums carried in transport metadata.
//!
//! Some repositories advertise the digest of the body in response headers.
//! An extractor can ask for that on the way out (`prepare_request`) and pick
//! it up on the way back (`extract_checksums`), saving a second round trip
//! for a `.sha1`/`.md5` file. Absent or malformed metadata yields `None`;
//! falling back to a checksum file is the caller's business.

pub mod digest;
pub mod nexus2;
mod strategy;
mod transport;
pub mod x_checksum;

pub use digest::DigestChecksumExtractor;
pub use nexus2::Nexus2ChecksumExtractor;
pub use strategy::{ExtractorChain, ExtractorKind, UnknownExtractor};
pub use transport::{RequestMethod, TransportRequest, TransportResponse};
pub use x_checksum::XChecksumExtractor;

use crate::checksum::ChecksumMap;

pub trait ChecksumExtractor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Advisory: may add negotiation headers to retrieval requests only.
    fn prepare_request(&self, request: &mut TransportRequest);

    /// At most one checksum recovered from `response`, or `None`.
    fn extract_checksums(&self, response: &TransportResponse) -> Option<ChecksumMap>;
}

/// Lowercased `value` if it is exactly `len` hex digits.
fn hex_digest(value: &str, len: usize) -> Option<String> {
    let value = value.trim();
    (value.len() == len && value.bytes().all(|b| b.is_ascii_hexdigit()))
        .then(|| value.to_ascii_lowercase())
}
