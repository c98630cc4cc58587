//! SHA-1 embedded in a Nexus 2 style `ETag`, e.g. `"{SHA1{<hex>}}"`.

use super::{hex_digest, ChecksumExtractor, TransportRequest, TransportResponse};
use crate::checksum::{ChecksumMap, SHA_1};

pub const HEADER_ETAG: &str = "ETag";

const MARKER: &str = "SHA1{";

#[derive(Debug, Clone, Copy, Default)]
pub struct Nexus2ChecksumExtractor;

impl ChecksumExtractor for Nexus2ChecksumExtractor {
    fn name(&self) -> &'static str {
        "nexus2"
    }

    fn prepare_request(&self, _request: &mut TransportRequest) {}

    fn extract_checksums(&self, response: &TransportResponse) -> Option<ChecksumMap> {
        let etag = response.first_header(HEADER_ETAG)?;
        let start = etag.find(MARKER)? + MARKER.len();
        let len = etag[start..].find('}')?;
        let hex = hex_digest(&etag[start..start + len], 40)?;
        Some(ChecksumMap::single(SHA_1, hex))
    }
}
