//! `X-Checksum-*` headers carrying hex digests (Artifactory and similar).

use super::{hex_digest, ChecksumExtractor, TransportRequest, TransportResponse};
use crate::checksum::{ChecksumMap, MD5, SHA_1};

pub const HEADER_X_CHECKSUM_SHA1: &str = "X-Checksum-Sha1";
pub const HEADER_X_CHECKSUM_MD5: &str = "X-Checksum-Md5";

/// Reads `X-Checksum-Sha1`, then `X-Checksum-Md5`. Servers send these
/// unprompted, so requests are left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct XChecksumExtractor;

impl ChecksumExtractor for XChecksumExtractor {
    fn name(&self) -> &'static str {
        "x-checksum"
    }

    fn prepare_request(&self, _request: &mut TransportRequest) {}

    fn extract_checksums(&self, response: &TransportResponse) -> Option<ChecksumMap> {
        let candidates = [
            (HEADER_X_CHECKSUM_SHA1, SHA_1, 40),
            (HEADER_X_CHECKSUM_MD5, MD5, 32),
        ];
        for (header, algorithm, len) in candidates {
            if let Some(value) = response.first_header(header) {
                match hex_digest(value, len) {
                    Some(hex) => return Some(ChecksumMap::single(algorithm, hex)),
                    None => tracing::debug!("ignoring malformed {} header", header),
                }
            }
        }
        None
    }
}
