//! `Want-Digest` / `Digest` header convention (RFC 3230 style instance digests).

use super::{ChecksumExtractor, TransportRequest, TransportResponse};
use crate::checksum::{ChecksumMap, MD5, SHA_1};
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{alphabet, Engine};

pub const HEADER_WANT_DIGEST: &str = "Want-Digest";
pub const HEADER_DIGEST: &str = "Digest";

/// Preference sent on retrieval requests.
pub const WANT_DIGEST_VALUE: &str = "sha;q=0.5, md5;q=0.1";

const SHA1_LEN: usize = 20;
const MD5_LEN: usize = 16;

/// Standard alphabet; trailing `=` padding optional.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Extracts a SHA-1 or MD5 digest from the `Digest` response header.
///
/// Entries are scanned left to right and the first usable one wins. A `sha*`
/// entry is usable only if it decodes to exactly 20 bytes, an `md5*` entry
/// only if it decodes to exactly 16. The `q=` weights sent in `Want-Digest`
/// do not influence the scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigestChecksumExtractor;

impl ChecksumExtractor for DigestChecksumExtractor {
    fn name(&self) -> &'static str {
        "digest"
    }

    fn prepare_request(&self, request: &mut TransportRequest) {
        if request.method().is_retrieval() {
            request.add_header(HEADER_WANT_DIGEST, WANT_DIGEST_VALUE);
        }
    }

    fn extract_checksums(&self, response: &TransportResponse) -> Option<ChecksumMap> {
        let digest = response.first_header(HEADER_DIGEST)?;
        for element in digest.split(',').map(str::trim) {
            let Some((token, value)) = element.split_once('=') else {
                continue;
            };
            if token.is_empty() {
                continue;
            }
            if token.starts_with("sha") {
                if let Some(hex) = reencode(value, SHA1_LEN) {
                    return Some(ChecksumMap::single(SHA_1, hex));
                }
                tracing::debug!("ignoring unusable {} entry in Digest header", token);
            }
            if token.starts_with("md5") {
                if let Some(hex) = reencode(value, MD5_LEN) {
                    return Some(ChecksumMap::single(MD5, hex));
                }
                tracing::debug!("ignoring unusable {} entry in Digest header", token);
            }
        }
        None
    }
}

/// Base64 → lowercase hex, if the value decodes to exactly `expected_len` bytes.
fn reencode(value: &str, expected_len: usize) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    let data = BASE64.decode(value).ok()?;
    (data.len() == expected_len).then(|| hex::encode(data))
}
