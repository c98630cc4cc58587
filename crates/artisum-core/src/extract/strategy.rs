//! Configuration-selected extraction strategies and ordered chains of them.

use super::digest::DigestChecksumExtractor;
use super::nexus2::Nexus2ChecksumExtractor;
use super::x_checksum::XChecksumExtractor;
use super::{ChecksumExtractor, TransportRequest, TransportResponse};
use crate::checksum::ChecksumMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("unknown checksum extractor {0}, known ones are [digest, x-checksum, nexus2]")]
pub struct UnknownExtractor(pub String);

/// The known header conventions, named as in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorKind {
    Digest,
    XChecksum,
    Nexus2,
}

impl ExtractorKind {
    pub const ALL: [ExtractorKind; 3] = [
        ExtractorKind::Digest,
        ExtractorKind::XChecksum,
        ExtractorKind::Nexus2,
    ];

    fn strategy(self) -> &'static dyn ChecksumExtractor {
        match self {
            ExtractorKind::Digest => &DigestChecksumExtractor,
            ExtractorKind::XChecksum => &XChecksumExtractor,
            ExtractorKind::Nexus2 => &Nexus2ChecksumExtractor,
        }
    }
}

impl FromStr for ExtractorKind {
    type Err = UnknownExtractor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownExtractor(s.to_string()))
    }
}

impl fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ChecksumExtractor for ExtractorKind {
    fn name(&self) -> &'static str {
        self.strategy().name()
    }

    fn prepare_request(&self, request: &mut TransportRequest) {
        self.strategy().prepare_request(request)
    }

    fn extract_checksums(&self, response: &TransportResponse) -> Option<ChecksumMap> {
        self.strategy().extract_checksums(response)
    }
}

/// Strategies tried in order: all of them prepare the request, the first
/// one to extract something wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorChain {
    kinds: Vec<ExtractorKind>,
}

impl ExtractorChain {
    pub fn new(kinds: Vec<ExtractorKind>) -> Self {
        Self { kinds }
    }

    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, UnknownExtractor> {
        let kinds = names
            .iter()
            .map(|n| n.as_ref().parse())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(kinds))
    }

    pub fn kinds(&self) -> &[ExtractorKind] {
        &self.kinds
    }
}

impl Default for ExtractorChain {
    fn default() -> Self {
        Self::new(vec![ExtractorKind::Digest])
    }
}

impl ChecksumExtractor for ExtractorChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn prepare_request(&self, request: &mut TransportRequest) {
        for kind in &self.kinds {
            kind.prepare_request(request);
        }
    }

    fn extract_checksums(&self, response: &TransportResponse) -> Option<ChecksumMap> {
        self.kinds.iter().find_map(|kind| {
            let found = kind.extract_checksums(response);
            if let Some(checksums) = &found {
                tracing::debug!("{} extractor found {:?}", kind, checksums);
            }
            found
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SHA1: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";
    const EMPTY_MD5: &str = "d41d8cd98f00b204e9800998ecf8427e";

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in ExtractorKind::ALL {
            assert_eq!(kind.name().parse::<ExtractorKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_name_rejected() {
        let err = ExtractorChain::from_names(&["digest", "etag-magic"]).unwrap_err();
        assert_eq!(err.0, "etag-magic");
        assert!(err.to_string().contains("x-checksum"));
    }

    #[test]
    fn chain_prepares_with_every_strategy() {
        let chain = ExtractorChain::from_names(&["x-checksum", "digest"]).unwrap();
        let mut request = TransportRequest::get("http://repo.example/a.jar");
        chain.prepare_request(&mut request);
        assert_eq!(request.header("Want-Digest"), Some("sha;q=0.5, md5;q=0.1"));
    }

    #[test]
    fn chain_order_decides_winner() {
        let response = TransportResponse::new(200)
            .with_header("Digest", "md5=1B2M2Y8AsgTpgAmY7PhCfg==")
            .with_header("X-Checksum-Sha1", EMPTY_SHA1);

        let digest_first = ExtractorChain::from_names(&["digest", "x-checksum"]).unwrap();
        assert_eq!(
            digest_first.extract_checksums(&response),
            Some(ChecksumMap::single("MD5", EMPTY_MD5))
        );

        let x_first = ExtractorChain::from_names(&["x-checksum", "digest"]).unwrap();
        assert_eq!(
            x_first.extract_checksums(&response),
            Some(ChecksumMap::single("SHA-1", EMPTY_SHA1))
        );
    }

    #[test]
    fn chain_falls_through_to_later_strategy() {
        let response = TransportResponse::new(200)
            .with_header("ETag", "\"{SHA1{da39a3ee5e6b4b0d3255bfef95601890afd80709}}\"");
        let chain = ExtractorChain::from_names(&["digest", "nexus2"]).unwrap();
        assert_eq!(
            chain.extract_checksums(&response).unwrap().get("SHA-1"),
            Some(EMPTY_SHA1)
        );
    }

    #[test]
    fn empty_chain_extracts_nothing() {
        let chain = ExtractorChain::new(Vec::new());
        let response = TransportResponse::new(200).with_header("X-Checksum-Md5", EMPTY_MD5);
        assert!(chain.extract_checksums(&response).is_none());
    }
}
