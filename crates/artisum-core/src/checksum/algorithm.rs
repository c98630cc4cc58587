//! Digest accumulators and the factories that mint them.

use digest::Digest;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use std::marker::PhantomData;
use std::sync::Arc;

pub const SHA_512: &str = "SHA-512";
pub const SHA_256: &str = "SHA-256";
pub const SHA_1: &str = "SHA-1";
pub const MD5: &str = "MD5";

/// A single-pass checksum computation over one logical input.
///
/// `checksum` consumes the accumulator, so it can never be fed again once read.
pub trait ChecksumAlgorithm: Send {
    /// Feed the next window of input bytes.
    fn update(&mut self, data: &[u8]);

    /// Finish the computation and return the digest as lowercase hex.
    fn checksum(self: Box<Self>) -> String;
}

/// Named provider of fresh [`ChecksumAlgorithm`] instances. Stateless and reusable.
pub trait ChecksumAlgorithmFactory: Send + Sync {
    /// Canonical algorithm name, e.g. `"SHA-1"`.
    fn name(&self) -> &str;

    /// A new accumulator bound to exactly one calculation.
    fn algorithm(&self) -> Box<dyn ChecksumAlgorithm>;
}

struct DigestAlgorithm<D> {
    hasher: D,
}

impl<D: Digest + Send> ChecksumAlgorithm for DigestAlgorithm<D> {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.hasher, data);
    }

    fn checksum(self: Box<Self>) -> String {
        hex::encode(self.hasher.finalize())
    }
}

/// Factory for any RustCrypto [`Digest`] under a canonical name.
pub struct DigestFactory<D> {
    name: &'static str,
    _digest: PhantomData<fn() -> D>,
}

impl<D> DigestFactory<D> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _digest: PhantomData,
        }
    }
}

impl<D: Digest + Send + 'static> ChecksumAlgorithmFactory for DigestFactory<D> {
    fn name(&self) -> &str {
        self.name
    }

    fn algorithm(&self) -> Box<dyn ChecksumAlgorithm> {
        Box::new(DigestAlgorithm { hasher: D::new() })
    }
}

/// The built-in factories: SHA-512, SHA-256, SHA-1 and MD5.
pub fn builtin_factories() -> Vec<Arc<dyn ChecksumAlgorithmFactory>> {
    vec![
        Arc::new(DigestFactory::<Sha512>::new(SHA_512)),
        Arc::new(DigestFactory::<Sha256>::new(SHA_256)),
        Arc::new(DigestFactory::<Sha1>::new(SHA_1)),
        Arc::new(DigestFactory::<Md5>::new(MD5)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest_of(factory: &dyn ChecksumAlgorithmFactory, parts: &[&[u8]]) -> String {
        let mut algorithm = factory.algorithm();
        for part in parts {
            algorithm.update(part);
        }
        algorithm.checksum()
    }

    #[test]
    fn builtin_names_in_registration_order() {
        let names: Vec<String> = builtin_factories()
            .iter()
            .map(|f| f.name().to_string())
            .collect();
        assert_eq!(names, ["SHA-512", "SHA-256", "SHA-1", "MD5"]);
    }

    #[test]
    fn sha1_split_updates_match_single_update() {
        let factory = DigestFactory::<Sha1>::new(SHA_1);
        assert_eq!(
            digest_of(&factory, &[b"a", b"b", b"c"]),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            digest_of(&factory, &[b"abc"]),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn each_algorithm_call_starts_fresh() {
        let factory = DigestFactory::<Md5>::new(MD5);
        let first = digest_of(&factory, &[b"abc"]);
        let second = digest_of(&factory, &[]);
        assert_eq!(first, "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(second, "d41d8cd98f00b204e9800998ecf8427e");
    }
}
