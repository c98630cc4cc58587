//! Compare expected checksums (e.g. extracted from headers) against local content.
//!
//! This only reports; whether a mismatch fails a build is up to the caller.

use crate::checksum::{ChecksumAlgorithmFactorySelector, ChecksumMap, Result};
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Match,
    Mismatch { expected: String, actual: String },
}

/// Per-algorithm outcomes, in the order of the expected mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    outcomes: Vec<(String, Outcome)>,
}

impl Verification {
    pub fn is_ok(&self) -> bool {
        self.outcomes.iter().all(|(_, o)| *o == Outcome::Match)
    }

    pub fn outcomes(&self) -> &[(String, Outcome)] {
        &self.outcomes
    }

    pub fn mismatches(&self) -> impl Iterator<Item = (&str, &Outcome)> {
        self.outcomes
            .iter()
            .filter(|(_, o)| *o != Outcome::Match)
            .map(|(name, o)| (name.as_str(), o))
    }
}

pub fn verify_file(
    selector: &ChecksumAlgorithmFactorySelector,
    path: &Path,
    expected: &ChecksumMap,
) -> Result<Verification> {
    let factories = selector.select_all(&expected.names().collect::<Vec<_>>())?;
    let actual = selector.calculate_file(path, &factories)?;
    Ok(compare(expected, &actual))
}

pub fn verify_reader<R: Read>(
    selector: &ChecksumAlgorithmFactorySelector,
    reader: R,
    expected: &ChecksumMap,
) -> Result<Verification> {
    let factories = selector.select_all(&expected.names().collect::<Vec<_>>())?;
    let actual = selector.calculate_reader(reader, &factories)?;
    Ok(compare(expected, &actual))
}

fn compare(expected: &ChecksumMap, actual: &ChecksumMap) -> Verification {
    let outcomes = expected
        .iter()
        .map(|(name, want)| {
            let got = actual.get(name).unwrap_or_default();
            let outcome = if got.eq_ignore_ascii_case(want) {
                Outcome::Match
            } else {
                tracing::warn!("{} mismatch: expected {}, got {}", name, want, got);
                Outcome::Mismatch {
                    expected: want.to_string(),
                    actual: got.to_string(),
                }
            };
            (name.to_string(), outcome)
        })
        .collect();
    Verification { outcomes }
}
