//! Verify command: compare a file against one expected checksum.

use anyhow::Result;
use artisum_core::checksum::ChecksumMap;
use artisum_core::config::ArtisumConfig;
use artisum_core::verify::{verify_file, Outcome, Verification};
use std::path::Path;

pub fn run_verify(cfg: &ArtisumConfig, path: &Path, algorithm: &str, expected: &str) -> Result<()> {
    let expected = ChecksumMap::single(algorithm, expected.trim());
    let verification = verify_file(&cfg.selector(), path, &expected)?;
    report(&verification, path)
}

/// Print one line per algorithm; Err if anything mismatched.
pub(super) fn report(verification: &Verification, path: &Path) -> Result<()> {
    for (name, outcome) in verification.outcomes() {
        match outcome {
            Outcome::Match => println!("{}  OK  {}", name, path.display()),
            Outcome::Mismatch { expected, actual } => println!(
                "{}  MISMATCH  {} (expected {}, got {})",
                name,
                path.display(),
                expected,
                actual
            ),
        }
    }
    if !verification.is_ok() {
        anyhow::bail!("checksum mismatch for {}", path.display());
    }
    Ok(())
}
