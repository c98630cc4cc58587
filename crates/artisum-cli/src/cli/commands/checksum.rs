//! Checksum command: compute several checksums of a file in one pass.

use anyhow::Result;
use artisum_core::checksum::ChecksumMap;
use artisum_core::config::ArtisumConfig;
use std::path::Path;

/// Print `<NAME>  <hex>  <path>` per requested algorithm, or a JSON object.
pub fn run_checksum(
    cfg: &ArtisumConfig,
    path: &Path,
    algorithms: &[String],
    json: bool,
) -> Result<()> {
    let names = if algorithms.is_empty() {
        &cfg.algorithms[..]
    } else {
        algorithms
    };
    let selector = cfg.selector();
    let factories = selector.select_all(names)?;
    let checksums = selector.calculate_file(path, &factories)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&checksums)?);
    } else {
        for line in format_lines(&checksums, path) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn format_lines(checksums: &ChecksumMap, path: &Path) -> Vec<String> {
    checksums
        .iter()
        .map(|(name, hex)| format!("{}  {}  {}", name, hex, path.display()))
        .collect()
}
