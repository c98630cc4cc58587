//! Fetch command: download an artifact and check it against embedded checksums.

use super::extractor_chain;
use super::verify::report;
use anyhow::{Context, Result};
use artisum_core::config::ArtisumConfig;
use artisum_core::fetch::{fetch_to_file, local_file_name, FetchOptions};
use artisum_core::verify::verify_file;
use std::path::PathBuf;

pub fn run_fetch(
    cfg: &ArtisumConfig,
    url: &str,
    output: Option<PathBuf>,
    extractors: &[String],
) -> Result<()> {
    let chain = extractor_chain(cfg, extractors)?;
    let dest = match output {
        Some(p) => p,
        None => std::env::current_dir()
            .context("current dir")?
            .join(local_file_name(url)),
    };
    let opts = FetchOptions::from(cfg.http.clone());

    let outcome = fetch_to_file(url, &chain, &dest, &opts)?;
    println!("{}  {} bytes", dest.display(), outcome.bytes_written);

    match outcome.checksums {
        Some(expected) => {
            let verification = verify_file(&cfg.selector(), &dest, &expected)?;
            report(&verification, &dest)
        }
        None => {
            println!("no embedded checksum in response; verify against a checksum file");
            Ok(())
        }
    }
}
