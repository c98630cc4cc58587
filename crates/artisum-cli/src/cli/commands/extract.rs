//! Extract command: run the extractor chain over header lines read from stdin.

use super::extractor_chain;
use anyhow::{Context, Result};
use artisum_core::checksum::ChecksumMap;
use artisum_core::config::ArtisumConfig;
use artisum_core::extract::{ChecksumExtractor, ExtractorChain, TransportResponse};
use std::io::{self, BufRead};

pub fn run_extract(cfg: &ArtisumConfig, extractors: &[String]) -> Result<()> {
    let chain = extractor_chain(cfg, extractors)?;
    match extract_from(&chain, io::stdin().lock())? {
        Some(checksums) => {
            for (name, hex) in checksums.iter() {
                println!("{}  {}", name, hex);
            }
        }
        None => println!("no embedded checksum"),
    }
    Ok(())
}

fn extract_from<R: BufRead>(chain: &ExtractorChain, input: R) -> Result<Option<ChecksumMap>> {
    let lines = input
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .context("read header lines from stdin")?;
    let response = TransportResponse::from_header_lines(&lines);
    Ok(chain.extract_checksums(&response))
}
