//! CLI command handlers, one per file.

mod algorithms;
mod checksum;
mod completions;
mod extract;
mod fetch;
mod verify;

pub use algorithms::run_algorithms;
pub use checksum::run_checksum;
pub use completions::run_completions;
pub use extract::run_extract;
pub use fetch::run_fetch;
pub use verify::run_verify;

use anyhow::Result;
use artisum_core::config::ArtisumConfig;
use artisum_core::extract::ExtractorChain;

/// Extractor chain from `--extractor` flags, or from config when none were given.
fn extractor_chain(cfg: &ArtisumConfig, names: &[String]) -> Result<ExtractorChain> {
    let chain = if names.is_empty() {
        cfg.extractor_chain()?
    } else {
        ExtractorChain::from_names(names)?
    };
    Ok(chain)
}
