//! CLI for artisum.

mod commands;

use anyhow::Result;
use artisum_core::config::{self, ArtisumConfig};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{
    run_algorithms, run_checksum, run_completions, run_extract, run_fetch, run_verify,
};

/// Top-level CLI for artisum.
#[derive(Debug, Parser)]
#[command(name = "artisum")]
#[command(about = "artisum: multi-algorithm artifact checksums and header-embedded digests", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/artisum/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List supported checksum algorithms.
    Algorithms,

    /// Compute checksums of a file in a single pass.
    Checksum {
        /// Path to the file.
        path: PathBuf,
        /// Algorithm to compute (repeatable, output keeps this order). Defaults to config.
        #[arg(short = 'a', long = "algorithm", value_name = "NAME")]
        algorithms: Vec<String>,
        /// Print a JSON object instead of one line per algorithm.
        #[arg(long)]
        json: bool,
    },

    /// Check a file against an expected checksum.
    Verify {
        /// Path to the file.
        path: PathBuf,
        /// Algorithm name, e.g. SHA-256.
        #[arg(short = 'a', long = "algorithm", value_name = "NAME")]
        algorithm: String,
        /// Expected hex digest.
        #[arg(short = 'e', long = "expected", value_name = "HEX")]
        expected: String,
    },

    /// Download an artifact and verify it against checksums embedded in the response.
    Fetch {
        /// Direct HTTP/HTTPS URL of the artifact.
        url: String,
        /// Output file (default: last URL path segment in the current directory).
        #[arg(short = 'o', long = "output", value_name = "PATH")]
        output: Option<PathBuf>,
        /// Header convention to use (repeatable, tried in order). Defaults to config.
        #[arg(long = "extractor", value_name = "NAME")]
        extractors: Vec<String>,
    },

    /// Read raw response header lines from stdin and print any embedded checksum.
    Extract {
        /// Header convention to use (repeatable, tried in order). Defaults to config.
        #[arg(long = "extractor", value_name = "NAME")]
        extractors: Vec<String>,
    },

    /// Print a shell completion script.
    Completions {
        shell: Shell,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<ArtisumConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Algorithms => run_algorithms(),
            CliCommand::Checksum {
                path,
                algorithms,
                json,
            } => run_checksum(&cfg, &path, &algorithms, json)?,
            CliCommand::Verify {
                path,
                algorithm,
                expected,
            } => run_verify(&cfg, &path, &algorithm, &expected)?,
            CliCommand::Fetch {
                url,
                output,
                extractors,
            } => run_fetch(&cfg, &url, output, &extractors)?,
            CliCommand::Extract { extractors } => run_extract(&cfg, &extractors)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
