//! Artifact GET over libcurl with embedded-checksum pickup.
//!
//! The extractor annotates the outgoing request, the body streams to a file,
//! and the final hop's headers are handed back to the extractor.

mod name;

pub use name::{local_file_name, FALLBACK_NAME};

use crate::checksum::ChecksumMap;
use crate::config::HttpConfig;
use crate::extract::{ChecksumExtractor, TransportRequest, TransportResponse};
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;
use std::str;
use std::time::Duration;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        HttpConfig::default().into()
    }
}

impl From<HttpConfig> for FetchOptions {
    fn from(http: HttpConfig) -> Self {
        Self {
            connect_timeout: http.connect_timeout(),
            timeout: http.timeout(),
        }
    }
}

/// Result of a completed GET.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Status and headers of the final response.
    pub response: TransportResponse,
    pub bytes_written: u64,
    /// What the extractor recovered from the headers, if anything.
    pub checksums: Option<ChecksumMap>,
}

/// GETs `url` into `dest`, following redirects. No retries.
///
/// The body streams into a temporary file beside `dest`, which replaces `dest`
/// only after a 2xx response. On any error `dest` is left as it was.
pub fn fetch_to_file(
    url: &str,
    extractor: &dyn ChecksumExtractor,
    dest: &Path,
    opts: &FetchOptions,
) -> Result<FetchOutcome> {
    let mut request = TransportRequest::get(url);
    extractor.prepare_request(&mut request);

    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("create temporary file in {}", dir.display()))?;
    let mut header_lines: Vec<String> = Vec::new();
    let mut written = 0u64;
    let mut write_error: Option<io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(request.url()).context("invalid URL")?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;

    let mut list = curl::easy::List::new();
    for (k, v) in request.headers() {
        list.append(&format!("{}: {}", k.trim(), v.trim()))?;
    }
    if !request.headers().is_empty() {
        easy.http_headers(list)?;
    }

    let performed = {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| match file.write_all(data) {
            Ok(()) => {
                written += data.len() as u64;
                Ok(data.len())
            }
            Err(e) => {
                write_error = Some(e);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };

    if let Some(e) = write_error {
        return Err(e).with_context(|| format!("write {}", dest.display()));
    }
    performed.context("GET request failed")?;
    file.flush()
        .with_context(|| format!("flush {}", dest.display()))?;

    let response = TransportResponse::from_header_lines(&header_lines);
    if !response.is_success() {
        anyhow::bail!("GET {} returned HTTP {}", url, response.status());
    }
    file.persist(dest)
        .with_context(|| format!("move download into {}", dest.display()))?;

    let checksums = extractor.extract_checksums(&response);
    match &checksums {
        Some(c) => tracing::info!("fetched {} ({} bytes), embedded {:?}", url, written, c),
        None => tracing::info!("fetched {} ({} bytes), no embedded checksum", url, written),
    }

    Ok(FetchOutcome {
        response,
        bytes_written: written,
        checksums,
    })
}
