//! Algorithm registry and the single-pass multi-algorithm calculator.

use super::algorithm::{builtin_factories, ChecksumAlgorithm, ChecksumAlgorithmFactory};
use super::error::{ChecksumError, Result};
use super::map::ChecksumMap;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Read window used when none is configured.
pub const DEFAULT_BUFFER_SIZE: usize = 32 * 1024;

/// Immutable name → factory table plus the streaming calculator.
///
/// Lookups are read-only, so one selector can serve concurrent calculations;
/// every calculation builds its own accumulators.
#[derive(Clone)]
pub struct ChecksumAlgorithmFactorySelector {
    factories: HashMap<String, Arc<dyn ChecksumAlgorithmFactory>>,
    buffer_size: usize,
}

impl ChecksumAlgorithmFactorySelector {
    /// Builds a registry from an explicit factory table. A later factory with
    /// the same name replaces an earlier one.
    pub fn new<I>(factories: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn ChecksumAlgorithmFactory>>,
    {
        let factories = factories
            .into_iter()
            .map(|f| (f.name().to_string(), f))
            .collect();
        Self {
            factories,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Process-wide registry holding the built-in algorithms.
    pub fn global() -> &'static Self {
        static INSTANCE: OnceLock<ChecksumAlgorithmFactorySelector> = OnceLock::new();
        INSTANCE.get_or_init(Self::default)
    }

    /// Overrides the read window. Results never depend on it; zero is clamped to 1.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    pub fn select(&self, name: &str) -> Result<Arc<dyn ChecksumAlgorithmFactory>> {
        self.factories
            .get(name)
            .cloned()
            .ok_or_else(|| ChecksumError::UnsupportedAlgorithm {
                name: name.to_string(),
                supported: self.sorted_names(),
            })
    }

    /// Resolves every name, keeping the requested order.
    pub fn select_all<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Vec<Arc<dyn ChecksumAlgorithmFactory>>> {
        names.iter().map(|n| self.select(n.as_ref())).collect()
    }

    /// Snapshot of all registered names. Iteration order is unspecified.
    pub fn supported_names(&self) -> HashSet<String> {
        self.factories.keys().cloned().collect()
    }

    fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn calculate_bytes(
        &self,
        data: &[u8],
        factories: &[Arc<dyn ChecksumAlgorithmFactory>],
    ) -> Result<ChecksumMap> {
        self.calculate_reader(data, factories)
    }

    pub fn calculate_file(
        &self,
        path: &Path,
        factories: &[Arc<dyn ChecksumAlgorithmFactory>],
    ) -> Result<ChecksumMap> {
        let file = File::open(path).map_err(|source| ChecksumError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("calculating checksums of {}", path.display());
        self.calculate_reader(file, factories)
    }

    /// Consumes `reader` in one pass, feeding each window to every requested
    /// algorithm before reading the next. The reader is dropped (closed) on
    /// every return path.
    pub fn calculate_reader<R: Read>(
        &self,
        mut reader: R,
        factories: &[Arc<dyn ChecksumAlgorithmFactory>],
    ) -> Result<ChecksumMap> {
        if factories.is_empty() {
            return Err(ChecksumError::NoAlgorithms);
        }

        let mut algorithms: Vec<(&str, Box<dyn ChecksumAlgorithm>)> =
            factories.iter().map(|f| (f.name(), f.algorithm())).collect();
        let mut buf = vec![0u8; self.buffer_size];
        let mut consumed = 0u64;

        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => return Err(ChecksumError::Read { consumed, source }),
            };
            let window = &buf[..n];
            for (_, algorithm) in algorithms.iter_mut() {
                algorithm.update(window);
            }
            consumed += n as u64;
        }

        let mut result = ChecksumMap::new();
        for (name, algorithm) in algorithms {
            result.insert(name, algorithm.checksum());
        }
        tracing::debug!(
            "calculated {} checksum(s) over {} bytes",
            result.len(),
            consumed
        );
        Ok(result)
    }
}

impl Default for ChecksumAlgorithmFactorySelector {
    fn default() -> Self {
        Self::new(builtin_factories())
    }
}
