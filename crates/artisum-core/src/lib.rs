//! artisum: artifact integrity checks for repository downloads.
//!
//! - [`checksum`]: algorithm registry and single-pass multi-algorithm calculation
//! - [`extract`]: checksums embedded in HTTP response headers
//! - [`verify`]: compare expected checksums against local content
//! - [`fetch`]: libcurl GET wiring the two together

pub mod checksum;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod verify;
