//! Core types and collaborators for bundlesize tools.
//!
//! This crate provides shared functionality for measuring bundler output:
//! - Loading Vite-style build manifests
//! - Reading artifacts and estimating their brotli-compressed size
//! - Human-readable size formatting
//! - Locating the project root and the build manifest

mod config;
mod error;
mod estimator;
mod format;
mod manifest;
mod store;
mod types;

// Re-export public API
pub use config::{find_git_root, find_manifest};
pub use error::SizeError;
pub use estimator::{BrotliEstimator, DEFAULT_BROTLI_QUALITY, SizeEstimator};
pub use format::format_size;
pub use manifest::{Manifest, ManifestChunk};
pub use store::{ArtifactStore, FsStore};
pub use types::SizeInfo;
