use indexmap::IndexMap;
use log::{debug, trace};
use path_clean::clean;
use serde::{Deserialize, Deserializer, de::IgnoredAny};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::error::SizeError;

/// One entry of a bundler build manifest.
///
/// Fields the sizer does not use (`css`, `assets`, `dynamicImports`, ...) are
/// ignored during deserialization.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ManifestChunk {
    /// Artifact path, relative to the manifest's directory
    pub file: String,

    /// Static imports. `None` marks a leaf chunk, which is distinct from an
    /// empty list.
    #[serde(default)]
    pub imports: Option<Vec<String>>,

    /// Whether the chunk carries an `isEntry` key, whatever its value
    #[serde(rename = "isEntry", default, deserialize_with = "key_present")]
    pub entry: bool,
}

fn key_present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    IgnoredAny::deserialize(deserializer)?;
    Ok(true)
}

impl ManifestChunk {
    pub fn is_leaf(&self) -> bool {
        self.imports.is_none()
    }

    pub fn is_entry(&self) -> bool {
        self.entry
    }
}

#[derive(Debug, Clone)]
pub struct Manifest {
    chunks: IndexMap<String, ManifestChunk>,
    base_dir: PathBuf,
}

impl Manifest {
    /// Reads and parses the manifest at `path`. Artifacts are resolved against
    /// the manifest's directory joined onto the current working directory.
    pub fn load(path: &Path) -> Result<Self, SizeError> {
        debug!("Loading manifest from {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|source| SizeError::ManifestRead { path: path.to_path_buf(), source })?;

        let cwd = env::current_dir()
            .map_err(|source| SizeError::ManifestRead { path: path.to_path_buf(), source })?;
        let manifest_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let base_dir = PathBuf::from(clean(cwd.join(manifest_dir)));

        let manifest = Self::from_json(&content, base_dir)
            .map_err(|source| SizeError::ManifestParse { path: path.to_path_buf(), source })?;
        debug!("Loaded {} chunks from {}", manifest.len(), path.display());
        Ok(manifest)
    }

    pub fn from_json(content: &str, base_dir: impl Into<PathBuf>) -> serde_json::Result<Self> {
        let chunks: IndexMap<String, ManifestChunk> = serde_json::from_str(content)?;
        Ok(Self { chunks, base_dir: base_dir.into() })
    }

    pub fn get(&self, id: &str) -> Option<&ManifestChunk> {
        self.chunks.get(id)
    }

    /// Looks up an import of `importer`, failing if the manifest lacks it.
    pub fn resolve_import(&self, importer: &str, id: &str) -> Result<&ManifestChunk, SizeError> {
        self.chunks.get(id).ok_or_else(|| SizeError::UnknownImport {
            importer: importer.to_string(),
            id: id.to_string(),
        })
    }

    /// All chunks, in the manifest's own key order.
    pub fn chunks(&self) -> impl Iterator<Item = (&str, &ManifestChunk)> {
        self.chunks.iter().map(|(id, chunk)| (id.as_str(), chunk))
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &ManifestChunk)> {
        self.chunks().filter(|(_, chunk)| chunk.is_entry())
    }

    pub fn artifact_path(&self, chunk: &ManifestChunk) -> PathBuf {
        let path = PathBuf::from(clean(self.base_dir.join(&chunk.file)));
        trace!("Artifact for '{}' resolves to {}", chunk.file, path.display());
        path
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
