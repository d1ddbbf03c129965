use bundlesize_core::{ArtifactStore, Manifest, ManifestChunk, SizeError, SizeEstimator, SizeInfo};
use log::{debug, trace};
use std::collections::HashMap;

/// Chunk id -> combined size of the chunk and everything it imports.
///
/// Grows over a whole run so later entries reuse chunks sized by earlier ones.
pub type SizeCache = HashMap<String, SizeInfo>;

/// The collaborators a size computation reads from.
pub struct SizeContext<'a, S, E> {
    pub manifest: &'a Manifest,
    pub store: &'a S,
    pub estimator: &'a E,
}

impl<'a, S: ArtifactStore, E: SizeEstimator> SizeContext<'a, S, E> {
    pub fn new(manifest: &'a Manifest, store: &'a S, estimator: &'a E) -> Self {
        Self { manifest, store, estimator }
    }

    fn own_size(&self, chunk: &ManifestChunk) -> Result<SizeInfo, SizeError> {
        let path = self.manifest.artifact_path(chunk);
        trace!("Reading artifact: {}", path.display());

        let original_size = self
            .store
            .size(&path)
            .map_err(|source| SizeError::ArtifactRead { path: path.clone(), source })?;
        let bytes = self
            .store
            .read(&path)
            .map_err(|source| SizeError::ArtifactRead { path: path.clone(), source })?;
        let brotli_size = self
            .estimator
            .estimate(&bytes)
            .map_err(|source| SizeError::Estimate { path: path.clone(), source })?;

        trace!("Artifact {} is {} bytes ({} compressed)", path.display(), original_size, brotli_size);
        Ok(SizeInfo::new(original_size, brotli_size))
    }
}

/// Computes the size of `chunk` plus the closure of its static imports.
///
/// The chunk's own artifact is always read, even when `id` is already cached.
/// Imports found in `cache` are added without being read again; every other
/// import is sized recursively. Only leaf chunks are written to the cache.
/// A chunk with imports is re-read each time an uncached parent reaches it,
/// and storing its returned total under `id` is up to the caller.
///
/// Fails on the first missing artifact, unknown import, or import cycle.
pub fn compute_size<S: ArtifactStore, E: SizeEstimator>(
    ctx: &SizeContext<'_, S, E>,
    id: &str,
    chunk: &ManifestChunk,
    cache: &mut SizeCache,
) -> Result<SizeInfo, SizeError> {
    let mut resolving = Vec::new();
    compute_size_internal(ctx, id, chunk, cache, &mut resolving)
}

/// `resolving` is the chain of chunk ids currently on the recursion stack
fn compute_size_internal<S: ArtifactStore, E: SizeEstimator>(
    ctx: &SizeContext<'_, S, E>,
    id: &str,
    chunk: &ManifestChunk,
    cache: &mut SizeCache,
    resolving: &mut Vec<String>,
) -> Result<SizeInfo, SizeError> {
    if let Some(pos) = resolving.iter().position(|r| r == id) {
        let mut cycle = resolving[pos..].to_vec();
        cycle.push(id.to_string());
        debug!("Import cycle detected: {}", cycle.join(" -> "));
        return Err(SizeError::ImportCycle { cycle });
    }

    let own = ctx.own_size(chunk)?;

    if chunk.is_leaf() {
        trace!("Leaf chunk '{}' cached", id);
        cache.insert(id.to_string(), own);
        return Ok(own);
    }

    let imports = chunk.imports.as_deref().unwrap_or_default();
    resolving.push(id.to_string());

    let deps = imports
        .iter()
        .map(|import| {
            if let Some(cached) = cache.get(import) {
                trace!("Cache hit for chunk size: '{}'", import);
                return Ok(*cached);
            }

            trace!("Sizing import '{}' of '{}'", import, id);
            let child = ctx.manifest.resolve_import(id, import)?;
            compute_size_internal(ctx, import, child, cache, resolving)
        })
        .sum::<Result<SizeInfo, SizeError>>()?;

    resolving.pop();

    let total = own + deps;
    debug!(
        "Chunk '{}' totals {} bytes ({} compressed) across {} imports",
        id,
        total.original_size,
        total.brotli_size,
        imports.len()
    );
    Ok(total)
}
