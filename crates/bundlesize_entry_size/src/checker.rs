use anyhow::{Context, Result};
use bundlesize_core::{
    ArtifactStore, BrotliEstimator, FsStore, Manifest, SizeError, SizeEstimator,
};
use log::{debug, info, trace, warn};

use crate::{
    aggregator::{SizeCache, SizeContext, compute_size},
    config::Config,
    types::{EntrySize, SizeReport},
};

pub fn run_entry_size_report(cfg: &Config) -> Result<SizeReport> {
    info!("Starting entry size report");

    let manifest_path = cfg.manifest_path()?;
    info!("Using manifest: {}", manifest_path.display());
    let manifest = Manifest::load(&manifest_path)?;

    let estimator = BrotliEstimator::with_quality(cfg.quality);
    debug!("Estimating compressed sizes with brotli quality {}", estimator.quality());

    let report = measure_entries(&manifest, &FsStore, &estimator, &cfg.prefix)
        .with_context(|| format!("Failed to size entries of {}", manifest_path.display()))?;

    info!(
        "Entry size report complete. Measured {} entries, reporting {}",
        report.entries_measured,
        report.entries.len()
    );
    Ok(report)
}

/// Sizes every entry of `manifest` against one shared cache, then collects the
/// entries whose id starts with `prefix`.
///
/// Entries are measured in manifest order and each total is cached under the
/// entry's id, so later entries reuse it when they import an earlier one.
pub fn measure_entries<S: ArtifactStore, E: SizeEstimator>(
    manifest: &Manifest,
    store: &S,
    estimator: &E,
    prefix: &str,
) -> Result<SizeReport, SizeError> {
    if manifest.is_empty() {
        warn!("Manifest has no chunks");
    }

    let ctx = SizeContext::new(manifest, store, estimator);
    let mut cache = SizeCache::new();
    let mut entries_measured = 0;

    for (id, chunk) in manifest.entries() {
        debug!("Measuring entry: {}", id);
        let size = compute_size(&ctx, id, chunk, &mut cache)?;
        cache.insert(id.to_string(), size);
        entries_measured += 1;
    }

    if entries_measured == 0 {
        warn!("Manifest has no chunks flagged as entries");
    }

    let entries: Vec<EntrySize> = manifest
        .entries()
        .filter(|(id, _)| id.starts_with(prefix))
        .filter_map(|(id, _)| {
            trace!("Reporting entry: {}", id);
            cache.get(id).map(|size| EntrySize { id: id.to_string(), size: *size })
        })
        .collect();

    debug!("Cache statistics: sized chunks={}", cache.len());
    Ok(SizeReport { entries, sized_chunks: cache.len(), entries_measured })
}
