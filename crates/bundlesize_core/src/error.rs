use std::{io, path::PathBuf};
use thiserror::Error;

/// Fatal failures while loading a manifest or sizing its chunks.
///
/// None of these are recovered from: a single bad chunk aborts the report.
#[derive(Debug, Error)]
pub enum SizeError {
    #[error("failed to read manifest {}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse manifest {}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("chunk '{importer}' imports '{id}', which is not in the manifest")]
    UnknownImport { importer: String, id: String },

    #[error("failed to read artifact {}", path.display())]
    ArtifactRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to estimate compressed size of {}", path.display())]
    Estimate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("import cycle detected: {}", cycle.join(" -> "))]
    ImportCycle { cycle: Vec<String> },
}
