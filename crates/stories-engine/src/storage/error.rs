use std::path::PathBuf;

/// Failure while reading or writing persisted values.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage i/o failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stored data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("value for '{key}' must serialize to a JSON object")]
    NotAnObject { key: String },
}
