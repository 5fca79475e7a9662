use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or writing the JSON document on disk.
///
/// A document that fails to parse is not an error: the store regenerates it.
/// These variants only cover filesystem and serialization failures, which abort
/// the mutation that triggered them.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem operation on the document or its temp file failed.
    #[error("Store I/O failure on {path}: {source}")]
    Io {
        /// File the operation targeted
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The in-memory document could not be serialized.
    #[error("Failed to serialize store document: {0}")]
    Serialize(#[from] serde_json::Error),
}
