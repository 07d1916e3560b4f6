/// Errors that can occur in a file-backed medium.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading the backing file failed (other than the file not existing,
    /// which is simply an empty medium).
    #[error("read failed: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// Writing the backing file failed.
    #[error("write failed: {0}")]
    WriteFailed(#[source] std::io::Error),

    /// The backing file exists but does not hold a valid key-value map.
    /// Reads fail until the next successful write replaces it wholesale.
    #[error("backing file is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
}
