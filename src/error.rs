#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read `{key}`: {source}")]
    Read { key: String, source: sled::Error },
    #[error("failed to write `{key}`: {source}")]
    Write { key: String, source: sled::Error },
    #[error("stored value for `{key}` is not valid UTF-8")]
    Encoding { key: String },
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
