#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error("{0} {1}")]
    Status(u16, String),
    #[error("deserialization failed: {0}")]
    Deserialization(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}
