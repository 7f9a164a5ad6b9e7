use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Missing futbin_id parameter")]
    MissingId,
    #[error("FUTBIN returned status {0}")]
    UpstreamStatus(u16),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
