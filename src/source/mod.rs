pub mod http;

use crate::model::UserRecord;
use thiserror::Error;

pub use http::HttpSource;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(u16),
}

pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Where user records come from.
pub trait RecordSource: Send + Sync {
    fn fetch(&self) -> SourceResult<Vec<UserRecord>>;
}
