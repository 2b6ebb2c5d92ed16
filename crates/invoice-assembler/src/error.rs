//! Error types for invoice generation

use thiserror::Error;

use crate::fetch::FetchError;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("stylesheet fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("transformation failed: {0}")]
    Transform(#[from] invoice_engine::Error),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
