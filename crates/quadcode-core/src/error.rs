use std::collections::TryReserveError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuadError>;

#[derive(Debug, Error)]
pub enum QuadError {
    #[error("raster error: {0}")]
    Raster(String),

    #[error("code buffer allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
}
