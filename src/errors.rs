// errors.rs
use crate::scraper::ScraperError;
use thiserror::Error;

/// Errors that end a run. Per-field problems never get here; the normalizer
/// turns those into empty cells.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error(transparent)]
    Scrape(#[from] ScraperError),
    #[error("Export error: {0}")]
    Export(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
