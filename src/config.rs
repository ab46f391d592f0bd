// config.rs
use crate::errors::AppError;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const SEARCH_URL: &str = "https://raleigh.craigslist.org/search/cta?purveyor=owner";

pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

pub const OUTPUT_PATH: &str = "car_listings.csv";

const REQUEST_TIMEOUT_SECS: u64 = 30;
const PREVIEW_ROWS: usize = 5;

/// Everything a run needs. There is no runtime configuration surface; the
/// binary always uses [`ScrapeConfig::compiled`].
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub url: Url,
    pub user_agent: String,
    pub output_path: PathBuf,
    pub timeout: Duration,
    /// Rows echoed to the log after a run.
    pub preview_rows: usize,
}

impl ScrapeConfig {
    pub fn compiled() -> Result<Self, AppError> {
        Self::for_endpoint(SEARCH_URL, OUTPUT_PATH)
    }

    pub fn for_endpoint(url: &str, output_path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let url = Url::parse(url).map_err(|e| AppError::Config(format!("bad endpoint {url}: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "endpoint must be http(s), got {}",
                url.scheme()
            )));
        }

        Ok(Self {
            url,
            user_agent: USER_AGENT.to_string(),
            output_path: output_path.into(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            preview_rows: PREVIEW_ROWS,
        })
    }
}
