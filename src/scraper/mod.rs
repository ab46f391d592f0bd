pub mod models;
mod scraper;
mod scraper_error;

pub use self::models::RawListing;
pub use self::scraper::ListingScraper;
pub use self::scraper_error::ScraperError;
