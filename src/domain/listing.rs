use serde::Serialize;

/// Column order of every export.
pub const COLUMNS: [&str; 6] = ["name", "price", "location", "make", "latitude", "longitude"];

/// Make used when nothing sensible could be derived from the title.
pub const UNKNOWN_MAKE: &str = "UNKNOWN";

/// A listing after normalization. One per scraped listing, even when every
/// field came out empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanListing {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub location: Option<String>,
    // Uppercase canonical make or UNKNOWN_MAKE, never empty.
    pub make: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
