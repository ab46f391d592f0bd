pub mod export_csv;
pub mod export_xlsx;

pub use export_csv::export_listings_csv;
pub use export_xlsx::export_listings_xlsx;

use crate::domain::CleanListing;
use crate::errors::AppResult;
use std::path::Path;

/// Writes the listings in the format the file extension asks for. `.xlsx`
/// gets a workbook, everything else is CSV.
pub fn export_listings(listings: &[CleanListing], path: &Path) -> AppResult<()> {
    let is_xlsx = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));

    if is_xlsx {
        export_listings_xlsx(listings, path)
    } else {
        export_listings_csv(listings, path)
    }
}
