use crate::domain::listing::{CleanListing, COLUMNS};
use crate::errors::{AppError, AppResult};
use csv::WriterBuilder;
use std::path::Path;

pub fn export_listings_csv(listings: &[CleanListing], path: &Path) -> AppResult<()> {
    // Header goes out by hand so an empty run still produces one.
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| AppError::Export(format!("Failed to create {}: {}", path.display(), e)))?;

    writer
        .write_record(COLUMNS)
        .map_err(|e| AppError::Export(format!("Failed to write header: {}", e)))?;

    for listing in listings {
        writer
            .serialize(listing)
            .map_err(|e| AppError::Export(format!("Failed to write row: {}", e)))?;
    }

    writer.flush()?;
    Ok(())
}
