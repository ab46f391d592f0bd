use crate::domain::listing::{CleanListing, COLUMNS};
use crate::errors::{AppError, AppResult};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

pub fn export_listings_xlsx(listings: &[CleanListing], path: &Path) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Headers
    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                AppError::Export(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        write_text(worksheet, r, 0, listing.name.as_deref())?;
        write_float(worksheet, r, 1, listing.price)?;
        write_text(worksheet, r, 2, listing.location.as_deref())?;
        write_text(worksheet, r, 3, Some(listing.make.as_str()))?;
        write_float(worksheet, r, 4, listing.latitude)?;
        write_float(worksheet, r, 5, listing.longitude)?;
    }

    workbook
        .save(path)
        .map_err(|e| AppError::Export(format!("Failed to save workbook: {}", e)))?;

    Ok(())
}

// Missing values stay as blank cells.
fn write_text(ws: &mut Worksheet, row: u32, col: u16, value: Option<&str>) -> AppResult<()> {
    if let Some(value) = value {
        ws.write_string(row, col, value).map_err(|e| {
            AppError::Export(format!("Failed to write {}: {}", COLUMNS[col as usize], e))
        })?;
    }
    Ok(())
}

fn write_float(ws: &mut Worksheet, row: u32, col: u16, value: Option<f64>) -> AppResult<()> {
    if let Some(value) = value {
        ws.write_number(row, col, value).map_err(|e| {
            AppError::Export(format!("Failed to write {}: {}", COLUMNS[col as usize], e))
        })?;
    }
    Ok(())
}
