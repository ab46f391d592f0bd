// pipeline.rs
use crate::config::ScrapeConfig;
use crate::domain::{normalize_listing, CleanListing};
use crate::errors::AppResult;
use crate::scraper::ListingScraper;
use crate::spreadsheets::export_listings;
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct RunSummary {
    pub listings_written: usize,
    /// The page came back without the search results block.
    pub block_missing: bool,
    pub output_path: PathBuf,
}

/// Listings found on a page, or why there are none.
#[derive(Debug)]
pub struct PageListings {
    pub listings: Vec<CleanListing>,
    pub block_missing: bool,
}

/// Fetch, normalize and export one search page.
pub fn run(config: &ScrapeConfig) -> AppResult<RunSummary> {
    info!(url = %config.url, "starting scrape");

    let scraper = ListingScraper::new(config)?;
    let html = scraper.fetch_html()?;
    debug!(bytes = html.len(), "search page fetched");

    let page = process_page(&html)?;

    export_listings(&page.listings, &config.output_path)?;
    info!(
        rows = page.listings.len(),
        path = %config.output_path.display(),
        "listings exported"
    );

    log_preview(&page.listings, config.preview_rows);

    Ok(RunSummary {
        listings_written: page.listings.len(),
        block_missing: page.block_missing,
        output_path: config.output_path.clone(),
    })
}

/// Everything after the fetch: extract the embedded listings and normalize
/// each one. A page without the results block is not an error, it just has
/// no listings.
pub fn process_page(html: &str) -> AppResult<PageListings> {
    let Some(raw) = ListingScraper::extract_listings(html)? else {
        warn!("could not find structured data block on search page");
        return Ok(PageListings {
            listings: Vec::new(),
            block_missing: true,
        });
    };

    debug!(count = raw.len(), "raw listings extracted");

    let listings = raw.iter().map(normalize_listing).collect();
    Ok(PageListings {
        listings,
        block_missing: false,
    })
}

fn log_preview(listings: &[CleanListing], rows: usize) {
    for (i, listing) in listings.iter().take(rows).enumerate() {
        info!(
            row = i,
            name = listing.name.as_deref().unwrap_or(""),
            price = ?listing.price,
            location = listing.location.as_deref().unwrap_or(""),
            make = %listing.make,
            latitude = ?listing.latitude,
            longitude = ?listing.longitude,
            "preview"
        );
    }
}
