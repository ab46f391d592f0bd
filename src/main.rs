use crate::config::ScrapeConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod pipeline;
mod scraper;
mod spreadsheets;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ScrapeConfig::compiled() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    match pipeline::run(&config) {
        Ok(summary) if summary.block_missing => {
            tracing::warn!(
                path = %summary.output_path.display(),
                "no listings found; wrote header-only file"
            );
        }
        Ok(summary) => {
            tracing::info!(
                rows = summary.listings_written,
                path = %summary.output_path.display(),
                "scrape complete"
            );
        }
        Err(e) => {
            tracing::error!("scrape failed: {e}");
            std::process::exit(1);
        }
    }
}
