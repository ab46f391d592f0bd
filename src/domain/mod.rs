pub mod listing;
pub mod normalize;
pub mod vocab;

pub use listing::CleanListing;
pub use normalize::normalize_listing;
