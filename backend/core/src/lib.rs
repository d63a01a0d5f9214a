pub mod error;
pub mod locale;
pub mod types;

pub use error::AppError;
pub use locale::Locale;
pub use types::{
    DescriptionOutcome, MarketplaceCandidate, ProductDescription, SearchResult, StoredUpload,
};
