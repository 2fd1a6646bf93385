//! Scraper for OCHMO technical briefs.
//!
//! Pipeline: listing page → brief URLs → per URL (fetch → page-1 text →
//! extraction rules) → `DocumentRecord`s. Failures at any per-document stage
//! degrade that record instead of aborting the run.

pub mod collection;
pub mod error;
pub mod http;
pub mod listing;
pub mod output;
pub mod parser;
pub mod pdf;
pub mod record;
pub mod settings;

pub use collection::CollectionScraper;
pub use error::{DocumentParseError, RetrievalError};
pub use http::{Fetch, HttpFetcher};
pub use pdf::{LopdfText, PageText};
pub use record::DocumentRecord;
pub use settings::Settings;
