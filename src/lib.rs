//! # PubMed Industry Papers
//!
//! Finds PubMed papers that have at least one author affiliated with a
//! pharmaceutical, biotech or other company, and exports them as CSV.
//!
//! The work is a short sequential pipeline:
//!
//! 1. search PubMed for a query (at most 20 ids),
//! 2. fetch each record through EFetch,
//! 3. keep records with an industry-affiliated author and pull a contact
//!    email out of the matching affiliation,
//! 4. write the survivors to CSV or hand them back to the caller.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pubmed_industry_papers::{ClientConfig, PubMedClient, fetch_filtered_papers};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new().with_email("researcher@university.edu");
//!     let client = PubMedClient::with_config(config);
//!
//!     for paper in fetch_filtered_papers(&client, "CRISPR gene editing").await? {
//!         println!("{}: {}", paper.pubmed_id, paper.company_affiliations);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! The pipeline only talks to the upstream service through
//! [`LiteratureSource`], so tests and alternative services can stand in for
//! [`PubMedClient`].

pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod paper;
pub mod pipeline;
pub mod pubmed;
pub mod rate_limit;
pub mod source;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{PubMedError, Result};
pub use export::{SaveOutcome, save_to_csv, write_csv};
pub use filter::{extract_email, filter_paper, is_industry_affiliation};
pub use paper::FilteredPaper;
pub use pipeline::{PipelineOutcome, fetch_and_save_papers, fetch_filtered_papers};
pub use pubmed::{Author, PaperRecord, PubMedClient};
pub use source::LiteratureSource;
