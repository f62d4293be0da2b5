//! PubMed client for searching and fetching article records
//!
//! Wraps the ESearch and EFetch E-utilities and normalizes EFetch XML into
//! [`PaperRecord`] values.

pub mod client;
pub mod models;
pub mod parser;
pub mod responses;

// Re-export public types
pub use client::PubMedClient;
pub use models::{Author, PaperRecord};
pub use parser::parse_record_from_xml;
