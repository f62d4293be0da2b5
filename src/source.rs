//! The narrow upstream interface the pipeline depends on
//!
//! The filter only needs two things from a bibliographic service: ids for a
//! query and a normalized record per id. Anything that can answer both can
//! drive [`crate::pipeline`], which keeps filter logic testable without HTTP.

use async_trait::async_trait;

use crate::error::Result;
use crate::pubmed::{PaperRecord, PubMedClient};

#[async_trait]
pub trait LiteratureSource: Send + Sync {
    /// Ids matching `query`, at most `limit`, in service order
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>>;

    /// The record for `id`, or `None` if the service has no article for it
    async fn fetch(&self, id: &str) -> Result<Option<PaperRecord>>;
}

#[async_trait]
impl LiteratureSource for PubMedClient {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        self.search_ids(query, limit).await
    }

    async fn fetch(&self, id: &str) -> Result<Option<PaperRecord>> {
        self.fetch_record(id).await
    }
}
