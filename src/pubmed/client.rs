use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{PubMedError, Result};
use crate::pubmed::models::PaperRecord;
use crate::pubmed::parser::parse_record_from_xml;
use crate::pubmed::responses::ESearchResult;
use crate::rate_limit::RateLimiter;

/// Client for the PubMed ESearch and EFetch endpoints
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    rate_limiter: RateLimiter,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a client with the default configuration
    ///
    /// Requests carry the placeholder contact email; prefer
    /// [`with_config`](Self::with_config) and a real address.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_industry_papers::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new().with_email("researcher@university.edu");
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.effective_user_agent())
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to build configured HTTP client, using defaults");
                Client::new()
            });

        Self::with_client(client, config)
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        let rate_limiter = config.create_rate_limiter();
        let base_url = config.effective_base_url().to_string();

        Self {
            client,
            base_url,
            rate_limiter,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search PubMed and return matching PMIDs in the order NCBI lists them
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text search term
    /// * `limit` - Maximum number of ids to return (`retmax`)
    ///
    /// # Errors
    ///
    /// * `PubMedError::RequestError` - If the HTTP request fails
    /// * `PubMedError::ApiError` - If NCBI answers with a non-success status
    /// * `PubMedError::JsonError` - If the response is not ESearch JSON
    /// * `PubMedError::InvalidQuery` - If NCBI rejects the query
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_industry_papers::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let pmids = client.search_ids("CRISPR gene editing", 20).await?;
    ///     println!("Found {} papers", pmids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query, limit = limit))]
    pub async fn search_ids(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        if query.trim().is_empty() {
            debug!("Empty query provided, returning empty results");
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=json",
            self.base_url,
            urlencoding::encode(query),
            limit
        );

        debug!("Making ESearch API request");
        let response = self.get(url).await?;

        let search_result: ESearchResult = serde_json::from_str(&response.text().await?)?;
        let data = search_result.esearchresult;

        if let Some(message) = data.error {
            if data.idlist.is_empty() {
                warn!(%message, "ESearch rejected the query");
                return Err(PubMedError::InvalidQuery(message));
            }
        }

        let mut pmids = data.idlist;
        pmids.truncate(limit);

        debug!(
            results_found = pmids.len(),
            total = data.count.as_deref().unwrap_or("unknown"),
            "Search completed successfully"
        );

        Ok(pmids)
    }

    /// Fetch one record by PMID
    ///
    /// Returns `Ok(None)` when the EFetch response has no `PubmedArticle`
    /// container.
    ///
    /// # Errors
    ///
    /// * `PubMedError::RequestError` - If the HTTP request fails
    /// * `PubMedError::ApiError` - If NCBI answers with a non-success status
    /// * `PubMedError::XmlError` - If the XML cannot be parsed
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_industry_papers::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     if let Some(record) = client.fetch_record("31978945").await? {
    ///         println!("{} authors", record.authors.len());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(pmid = %pmid))]
    pub async fn fetch_record(&self, pmid: &str) -> Result<Option<PaperRecord>> {
        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml",
            self.base_url,
            urlencoding::encode(pmid)
        );

        debug!("Making EFetch API request");
        let response = self.get(url).await?;
        let xml_text = response.text().await?;

        let record = parse_record_from_xml(&xml_text, pmid)?;
        match &record {
            Some(record) => debug!(
                authors_count = record.authors.len(),
                has_title = record.title.is_some(),
                "Parsed record"
            ),
            None => info!("EFetch returned no article for this PMID"),
        }

        Ok(record)
    }

    /// Send a rate-limited GET with the identifying parameters appended
    async fn get(&self, mut url: String) -> Result<Response> {
        self.rate_limiter.acquire().await?;

        for (key, value) in self.config.build_api_params() {
            url.push('&');
            url.push_str(&key);
            url.push('=');
            url.push_str(&urlencoding::encode(&value));
        }

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "API request failed");
            return Err(PubMedError::from_status(response.status()));
        }

        Ok(response)
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}
