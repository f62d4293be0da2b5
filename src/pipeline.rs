//! Search → fetch → filter → output orchestration

use std::path::Path;

use tracing::{debug, instrument};

use crate::error::Result;
use crate::export::{SaveOutcome, save_to_csv};
use crate::filter::filter_paper;
use crate::paper::FilteredPaper;
use crate::source::LiteratureSource;

/// Maximum number of search hits examined per run
pub const SEARCH_RESULT_CAP: usize = 20;

/// What a pipeline run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Papers were written (or there were none to write)
    Saved(SaveOutcome),
    /// No output path was given; the papers are returned for printing
    Collected(Vec<FilteredPaper>),
}

/// Search for `query` and keep papers with an industry-affiliated author
///
/// Records are fetched one at a time in search order. Ids without an
/// article and articles without a qualifying author are skipped. The first
/// search or fetch error aborts the run and discards collected papers.
#[instrument(skip(source), fields(query = %query))]
pub async fn fetch_filtered_papers<S>(source: &S, query: &str) -> Result<Vec<FilteredPaper>>
where
    S: LiteratureSource + ?Sized,
{
    debug!("Searching PubMed for query: {}", query);
    let paper_ids = source.search(query, SEARCH_RESULT_CAP).await?;
    debug!("Found {} papers", paper_ids.len());

    let mut filtered_papers = Vec::new();
    for paper_id in &paper_ids {
        let Some(record) = source.fetch(paper_id).await? else {
            continue;
        };
        if let Some(paper) = filter_paper(&record) {
            filtered_papers.push(paper);
        }
    }

    debug!(
        kept = filtered_papers.len(),
        examined = paper_ids.len(),
        "Filtering finished"
    );

    Ok(filtered_papers)
}

/// Run the pipeline and save to `output` when given
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use pubmed_industry_papers::{ClientConfig, PubMedClient};
/// use pubmed_industry_papers::pipeline::{PipelineOutcome, fetch_and_save_papers};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PubMedClient::with_config(ClientConfig::new().with_email("me@lab.org"));
///     let outcome =
///         fetch_and_save_papers(&client, "CRISPR gene editing", Some(Path::new("papers.csv")))
///             .await?;
///     if let PipelineOutcome::Saved(saved) = outcome {
///         println!("{}", saved);
///     }
///     Ok(())
/// }
/// ```
pub async fn fetch_and_save_papers<S>(
    source: &S,
    query: &str,
    output: Option<&Path>,
) -> Result<PipelineOutcome>
where
    S: LiteratureSource + ?Sized,
{
    let papers = fetch_filtered_papers(source, query).await?;

    match output {
        Some(path) => Ok(PipelineOutcome::Saved(save_to_csv(&papers, path)?)),
        None => Ok(PipelineOutcome::Collected(papers)),
    }
}
