//! End-to-end pipeline tests
//!
//! The wiremock tests drive the real PubMedClient; the in-memory source
//! checks orchestration without HTTP.

#[path = "../common/mod.rs"]
mod common;

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use common::{EMPTY_EFETCH_XML, create_mock_client, efetch_xml, mount_efetch, mount_esearch};
use pubmed_industry_papers::pipeline::SEARCH_RESULT_CAP;
use pubmed_industry_papers::{
    Author, LiteratureSource, PaperRecord, PipelineOutcome, PubMedError, Result, SaveOutcome,
    fetch_and_save_papers, fetch_filtered_papers,
};
use tracing_test::traced_test;
use wiremock::MockServer;

#[tokio::test]
#[traced_test]
async fn test_crispr_scenario_writes_one_row() {
    let server = MockServer::start().await;
    mount_esearch(&server, "CRISPR gene editing", &["111", "222"]).await;
    mount_efetch(
        &server,
        "111",
        efetch_xml(
            "111",
            "Industrial CRISPR screens",
            "2023",
            &[(
                "John",
                "Doe",
                &["Oncology Dept, Genentech Biotech, contact: j.doe@genentech.com"],
            )],
        ),
    )
    .await;
    mount_efetch(
        &server,
        "222",
        efetch_xml(
            "222",
            "Academic CRISPR screens",
            "2023",
            &[
                ("Ann", "Lee", &["Department of Genetics, Stanford University"]),
                ("Bob", "Kim", &["Broad Institute of MIT and Harvard"]),
            ],
        ),
    )
    .await;

    let client = create_mock_client(&server);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("papers.csv");

    let outcome = fetch_and_save_papers(&client, "CRISPR gene editing", Some(output.as_path()))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        PipelineOutcome::Saved(SaveOutcome::Saved {
            count: 1,
            path: output.clone(),
        })
    );

    let mut reader = csv::Reader::from_path(&output).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], "111");
    assert_eq!(&rows[0][3], "John Doe");
    assert_eq!(
        &rows[0][4],
        "Oncology Dept, Genentech Biotech, contact: j.doe@genentech.com"
    );
    assert_eq!(&rows[0][5], "j.doe@genentech.com");
}

#[tokio::test]
async fn test_without_output_returns_collection() {
    let server = MockServer::start().await;
    mount_esearch(&server, "antibody", &["10"]).await;
    mount_efetch(
        &server,
        "10",
        efetch_xml("10", "Antibody design", "2021", &[("Eve", "Ng", &["Acme Pharma, NY"])]),
    )
    .await;

    let client = create_mock_client(&server);
    let outcome = fetch_and_save_papers(&client, "antibody", None).await.unwrap();

    let PipelineOutcome::Collected(papers) = outcome else {
        panic!("expected collected papers");
    };
    assert_eq!(papers.len(), 1);
    assert_eq!(papers[0].title, "Antibody design");
    assert_eq!(papers[0].publication_date, "2021");
    assert_eq!(papers[0].corresponding_email, "N/A");
}

#[tokio::test]
async fn test_empty_search_writes_no_file() {
    let server = MockServer::start().await;
    mount_esearch(&server, "nothing matches this", &[]).await;

    let client = create_mock_client(&server);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("empty.csv");

    let outcome = fetch_and_save_papers(&client, "nothing matches this", Some(output.as_path()))
        .await
        .unwrap();

    assert_eq!(outcome, PipelineOutcome::Saved(SaveOutcome::Empty));
    assert_eq!(SaveOutcome::Empty.to_string(), "No papers to save.");
    assert!(!output.exists());
}

#[tokio::test]
async fn test_missing_article_is_skipped() {
    let server = MockServer::start().await;
    mount_esearch(&server, "mixed", &["1", "2"]).await;
    mount_efetch(&server, "1", EMPTY_EFETCH_XML.to_string()).await;
    mount_efetch(
        &server,
        "2",
        efetch_xml("2", "Kept", "2020", &[("Ann", "Lee", &["Beta Biotech"])]),
    )
    .await;

    let client = create_mock_client(&server);
    let papers = fetch_filtered_papers(&client, "mixed").await.unwrap();

    assert_eq!(papers.len(), 1);
    assert_eq!(papers[0].pubmed_id, "2");
}

/// In-memory source recording which ids were fetched
struct StaticSource {
    ids: Vec<String>,
    records: HashMap<String, PaperRecord>,
    fail_on: Option<String>,
    requested_limit: Mutex<Option<usize>>,
    fetched: Mutex<Vec<String>>,
}

impl StaticSource {
    fn new(records: Vec<PaperRecord>) -> Self {
        Self {
            ids: records.iter().map(|r| r.pmid.clone()).collect(),
            records: records.into_iter().map(|r| (r.pmid.clone(), r)).collect(),
            fail_on: None,
            requested_limit: Mutex::new(None),
            fetched: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LiteratureSource for StaticSource {
    async fn search(&self, _query: &str, limit: usize) -> Result<Vec<String>> {
        *self.requested_limit.lock().unwrap() = Some(limit);
        Ok(self.ids.iter().take(limit).cloned().collect())
    }

    async fn fetch(&self, id: &str) -> Result<Option<PaperRecord>> {
        self.fetched.lock().unwrap().push(id.to_string());
        if self.fail_on.as_deref() == Some(id) {
            return Err(PubMedError::ApiError {
                status: 503,
                message: "Service Unavailable".to_string(),
            });
        }
        Ok(self.records.get(id).cloned())
    }
}

fn industry_record(pmid: &str) -> PaperRecord {
    PaperRecord {
        pmid: pmid.to_string(),
        title: Some(format!("Paper {pmid}")),
        completed_year: None,
        authors: vec![Author::new(Some("Ann"), Some("Lee")).with_affiliation("Acme Pharma")],
    }
}

#[tokio::test]
async fn test_results_follow_search_order_and_cap() {
    let records: Vec<PaperRecord> = (1..=25).map(|i| industry_record(&i.to_string())).collect();
    let source = StaticSource::new(records);

    let papers = fetch_filtered_papers(&source, "anything").await.unwrap();

    assert_eq!(*source.requested_limit.lock().unwrap(), Some(SEARCH_RESULT_CAP));
    assert_eq!(papers.len(), 20);
    let ids: Vec<&str> = papers.iter().map(|p| p.pubmed_id.as_str()).collect();
    assert_eq!(ids.first(), Some(&"1"));
    assert_eq!(ids.last(), Some(&"20"));
    assert_eq!(papers[0].publication_date, "Unknown");
}

#[tokio::test]
async fn test_fetch_error_aborts_run() {
    let mut source = StaticSource::new(vec![
        industry_record("1"),
        industry_record("2"),
        industry_record("3"),
    ]);
    source.fail_on = Some("2".to_string());

    let err = fetch_filtered_papers(&source, "anything").await.unwrap_err();

    assert!(matches!(err, PubMedError::ApiError { status: 503, .. }));
    assert_eq!(*source.fetched.lock().unwrap(), vec!["1", "2"]);
}
