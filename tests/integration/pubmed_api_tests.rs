//! Pipeline tests against the real NCBI E-utilities API
//!
//! **IMPORTANT**: These tests are only run when:
//! 1. The `integration-tests` feature is enabled
//! 2. The `PUBMED_REAL_API_TESTS` environment variable is set
//!
//! To run these tests:
//! ```bash
//! PUBMED_REAL_API_TESTS=1 NCBI_EMAIL=you@example.org cargo test --features integration-tests --test pubmed_api_tests
//! ```

#[cfg(feature = "integration-tests")]
mod integration_tests {
    use pubmed_industry_papers::pipeline::SEARCH_RESULT_CAP;
    use pubmed_industry_papers::{ClientConfig, PubMedClient, fetch_filtered_papers};
    use tracing::info;
    use tracing_test::traced_test;

    fn should_run_real_api_tests() -> bool {
        std::env::var("PUBMED_REAL_API_TESTS").is_ok()
    }

    fn create_test_client() -> PubMedClient {
        let mut config = ClientConfig::new().with_tool("pubmed-industry-papers-tests");
        if let Ok(email) = std::env::var("NCBI_EMAIL") {
            config = config.with_email(email);
        }
        PubMedClient::with_config(config)
    }

    #[tokio::test]
    #[traced_test]
    async fn test_real_search_respects_cap() {
        if !should_run_real_api_tests() {
            info!(
                "Skipping real API test - enable with PUBMED_REAL_API_TESTS=1 and --features integration-tests"
            );
            return;
        }

        let client = create_test_client();
        let ids = client
            .search_ids("monoclonal antibody", SEARCH_RESULT_CAP)
            .await
            .unwrap();

        assert!(!ids.is_empty());
        assert!(ids.len() <= SEARCH_RESULT_CAP);
        assert!(ids.iter().all(|id| id.chars().all(|c| c.is_ascii_digit())));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_real_pipeline_outputs_only_industry_papers() {
        if !should_run_real_api_tests() {
            info!(
                "Skipping real API test - enable with PUBMED_REAL_API_TESTS=1 and --features integration-tests"
            );
            return;
        }

        let client = create_test_client();
        let papers = fetch_filtered_papers(&client, "pharmaceutical company clinical trial")
            .await
            .unwrap();

        info!(kept = papers.len(), "Real pipeline finished");
        for paper in &papers {
            assert!(!paper.non_academic_authors.is_empty());
            let lowered = paper.company_affiliations.to_lowercase();
            assert!(
                ["pharma", "biotech", "company"]
                    .iter()
                    .any(|k| lowered.contains(k))
            );
        }
    }
}
