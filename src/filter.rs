//! Industry-affiliation filter and contact email extraction

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, instrument};

use crate::paper::{FilteredPaper, NO_EMAIL, UNKNOWN};
use crate::pubmed::PaperRecord;

/// Lower-case substrings that mark an affiliation as non-academic
pub const INDUSTRY_KEYWORDS: [&str; 3] = ["pharma", "biotech", "company"];

/// Loose email shape; no deliverability checks
pub const EMAIL_PATTERN: &str = r"[\w.-]+@[\w.-]+\.\w+";

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Return the leftmost email-like substring of `text`
///
/// ```
/// use pubmed_industry_papers::filter::extract_email;
///
/// assert_eq!(
///     extract_email("Acme Pharma, Basel. a.b-c@acme.co.uk; x@y.org"),
///     Some("a.b-c@acme.co.uk")
/// );
/// assert_eq!(extract_email("Acme Pharma, Basel"), None);
/// ```
pub fn extract_email(text: &str) -> Option<&str> {
    email_regex().find(text).map(|m| m.as_str())
}

/// Case-insensitive check against [`INDUSTRY_KEYWORDS`]
pub fn is_industry_affiliation(affiliation: &str) -> bool {
    let lowered = affiliation.to_lowercase();
    INDUSTRY_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// Build a [`FilteredPaper`] if any named author has an industry affiliation
///
/// Authors are visited in record order and their affiliations in document
/// order. Every matching affiliation is recorded once (exact string
/// equality, first-seen order). The first email found in a matching
/// affiliation becomes the corresponding email. Author names are not
/// deduplicated: an author with two matching affiliations appears twice.
#[instrument(skip(record), fields(pmid = %record.pmid))]
pub fn filter_paper(record: &PaperRecord) -> Option<FilteredPaper> {
    let mut non_academic_authors: Vec<String> = Vec::new();
    let mut company_affiliations: Vec<&str> = Vec::new();
    let mut corresponding_email: Option<&str> = None;

    for author in &record.authors {
        for affiliation in &author.affiliations {
            if !is_industry_affiliation(affiliation) {
                continue;
            }

            let full_name = author.full_name();
            if !full_name.is_empty() {
                non_academic_authors.push(full_name);
            }

            if !company_affiliations.contains(&affiliation.as_str()) {
                company_affiliations.push(affiliation);
            }

            if corresponding_email.is_none() {
                corresponding_email = extract_email(affiliation);
            }
        }
    }

    if non_academic_authors.is_empty() {
        debug!("No industry-affiliated authors");
        return None;
    }

    debug!(
        authors = non_academic_authors.len(),
        affiliations = company_affiliations.len(),
        has_email = corresponding_email.is_some(),
        "Paper kept"
    );

    Some(FilteredPaper {
        pubmed_id: record.pmid.clone(),
        title: record.title.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        publication_date: record
            .completed_year
            .clone()
            .unwrap_or_else(|| UNKNOWN.to_string()),
        non_academic_authors: non_academic_authors.join(", "),
        company_affiliations: company_affiliations.join(", "),
        corresponding_email: corresponding_email.unwrap_or(NO_EMAIL).to_string(),
    })
}
