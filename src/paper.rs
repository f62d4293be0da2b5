use serde::{Deserialize, Serialize};

/// Value used when a paper has no extractable contact email
pub const NO_EMAIL: &str = "N/A";

/// Value used when a title or completion year is missing
pub const UNKNOWN: &str = "Unknown";

/// A paper with at least one industry-affiliated author
///
/// Field order and serde names define the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredPaper {
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    /// Completion year, or [`UNKNOWN`]
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    /// Author names joined by `", "`
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,
    /// Distinct affiliation strings joined by `", "`
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,
    /// First email found in a matching affiliation, or [`NO_EMAIL`]
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_email: String,
}

impl FilteredPaper {
    /// Whether an email was found for this paper
    pub fn has_email(&self) -> bool {
        self.corresponding_email != NO_EMAIL
    }
}
