use serde::{Deserialize, Serialize};

/// Normalized view of one PubMed record
///
/// Only the fields the industry filter looks at are kept. Missing values stay
/// `None`; defaults such as `"Unknown"` are applied by the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// PubMed ID
    pub pmid: String,
    /// Article title
    pub title: Option<String>,
    /// Year from `DateCompleted`
    pub completed_year: Option<String>,
    /// Authors in the order PubMed lists them
    pub authors: Vec<Author>,
}

/// One author entry with its raw affiliation strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub fore_name: Option<String>,
    pub last_name: Option<String>,
    /// Free-text affiliations, in document order
    pub affiliations: Vec<String>,
}

impl Author {
    pub fn new(fore_name: Option<&str>, last_name: Option<&str>) -> Self {
        Self {
            fore_name: fore_name.map(str::to_string),
            last_name: last_name.map(str::to_string),
            affiliations: Vec::new(),
        }
    }

    pub fn with_affiliation<S: Into<String>>(mut self, affiliation: S) -> Self {
        self.affiliations.push(affiliation.into());
        self
    }

    /// `"{fore} {last}"` with surrounding whitespace trimmed
    ///
    /// ```
    /// use pubmed_industry_papers::pubmed::Author;
    ///
    /// assert_eq!(Author::new(Some("Jane"), Some("Doe")).full_name(), "Jane Doe");
    /// assert_eq!(Author::new(None, Some("Doe")).full_name(), "Doe");
    /// assert_eq!(Author::new(None, None).full_name(), "");
    /// ```
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.fore_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}
