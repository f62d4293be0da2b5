//! Internal EFetch XML schema
//!
//! Only the elements the industry filter reads are modelled; serde skips the
//! rest of the record.

use serde::Deserialize;

use super::deserializers::deserialize_optional_text;
use crate::pubmed::models::{Author, PaperRecord};

#[derive(Debug, Deserialize)]
pub(super) struct PubmedArticleSet {
    #[serde(rename = "PubmedArticle", default)]
    pub articles: Vec<PubmedArticleXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PubmedArticleXml {
    #[serde(rename = "MedlineCitation")]
    pub medline_citation: MedlineCitationXml,
}

#[derive(Debug, Deserialize)]
pub(super) struct MedlineCitationXml {
    #[serde(rename = "PMID", default, deserialize_with = "deserialize_optional_text")]
    pub pmid: Option<String>,
    #[serde(rename = "DateCompleted", default)]
    pub date_completed: Option<DateXml>,
    #[serde(rename = "Article")]
    pub article: ArticleXml,
}

#[derive(Debug, Deserialize)]
pub(super) struct DateXml {
    #[serde(rename = "Year", default, deserialize_with = "deserialize_optional_text")]
    pub year: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ArticleXml {
    #[serde(
        rename = "ArticleTitle",
        default,
        deserialize_with = "deserialize_optional_text"
    )]
    pub title: Option<String>,
    #[serde(rename = "AuthorList", default)]
    pub author_list: Option<AuthorListXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AuthorListXml {
    #[serde(rename = "Author", default)]
    pub authors: Vec<AuthorXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AuthorXml {
    #[serde(rename = "LastName", default, deserialize_with = "deserialize_optional_text")]
    pub last_name: Option<String>,
    #[serde(rename = "ForeName", default, deserialize_with = "deserialize_optional_text")]
    pub fore_name: Option<String>,
    #[serde(rename = "AffiliationInfo", default)]
    pub affiliation_info: Vec<AffiliationInfoXml>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AffiliationInfoXml {
    #[serde(
        rename = "Affiliation",
        default,
        deserialize_with = "deserialize_optional_text"
    )]
    pub affiliation: Option<String>,
}

impl PubmedArticleXml {
    /// Convert into the public record, keyed by the requested PMID
    pub(super) fn into_record(self, pmid: &str) -> PaperRecord {
        let citation = self.medline_citation;
        let authors = citation
            .article
            .author_list
            .map(|list| list.authors.into_iter().map(AuthorXml::into_author).collect())
            .unwrap_or_default();

        PaperRecord {
            pmid: pmid.to_string(),
            title: citation.article.title,
            completed_year: citation.date_completed.and_then(|date| date.year),
            authors,
        }
    }
}

impl AuthorXml {
    fn into_author(self) -> Author {
        Author {
            fore_name: self.fore_name,
            last_name: self.last_name,
            // An AffiliationInfo without Affiliation counts as an empty string
            affiliations: self
                .affiliation_info
                .into_iter()
                .map(|info| info.affiliation.unwrap_or_default())
                .collect(),
        }
    }
}
