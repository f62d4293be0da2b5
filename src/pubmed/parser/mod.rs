//! PubMed EFetch XML parser
//!
//! Turns an EFetch response into a [`PaperRecord`]. Only the first
//! `PubmedArticle` is read; a response without one yields `None`.
//!
//! # Module Organization
//!
//! - `preprocessing` - XML cleanup before deserialization
//! - `deserializers` - Custom serde deserializers for text fields
//! - `xml_types` - Internal XML schema and conversion to public models

mod deserializers;
mod preprocessing;
mod xml_types;

use quick_xml::de::from_str;
use tracing::{debug, instrument};

use crate::error::{PubMedError, Result};
use crate::pubmed::models::PaperRecord;
use preprocessing::strip_inline_html_tags;
use xml_types::PubmedArticleSet;

/// Parse an EFetch XML response into a normalized record
///
/// # Returns
///
/// * `Ok(Some(record))` - the response holds a `PubmedArticle`
/// * `Ok(None)` - the response has no `PubmedArticle` container (book
///   records, unknown ids)
///
/// # Errors
///
/// Returns `PubMedError::XmlError` if the XML is malformed or a
/// `PubmedArticle` lacks its `MedlineCitation`/`Article` elements.
///
/// # Example
///
/// ```
/// use pubmed_industry_papers::pubmed::parse_record_from_xml;
///
/// let xml = r#"<PubmedArticleSet>
///   <PubmedArticle>
///     <MedlineCitation>
///       <PMID>12345678</PMID>
///       <Article><ArticleTitle>Example Article</ArticleTitle></Article>
///     </MedlineCitation>
///   </PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let record = parse_record_from_xml(xml, "12345678")?.unwrap();
/// assert_eq!(record.title.as_deref(), Some("Example Article"));
/// # Ok::<(), pubmed_industry_papers::PubMedError>(())
/// ```
#[instrument(skip(xml), fields(pmid = %pmid, xml_size = xml.len()))]
pub fn parse_record_from_xml(xml: &str, pmid: &str) -> Result<Option<PaperRecord>> {
    let cleaned_xml = strip_inline_html_tags(xml);

    let article_set: PubmedArticleSet = from_str(&cleaned_xml)
        .map_err(|e| PubMedError::XmlError(format!("Failed to deserialize XML: {}", e)))?;

    let Some(article) = article_set.articles.into_iter().next() else {
        debug!("Response contains no PubmedArticle");
        return Ok(None);
    };

    if let Some(found) = article.medline_citation.pmid.as_deref() {
        if found != pmid {
            debug!(found, "EFetch returned a different PMID than requested");
        }
    }

    Ok(Some(article.into_record(pmid)))
}
