//! XML cleanup applied before deserialization

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Strip inline formatting tags such as `<i>`, `<sup>` and `<sub>`
///
/// Titles and affiliations occasionally carry these tags, which break
/// quick-xml's serde deserializer when it expects plain text.
///
/// ```ignore
/// let cleaned = strip_inline_html_tags("<ArticleTitle>CO<sub>2</sub> capture</ArticleTitle>");
/// assert_eq!(cleaned, "<ArticleTitle>CO2 capture</ArticleTitle>");
/// ```
pub(crate) fn strip_inline_html_tags(xml: &str) -> String {
    let xml = &strip_affiliation_markers(xml);

    static INLINE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = INLINE_TAG_REGEX.get_or_init(|| {
        Regex::new(r"</?(?:i|b|u|sup|sub|em|strong|italic|bold)>")
            .expect("inline tag pattern is valid")
    });

    let cleaned = re.replace_all(xml, "");

    if cleaned.len() != xml.len() {
        debug!(
            original_bytes = xml.len(),
            cleaned_bytes = cleaned.len(),
            "Stripped inline HTML tags"
        );
    }

    cleaned.into_owned()
}

/// Drop superscript footnote markers opening an affiliation
///
/// `<Affiliation><sup>1</sup>Acme Pharma</Affiliation>` would otherwise
/// read as `1Acme Pharma` once the `<sup>` tags are gone.
fn strip_affiliation_markers(xml: &str) -> String {
    static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = MARKER_REGEX.get_or_init(|| {
        Regex::new(r"(<Affiliation(?:\s[^>]*)?>)\s*<sup>[\d\s,*\-]*</sup>\s*")
            .expect("affiliation marker pattern is valid")
    });

    re.replace_all(xml, "$1").into_owned()
}
