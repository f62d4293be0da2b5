//! Custom serde deserializers for PubMed XML text fields

use std::fmt;
use std::result;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Deserialize element text, tolerating attributes and nested markup
///
/// Plain elements arrive as strings. Elements with attributes or child
/// elements (MathML, `<sc>`, ...) arrive as maps; attributes are skipped and
/// the text of every child is collected in document order. The reader trims
/// each text node, so the pieces are joined with a space and whitespace is
/// collapsed.
pub(super) fn deserialize_text<'de, D>(deserializer: D) -> result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer
        .deserialize_any(TextVisitor)
        .map(|text| collapse_whitespace(&text))
}

/// Text of one element and all of its descendants
struct NestedText(String);

impl<'de> Deserialize<'de> for NestedText {
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TextVisitor).map(NestedText)
    }
}

struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("element text content")
    }

    fn visit_str<E>(self, value: &str) -> result::Result<String, E>
    where
        E: de::Error,
    {
        Ok(value.to_string())
    }

    fn visit_string<E>(self, value: String) -> result::Result<String, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_unit<E>(self) -> result::Result<String, E>
    where
        E: de::Error,
    {
        Ok(String::new())
    }

    fn visit_seq<A>(self, mut seq: A) -> result::Result<String, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut parts = Vec::new();
        while let Some(NestedText(part)) = seq.next_element()? {
            parts.push(part);
        }
        Ok(parts.join(" "))
    }

    fn visit_map<M>(self, mut map: M) -> result::Result<String, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut parts = Vec::new();
        while let Some(key) = map.next_key::<String>()? {
            if key.starts_with('@') {
                map.next_value::<de::IgnoredAny>()?;
            } else {
                let NestedText(part) = map.next_value()?;
                parts.push(part);
            }
        }
        Ok(parts.join(" "))
    }
}

/// Collapse runs of whitespace and drop the gap left before punctuation
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        let glued = word.starts_with(['.', ',', ';', ':', '!', '?', ')', ']']);
        if !out.is_empty() && !glued && !out.ends_with(['(', '[']) {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// [`deserialize_text`] for optional fields
///
/// Pair with `#[serde(default)]` so a missing element becomes `None`.
pub(super) fn deserialize_optional_text<'de, D>(
    deserializer: D,
) -> result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_text(deserializer).map(Some)
}
