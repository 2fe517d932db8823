//! Keyword sets and model-response parsing

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Deduplicated, lexicographically sorted, lower-cased keyword collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    /// Normalize raw phrases: trim, lower-case, drop empties, dedup, sort.
    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = phrases
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self(set.into_iter().collect())
    }

    pub fn contains(&self, keyword: &str) -> bool {
        let needle = keyword.trim().to_lowercase();
        self.0.binary_search(&needle).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

/// Which parsing path produced the keywords. Both branches normalize to the
/// same `KeywordSet`; the tag exists so callers and tests can tell whether
/// the model honored the JSON contract or we degraded to comma-splitting.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedKeywords {
    Structured(KeywordSet),
    Fallback(KeywordSet),
}

impl ParsedKeywords {
    pub fn keywords(&self) -> &KeywordSet {
        match self {
            ParsedKeywords::Structured(set) | ParsedKeywords::Fallback(set) => set,
        }
    }

    pub fn into_keywords(self) -> KeywordSet {
        match self {
            ParsedKeywords::Structured(set) | ParsedKeywords::Fallback(set) => set,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, ParsedKeywords::Structured(_))
    }
}

#[derive(Deserialize)]
struct KeywordPayload {
    #[serde(default)]
    keywords: Vec<String>,
}

/// Parse a raw model reply into keywords. Never fails: a malformed or
/// JSON-free reply degrades to splitting the whole text on commas.
pub fn parse_keyword_response(raw: &str) -> ParsedKeywords {
    if let Some(structured) = try_parse_json(raw) {
        if !structured.is_empty() {
            return ParsedKeywords::Structured(structured);
        }
    }

    let fallback = KeywordSet::from_phrases(raw.split(','));
    ParsedKeywords::Fallback(fallback)
}

/// Greedy first-`{`-to-last-`}` substring, then a strict JSON parse of the
/// `keywords` array.
fn try_parse_json(raw: &str) -> Option<KeywordSet> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }

    let candidate = &raw[start..=end];
    let payload: KeywordPayload = serde_json::from_str(candidate).ok()?;
    Some(KeywordSet::from_phrases(payload.keywords))
}
