//! Immutable short-code to destination URL table.
//!
//! The table is built once at startup (or by `mapctl` at build time) from a
//! JSON object and is never mutated afterwards. Document order of the source
//! object is preserved so that listings and suggestions are deterministic.

use std::collections::HashMap;
use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;
use url::Url;

/// Characters that may never appear in a short code.
///
/// A code is a single path segment: `/` would split it, a space is not a
/// valid path character, and `?` would start a query string.
const FORBIDDEN_CODE_CHARS: [char; 3] = ['/', ' ', '?'];

/// Errors detected while parsing or validating a mapping document.
///
/// All of these are load-time errors. Request handlers only ever see a
/// [`UrlMap`] that passed validation.
#[derive(Debug, Error)]
pub enum MappingError {
    /// The document is not a JSON object of string to string.
    #[error("mapping must be a JSON object of code to URL: {0}")]
    Parse(#[from] serde_json::Error),

    /// A key in the document is the empty string.
    #[error("short code must not be empty")]
    EmptyCode,

    /// A key contains `/`, a space, or `?`.
    #[error("short code {code:?} contains forbidden character {ch:?}")]
    ForbiddenChar { code: String, ch: char },

    /// A destination failed to parse as an absolute URL.
    #[error("code {code:?}: destination must be an absolute URL: {source}")]
    InvalidUrl {
        code: String,
        #[source]
        source: url::ParseError,
    },

    /// The same key appears more than once in the document.
    #[error("duplicate short code {0:?}")]
    DuplicateCode(String),
}

/// One `code -> url` pair in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub code: String,
    pub url: String,
}

/// The validated, ordered short-link table.
///
/// Entries keep the insertion order of the source document; a hash index on
/// top provides O(1) code lookup. The structure is read-only after
/// construction and safe to share across handlers behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct UrlMap {
    entries: Vec<MappingEntry>,
    index: HashMap<String, usize>,
}

impl UrlMap {
    /// Builds a validated table from `(code, url)` pairs in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`MappingError`] encountered: empty or malformed
    /// codes, non-absolute destinations, or duplicate codes.
    pub fn from_entries<I, C, U>(pairs: I) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = (C, U)>,
        C: Into<String>,
        U: Into<String>,
    {
        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for (code, url) in pairs {
            let code = code.into();
            let url = url.into();

            validate_code(&code)?;

            Url::parse(&url).map_err(|source| MappingError::InvalidUrl {
                code: code.clone(),
                source,
            })?;

            if index.contains_key(&code) {
                return Err(MappingError::DuplicateCode(code));
            }

            index.insert(code.clone(), entries.len());
            entries.push(MappingEntry { code, url });
        }

        Ok(Self { entries, index })
    }

    /// Parses and validates a mapping from its JSON document.
    ///
    /// The document must be a single JSON object; member order is retained.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Parse`] for malformed JSON and the other
    /// [`MappingError`] variants for invalid entries.
    pub fn from_json_str(document: &str) -> Result<Self, MappingError> {
        let raw: RawEntries = serde_json::from_str(document)?;
        Self::from_entries(raw.0)
    }

    /// Looks up the destination URL for a short code.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.index
            .get(code)
            .map(|&pos| self.entries[pos].url.as_str())
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in document order.
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    /// All short codes in document order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.code.as_str())
    }
}

impl Serialize for UrlMap {
    /// Serializes as a JSON object with members in document order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.code, &entry.url)?;
        }
        map.end()
    }
}

/// Checks a short code against the character rules.
fn validate_code(code: &str) -> Result<(), MappingError> {
    if code.is_empty() {
        return Err(MappingError::EmptyCode);
    }

    if let Some(ch) = code.chars().find(|c| FORBIDDEN_CODE_CHARS.contains(c)) {
        return Err(MappingError::ForbiddenChar {
            code: code.to_string(),
            ch,
        });
    }

    Ok(())
}

/// Raw `(code, url)` pairs in document order, before validation.
///
/// A plain `HashMap` target would drop the member order the suggestion
/// output depends on, so the object is visited member by member instead.
/// Duplicate keys are kept here and rejected by [`UrlMap::from_entries`].
struct RawEntries(Vec<(String, String)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object mapping short codes to URLs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(pair) = access.next_entry::<String, String>()? {
                    pairs.push(pair);
                }
                Ok(RawEntries(pairs))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UrlMap {
        UrlMap::from_entries([
            ("gh", "https://github.com/example"),
            ("docs", "https://docs.example.com/"),
            ("blog", "https://blog.example.com/posts"),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let map = sample();

        assert_eq!(map.get("gh"), Some("https://github.com/example"));
        assert_eq!(map.get("nope"), None);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let map = sample();

        let codes: Vec<&str> = map.codes().collect();
        assert_eq!(codes, vec!["gh", "docs", "blog"]);
    }

    #[test]
    fn test_from_json_str_keeps_document_order() {
        let map = UrlMap::from_json_str(
            r#"{"zebra":"https://z.example.com","alpha":"https://a.example.com"}"#,
        )
        .unwrap();

        let codes: Vec<&str> = map.codes().collect();
        assert_eq!(codes, vec!["zebra", "alpha"]);
    }

    #[test]
    fn test_empty_document_is_valid() {
        let map = UrlMap::from_json_str("{}").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_rejects_empty_code() {
        let result = UrlMap::from_entries([("", "https://example.com")]);
        assert!(matches!(result, Err(MappingError::EmptyCode)));
    }

    #[test]
    fn test_rejects_forbidden_characters() {
        for code in ["a/b", "a b", "a?b"] {
            let result = UrlMap::from_entries([(code, "https://example.com")]);
            assert!(
                matches!(result, Err(MappingError::ForbiddenChar { .. })),
                "code {code:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_relative_url() {
        let result = UrlMap::from_entries([("gh", "/just/a/path")]);
        assert!(matches!(result, Err(MappingError::InvalidUrl { .. })));
    }

    #[test]
    fn test_rejects_duplicate_codes() {
        let result = UrlMap::from_json_str(
            r#"{"gh":"https://github.com","gh":"https://gitlab.com"}"#,
        );
        assert!(matches!(result, Err(MappingError::DuplicateCode(code)) if code == "gh"));
    }

    #[test]
    fn test_rejects_non_object_document() {
        assert!(matches!(
            UrlMap::from_json_str(r#"["gh"]"#),
            Err(MappingError::Parse(_))
        ));
    }

    #[test]
    fn test_serializes_in_document_order() {
        let map = sample();

        let json = serde_json::to_string(&map).unwrap();
        assert!(json.starts_with(r#"{"gh":"#));

        let gh = json.find("\"gh\"").unwrap();
        let docs = json.find("\"docs\"").unwrap();
        let blog = json.find("\"blog\"").unwrap();
        assert!(gh < docs && docs < blog);
    }
}
