use serde::Deserialize;
use serde::Serialize;

/// A corpus entry: free text along with its category tags.
///
/// Both fields are optional on the wire. A missing `text` is read as an empty string
/// and missing `tags` as an empty list.
/// Equality and hashing are structural, which is what bucket membership relies on.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Default)]
pub struct Entry {
    #[serde(default)]
    text: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl Entry {
    pub fn new(text: String, tags: Vec<String>) -> Self {
        Self { text, tags }
    }

    /// Get a reference to the entry's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get a reference to the entry's tags.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// An entry is eligible for classification if its text is not blank.
    pub fn is_eligible(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Checks if any of the tags contains any of the provided keywords.
    ///
    /// Matching is done on substrings and is case-sensitive.
    pub fn has_tag_containing<'a, I>(&self, keywords: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let keywords: Vec<&str> = keywords.into_iter().collect();
        self.tags
            .iter()
            .any(|tag| keywords.iter().any(|kw| tag.contains(kw)))
    }
}
