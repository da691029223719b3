//! Keyword rules.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::corpus::Entry;
use crate::error::Error;

lazy_static! {
    /// Rule table used when none is provided.
    pub static ref DEFAULT_RULES: Vec<KeywordRule> = vec![
        KeywordRule::new("ཡིག་སྒྲེལ་"),
        KeywordRule::new("ངོས་སྦྱོར་"),
        KeywordRule::new("གསལ་བསྒྲགས་"),
        KeywordRule::new("རྩོམ་ཡིག"),
        KeywordRule::new("གློག་དེབ།"),
        KeywordRule::new("མགུར་གླུ།"),
        KeywordRule::new("གསར་འགྱུར།").with_additional(&["news", "News"]),
        KeywordRule::new("སྙན་ངག")
            .with_additional(&["ཚིགས་བཅད"])
            .with_priority("སྙན་ངག"),
    ];
}

/// A classification rule, defining one bucket.
///
/// The bucket is named after `primary_keyword`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    primary_keyword: String,
    #[serde(default)]
    additional_keywords: Vec<String>,
    #[serde(default)]
    priority_keyword: Option<String>,
}

impl KeywordRule {
    pub fn new(primary_keyword: &str) -> Self {
        Self {
            primary_keyword: primary_keyword.to_string(),
            additional_keywords: Vec::new(),
            priority_keyword: None,
        }
    }

    pub fn with_additional(mut self, keywords: &[&str]) -> Self {
        self.additional_keywords
            .extend(keywords.iter().map(|kw| kw.to_string()));
        self
    }

    pub fn with_priority(mut self, keyword: &str) -> Self {
        self.priority_keyword = Some(keyword.to_string());
        self
    }

    /// Loads a rule table from a JSON array.
    pub fn from_path(src: &Path) -> Result<Vec<Self>, Error> {
        debug!("loading rules from {:?}", src);
        let f = File::open(src)?;
        let rules: Vec<Self> = serde_json::from_reader(BufReader::new(f))?;
        if rules.is_empty() {
            return Err(Error::Custom(format!("no rules found in {:?}", src)));
        }
        for rule in &rules {
            rule.validate()?;
        }
        Ok(rules)
    }

    /// Checks that no keyword is empty, since an empty keyword is contained in every tag.
    pub fn validate(&self) -> Result<(), Error> {
        let empty = self.keywords().any(str::is_empty)
            || self.priority_keyword.as_deref() == Some("");
        if empty {
            return Err(Error::Custom(format!(
                "[{}] rule holds an empty keyword",
                self.primary_keyword
            )));
        }
        Ok(())
    }

    /// Get a reference to the rule's primary keyword.
    pub fn primary_keyword(&self) -> &str {
        &self.primary_keyword
    }

    pub fn additional_keywords(&self) -> &[String] {
        &self.additional_keywords
    }

    pub fn priority_keyword(&self) -> Option<&str> {
        self.priority_keyword.as_deref()
    }

    /// primary keyword followed by additional ones.
    fn keywords(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_keyword.as_str())
            .chain(self.additional_keywords.iter().map(String::as_str))
    }

    /// `true` if a tag of `entry` contains the primary or any additional keyword.
    pub fn matches_keywords(&self, entry: &Entry) -> bool {
        entry.has_tag_containing(self.keywords())
    }

    /// `true` if the rule has a priority keyword and a tag of `entry` contains it.
    pub fn matches_priority(&self, entry: &Entry) -> bool {
        match &self.priority_keyword {
            Some(p) => entry.has_tag_containing([p.as_str()]),
            None => false,
        }
    }

    /// `true` if the rule claims `entry`, either through its priority keyword or its keyword set.
    pub fn matches(&self, entry: &Entry) -> bool {
        self.matches_priority(entry) || self.matches_keywords(entry)
    }
}
