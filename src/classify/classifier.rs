//! Classifier and classification results.
use std::collections::HashSet;

use log::{debug, info};
use serde::Serialize;

use super::KeywordRule;
use crate::corpus::Entry;

/// How entries matching several rules are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Assignment {
    /// Each bucket is filled independently: an entry goes into every bucket it matches.
    #[default]
    Shared,
    /// Each entry goes into a single bucket.
    ///
    /// The first rule whose priority keyword matches wins,
    /// then the first rule whose keyword set matches.
    Exclusive,
}

/// Entries assigned to one [KeywordRule].
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Bucket {
    keyword: String,
    entries: Vec<Entry>,
}

impl Bucket {
    fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            entries: Vec::new(),
        }
    }

    /// Primary keyword of the rule, used as the bucket name.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of a classification pass.
///
/// Holds one bucket per rule (in rule order, possibly empty) and the entries no bucket holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    buckets: Vec<Bucket>,
    unclassified: Vec<Entry>,
}

impl Classification {
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Get the bucket named by `keyword`, if a rule defines it.
    pub fn bucket(&self, keyword: &str) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.keyword == keyword)
    }

    pub fn unclassified(&self) -> &[Entry] {
        &self.unclassified
    }
}

/// Sorts a corpus into buckets following an ordered rule table.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<KeywordRule>,
    assignment: Assignment,
}

impl Classifier {
    pub fn new(rules: Vec<KeywordRule>, assignment: Assignment) -> Self {
        Self { rules, assignment }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Index of the rule `entry` is assigned to in exclusive mode.
    fn exclusive_rule(&self, entry: &Entry) -> Option<usize> {
        self.rules
            .iter()
            .position(|rule| rule.matches_priority(entry))
            .or_else(|| {
                self.rules
                    .iter()
                    .position(|rule| rule.matches_keywords(entry))
            })
    }

    /// Classifies the corpus.
    ///
    /// Blank entries are never put in a bucket.
    /// Every entry ends up in at least one bucket or in the unclassified list.
    pub fn classify(&self, corpus: &[Entry]) -> Classification {
        let mut buckets: Vec<Bucket> = self
            .rules
            .iter()
            .map(|rule| Bucket::new(rule.primary_keyword()))
            .collect();

        for entry in corpus.iter().filter(|e| e.is_eligible()) {
            match self.assignment {
                Assignment::Shared => {
                    for (rule, bucket) in self.rules.iter().zip(buckets.iter_mut()) {
                        if rule.matches(entry) {
                            bucket.entries.push(entry.clone());
                        }
                    }
                }
                Assignment::Exclusive => {
                    if let Some(idx) = self.exclusive_rule(entry) {
                        buckets[idx].entries.push(entry.clone());
                    }
                }
            }
        }

        for bucket in &buckets {
            debug!("[{}] {} entries", bucket.keyword, bucket.len());
        }

        // membership over the union of all buckets, by structural equality
        let classified: HashSet<&Entry> = buckets.iter().flat_map(|b| b.entries.iter()).collect();
        let unclassified: Vec<Entry> = corpus
            .iter()
            .filter(|e| !classified.contains(e))
            .cloned()
            .collect();

        info!(
            "classified {} entries in {} buckets, {} unclassified",
            corpus.len() - unclassified.len(),
            buckets.len(),
            unclassified.len()
        );

        Classification {
            buckets,
            unclassified,
        }
    }
}

impl Default for Classifier {
    /// Default classifier uses [super::DEFAULT_RULES] with shared assignment.
    fn default() -> Self {
        Self::new(super::DEFAULT_RULES.clone(), Assignment::Shared)
    }
}
