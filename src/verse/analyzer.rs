//! Poem structure analysis.
use log::debug;
use serde::{Deserialize, Serialize};

use super::count_syllables;
use crate::corpus::Entry;
use crate::error::Error;

/// Structural summary of a text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VerseSummary {
    /// Total number of syllables over counted lines.
    pub syllable_count: usize,
    /// Number of lines holding at least one syllable.
    pub line_count: usize,
    pub structured: bool,
    /// Most frequent per-line syllable count (0 if no line was counted).
    pub modal_syllable_count: usize,
    /// Syllable count of each counted line, in order.
    pub line_counts: Vec<usize>,
}

/// Most frequent value, ties going to the value seen first.
fn modal_count(counts: &[usize]) -> Option<(usize, usize)> {
    // (value, frequency) in first occurrence order
    let mut freqs: Vec<(usize, usize)> = Vec::new();
    for &count in counts {
        match freqs.iter_mut().find(|(value, _)| *value == count) {
            Some((_, freq)) => *freq += 1,
            None => freqs.push((count, 1)),
        }
    }

    let mut best: Option<(usize, usize)> = None;
    for (value, freq) in freqs {
        match best {
            Some((_, best_freq)) if best_freq >= freq => (),
            _ => best = Some((value, freq)),
        }
    }
    best
}

/// Measures poems and decides whether they follow a dominant meter.
#[derive(Debug, Clone, Copy)]
pub struct VerseAnalyzer {
    threshold_percent: usize,
}

impl VerseAnalyzer {
    /// Creates an analyzer considering a poem structured when at least `threshold_percent`
    /// of its lines share the modal syllable count.
    ///
    /// Fails if `threshold_percent` is above 100.
    pub fn with_threshold(threshold_percent: usize) -> Result<Self, Error> {
        if threshold_percent > 100 {
            return Err(Error::Custom(format!(
                "invalid threshold: {}% (expected 0 to 100)",
                threshold_percent
            )));
        }
        Ok(Self { threshold_percent })
    }

    /// Analyzes a text.
    ///
    /// Lines are whitespace separated. Lines without any syllable are left out of every count.
    pub fn analyze(&self, text: &str) -> VerseSummary {
        let line_counts: Vec<usize> = text
            .split_whitespace()
            .filter_map(count_syllables)
            .collect();

        let (modal_syllable_count, matching) = match modal_count(&line_counts) {
            Some(m) => m,
            None => return VerseSummary::default(),
        };

        let line_count = line_counts.len();
        // integer comparison so that the threshold itself is included
        let structured = matching * 100 >= self.threshold_percent * line_count;

        VerseSummary {
            syllable_count: line_counts.iter().sum(),
            line_count,
            structured,
            modal_syllable_count,
            line_counts,
        }
    }

    /// Analyzes every entry, in order.
    pub fn analyze_entries(&self, entries: &[Entry]) -> Vec<SyllableRecord> {
        let records: Vec<SyllableRecord> = entries
            .iter()
            .map(|entry| SyllableRecord::new(entry, &self.analyze(entry.text())))
            .collect();
        debug!(
            "{} poems analyzed, {} structured",
            records.len(),
            records.iter().filter(|r| r.structured).count()
        );
        records
    }
}

impl Default for VerseAnalyzer {
    /// 80% of lines have to share the modal count.
    fn default() -> Self {
        Self {
            threshold_percent: 80,
        }
    }
}

/// Analyzes a text with the default analyzer.
pub fn analyze(text: &str) -> VerseSummary {
    VerseAnalyzer::default().analyze(text)
}

/// Poem entry enriched with its structure.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SyllableRecord {
    pub tags: Vec<String>,
    pub text: String,
    pub syllable_count: usize,
    pub line_count: usize,
    pub structured: bool,
    pub modal_syllable_count: usize,
}

impl SyllableRecord {
    pub fn new(entry: &Entry, summary: &VerseSummary) -> Self {
        Self {
            tags: entry.tags().to_vec(),
            text: entry.text().to_string(),
            syllable_count: summary.syllable_count,
            line_count: summary.line_count,
            structured: summary.structured,
            modal_syllable_count: summary.modal_syllable_count,
        }
    }
}
