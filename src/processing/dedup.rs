/*! Deduplication

Exact text deduplication: a text that appears more than once in the corpus is considered unreliable
and *every* entry holding it is removed, not only the extra copies.
!*/
use std::collections::HashMap;
use std::path::Path;

use log::{info, warn};

use crate::corpus::Entry;
use crate::error::Error;
use crate::io::{load_corpus, save_json};

/// Number of occurrences of each text.
fn text_counts(corpus: &[Entry]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for entry in corpus {
        *counts.entry(entry.text()).or_insert(0) += 1;
    }
    counts
}

/// Keeps entries whose text is unique in the corpus, preserving order.
pub fn dedup_entries(corpus: Vec<Entry>) -> Vec<Entry> {
    let uniques: Vec<bool> = {
        let counts = text_counts(&corpus);
        corpus.iter().map(|e| counts[e.text()] == 1).collect()
    };
    corpus
        .into_iter()
        .zip(uniques)
        .filter_map(|(entry, unique)| unique.then_some(entry))
        .collect()
}

/// Texts present more than once along with their number of occurrences,
/// in order of first appearance.
pub fn duplicates(corpus: &[Entry]) -> Vec<(String, usize)> {
    let counts = text_counts(corpus);
    let mut seen = std::collections::HashSet::new();
    corpus
        .iter()
        .map(Entry::text)
        .filter(|text| counts[text] > 1 && seen.insert(*text))
        .map(|text| (text.to_string(), counts[text]))
        .collect()
}

/// Deduplicates the corpus at `src` and writes it to `dst`.
pub fn dedup(src: &Path, dst: &Path) -> Result<(), Error> {
    let corpus = load_corpus(src)?;
    let nb_entries = corpus.len();
    info!("starting deduplication of {} entries", nb_entries);
    let deduped = dedup_entries(corpus);
    info!(
        "deduplication done: {} entries kept, {} removed",
        deduped.len(),
        nb_entries - deduped.len()
    );
    save_json(&deduped, dst)
}

/// Reports duplicate texts of the corpus at `src`.
pub fn check_duplicates(src: &Path) -> Result<Vec<(String, usize)>, Error> {
    let corpus = load_corpus(src)?;
    let dups = duplicates(&corpus);
    if dups.is_empty() {
        info!("no duplicate texts found");
    }
    for (text, count) in &dups {
        warn!("duplicate text ({} times): {}", count, text);
    }
    Ok(dups)
}
