//! Tag inventory.
use std::path::Path;

use itertools::Itertools;
use log::info;

use crate::corpus::Entry;
use crate::error::Error;
use crate::io::{load_corpus, save_json};

/// Distinct tags of entries having a non blank text, sorted.
pub fn unique_tags(corpus: &[Entry]) -> Vec<String> {
    corpus
        .iter()
        .filter(|e| e.is_eligible())
        .flat_map(|e| e.tags().iter())
        .unique()
        .sorted()
        .cloned()
        .collect()
}

/// Writes the distinct tags of the corpus at `src` to `dst`.
pub fn extract_tags(src: &Path, dst: &Path) -> Result<Vec<String>, Error> {
    let corpus = load_corpus(src)?;
    let tags = unique_tags(&corpus);
    info!("unique strings in tags: {}", tags.len());
    save_json(&tags, dst)?;
    Ok(tags)
}
