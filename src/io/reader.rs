//! JSON file loading.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use crate::corpus::Entry;
use crate::error::Error;

/// Loads any deserializable value from a JSON file.
pub fn load_json<T>(src: &Path) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    debug!("loading {:?}", src);
    let f = File::open(src)?;
    let br = BufReader::new(f);
    Ok(serde_json::from_reader(br)?)
}

/// Loads a corpus: a JSON array of `{"text": .., "tags": [..]}` objects.
pub fn load_corpus(src: &Path) -> Result<Vec<Entry>, Error> {
    let corpus: Vec<Entry> = load_json(src)?;
    debug!("{:?}: {} entries", src, corpus.len());
    Ok(corpus)
}
