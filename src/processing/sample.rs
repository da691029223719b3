/*! Sampling

Takes the first entries of every bucket file of a folder, to get a quick look at a classification.
!*/
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde_json::Value;

use crate::error::Error;
use crate::io::{load_json, save_json};

/// Writes the first `sample_size` entries of each `*.json` file of `src`
/// into `dst/<name>_sample.json`, creating `dst` if needed.
///
/// Returns the paths of the written files, sorted by source name.
pub fn sample(src: &Path, dst: &Path, sample_size: usize) -> Result<Vec<PathBuf>, Error> {
    std::fs::create_dir_all(dst)?;

    let folder = src
        .to_str()
        .ok_or_else(|| Error::Custom(format!("invalid source folder: {:?}", src)))?;
    let pattern = Path::new(&glob::Pattern::escape(folder)).join("*.json");
    let pattern = pattern
        .to_str()
        .ok_or_else(|| Error::Custom(format!("invalid source folder: {:?}", src)))?;

    let mut paths = glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
    paths.sort();
    debug!("files to sample: {:#?}", paths);

    let mut written = Vec::with_capacity(paths.len());
    for path in paths {
        let entries: Vec<Value> = load_json(&path)?;
        let sampled = &entries[..sample_size.min(entries.len())];

        let stem = path
            .file_stem()
            .ok_or_else(|| Error::Custom(format!("invalid file name: {:?}", path)))?
            .to_string_lossy();
        let sample_path = dst.join(format!("{}_sample.json", stem));

        save_json(sampled, &sample_path)?;
        info!(
            "sampled {} entries from {:?} into {:?}",
            sampled.len(),
            path.file_name().unwrap_or_default(),
            sample_path
        );
        written.push(sample_path);
    }

    Ok(written)
}
