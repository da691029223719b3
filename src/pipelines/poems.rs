//! Poem structure pipeline.
//!
//! Reads a poem bucket file, analyzes every poem and writes the resulting [SyllableRecord]s.
use std::path::PathBuf;

use log::info;

use crate::error::Error;
use crate::io::{load_corpus, save_json};
use crate::pipelines::pipeline::Pipeline;
use crate::verse::{SyllableRecord, VerseAnalyzer};

pub struct PoemStructure {
    src: PathBuf,
    dst: PathBuf,
    analyzer: VerseAnalyzer,
}

impl PoemStructure {
    pub fn new(src: PathBuf, dst: PathBuf, analyzer: VerseAnalyzer) -> Self {
        Self { src, dst, analyzer }
    }
}

impl Pipeline<Vec<SyllableRecord>> for PoemStructure {
    fn run(&self) -> Result<Vec<SyllableRecord>, Error> {
        let poems = load_corpus(&self.src)?;
        let records = self.analyzer.analyze_entries(&poems);
        save_json(&records, &self.dst)?;
        info!("{} poem records written to {:?}", records.len(), self.dst);
        Ok(records)
    }
}
