//! Creative writing classification pipeline
//!
//! # Processing
//! 1. The corpus is loaded, and optionally deduplicated (see [crate::processing::dedup]).
//! 1. Entries are classified into buckets following the rule table.
//! 1. Each non empty bucket is written to `<dst>/<primary keyword>.json`,
//!    remaining entries to `<dst>/unclassified.json`.
//! 1. If a poem bucket is set, its entries are analyzed and written to `<dst>/<poem keyword>_structured.json`.
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::classify::{Classification, Classifier};
use crate::error::Error;
use crate::io::{load_corpus, save_json};
use crate::pipelines::pipeline::Pipeline;
use crate::processing::dedup::dedup_entries;
use crate::verse::VerseAnalyzer;

const UNCLASSIFIED: &str = "unclassified";

/// Files written by a [CreativeWriting] run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub buckets: Vec<PathBuf>,
    pub unclassified: Option<PathBuf>,
    pub poems: Option<PathBuf>,
}

pub struct CreativeWriting {
    src: PathBuf,
    dst: PathBuf,
    classifier: Classifier,
    dedup: bool,
    poem_keyword: Option<String>,
    analyzer: VerseAnalyzer,
}

impl CreativeWriting {
    pub fn new(src: PathBuf, dst: PathBuf, classifier: Classifier) -> Self {
        Self {
            src,
            dst,
            classifier,
            dedup: false,
            poem_keyword: None,
            analyzer: VerseAnalyzer::default(),
        }
    }

    /// Remove entries with a repeated text before classifying.
    pub fn with_dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }

    /// Analyze the bucket named `keyword` as poems.
    pub fn with_poems(mut self, keyword: String, analyzer: VerseAnalyzer) -> Self {
        self.poem_keyword = Some(keyword);
        self.analyzer = analyzer;
        self
    }

    /// Checks that every bucket name can be used as a file name, and warns on duplicate names.
    fn check_rules(&self) -> Result<(), Error> {
        let mut seen = HashSet::new();
        for rule in self.classifier.rules() {
            rule.validate()?;
            let keyword = rule.primary_keyword();
            if keyword.contains(['/', '\\']) || keyword == UNCLASSIFIED {
                return Err(Error::Custom(format!(
                    "invalid primary keyword for a bucket name: {:?}",
                    keyword
                )));
            }
            if !seen.insert(keyword) {
                warn!("[{}] several rules share this primary keyword, their files will overwrite each other", keyword);
            }
        }
        Ok(())
    }

    /// Writes buckets and unclassified entries.
    fn write_classification(
        dst: &Path,
        classification: &Classification,
        report: &mut Report,
    ) -> Result<(), Error> {
        for bucket in classification.buckets() {
            if bucket.is_empty() {
                debug!("[{}] empty bucket, skipping", bucket.keyword());
                continue;
            }
            let path = dst.join(format!("{}.json", bucket.keyword()));
            save_json(bucket.entries(), &path)?;
            info!("[{}] {} entries", bucket.keyword(), bucket.len());
            report.buckets.push(path);
        }

        if !classification.unclassified().is_empty() {
            let path = dst.join(format!("{}.json", UNCLASSIFIED));
            save_json(classification.unclassified(), &path)?;
            info!(
                "[{}] {} entries",
                UNCLASSIFIED,
                classification.unclassified().len()
            );
            report.unclassified = Some(path);
        }
        Ok(())
    }
}

impl Pipeline<Report> for CreativeWriting {
    fn run(&self) -> Result<Report, Error> {
        self.check_rules()?;
        std::fs::create_dir_all(&self.dst)?;

        let mut corpus = load_corpus(&self.src)?;
        info!("{:?}: {} entries", self.src, corpus.len());
        if self.dedup {
            corpus = dedup_entries(corpus);
            info!("{} entries after deduplication", corpus.len());
        }

        let classification = self.classifier.classify(&corpus);
        let mut report = Report::default();
        Self::write_classification(&self.dst, &classification, &mut report)?;

        if let Some(keyword) = &self.poem_keyword {
            match classification.bucket(keyword) {
                Some(bucket) => {
                    let records = self.analyzer.analyze_entries(bucket.entries());
                    let path = self.dst.join(format!("{}_structured.json", keyword));
                    save_json(&records, &path)?;
                    info!(
                        "[{}] {} poems analyzed, {} structured",
                        keyword,
                        records.len(),
                        records.iter().filter(|r| r.structured).count()
                    );
                    report.poems = Some(path);
                }
                None => warn!("[{}] no rule defines the poem bucket", keyword),
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use crate::classify::{Assignment, KeywordRule};
    use crate::corpus::Entry;
    use crate::io::load_json;
    use crate::verse::SyllableRecord;

    use super::*;

    fn entry(text: &str, tags: &[&str]) -> Entry {
        Entry::new(
            text.to_string(),
            tags.iter().map(|t| t.to_string()).collect(),
        )
    }

    fn classifier() -> Classifier {
        Classifier::new(
            vec![
                KeywordRule::new("རྩོམ་ཡིག"),
                KeywordRule::new("སྙན་ངག").with_priority("སྙན་ངག"),
                KeywordRule::new("གསར་འགྱུར།").with_additional(&["news"]),
            ],
            Assignment::Shared,
        )
    }

    #[test]
    fn run() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("corpus.json");
        let dst = dir.path().join("out");
        let corpus = vec![
            entry("ཀ་ཁ། ག་ང།", &["རྩོམ་ཡིག་", "སྙན་ངག་"]),
            entry("ཅ་ཆ་ཇ།", &["རྩོམ་ཡིག་"]),
            entry("other", &["misc"]),
        ];
        save_json(&corpus, &src).unwrap();

        let p = CreativeWriting::new(src, dst.clone(), classifier())
            .with_poems("སྙན་ངག".to_string(), VerseAnalyzer::default());
        let report = p.run().unwrap();

        assert_eq!(
            report.buckets,
            vec![dst.join("རྩོམ་ཡིག.json"), dst.join("སྙན་ངག.json")]
        );
        assert!(!dst.join("གསར་འགྱུར།.json").exists());
        assert_eq!(report.unclassified, Some(dst.join("unclassified.json")));

        let writing: Vec<Entry> = load_json(&dst.join("རྩོམ་ཡིག.json")).unwrap();
        assert_eq!(writing, corpus[..2]);
        let rest: Vec<Entry> = load_json(&dst.join("unclassified.json")).unwrap();
        assert_eq!(rest, corpus[2..]);

        let poems: Vec<SyllableRecord> =
            load_json(report.poems.as_ref().unwrap()).unwrap();
        assert_eq!(poems.len(), 1);
        assert_eq!(poems[0].syllable_count, 4);
        assert!(poems[0].structured);
    }

    #[test]
    fn dedup_before_classifying() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("corpus.json");
        let corpus = vec![
            entry("same", &["རྩོམ་ཡིག"]),
            entry("same", &["news"]),
        ];
        save_json(&corpus, &src).unwrap();

        let report = CreativeWriting::new(src, dir.path().to_path_buf(), classifier())
            .with_dedup(true)
            .run()
            .unwrap();
        assert_eq!(report, Report::default());
    }

    #[test]
    fn invalid_bucket_name() {
        let dir = tempfile::tempdir().unwrap();
        let classifier = Classifier::new(vec![KeywordRule::new("a/b")], Assignment::Shared);
        let p = CreativeWriting::new(dir.path().join("nope.json"), dir.path().to_path_buf(), classifier);
        assert!(matches!(p.run(), Err(Error::Custom(_))));
    }

    #[test]
    fn empty_additional_keyword() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("corpus.json");
        save_json(&vec![entry("ཀ་ཁ།", &["anything"])], &src).unwrap();

        let classifier = Classifier::new(
            vec![KeywordRule::new("x").with_additional(&[""])],
            Assignment::Shared,
        );
        let p = CreativeWriting::new(src, dir.path().join("out"), classifier);
        assert!(matches!(p.run(), Err(Error::Custom(_))));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn idempotent_files() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("corpus.json");
        let corpus = vec![entry("ཀ་ཁ།", &["སྙན་ངག"]), entry("x", &["news"])];
        save_json(&corpus, &src).unwrap();

        let p = CreativeWriting::new(src, dir.path().join("out"), classifier());
        let first = p.run().unwrap();
        let contents: Vec<String> = first
            .buckets
            .iter()
            .map(|f| std::fs::read_to_string(f).unwrap())
            .collect();
        let second = p.run().unwrap();
        let contents_again: Vec<String> = second
            .buckets
            .iter()
            .map(|f| std::fs::read_to_string(f).unwrap())
            .collect();
        assert_eq!(first, second);
        assert_eq!(contents, contents_again);
    }
}
