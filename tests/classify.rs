use std::path::Path;

use rtsom::classify::{Assignment, Classifier, KeywordRule};
use rtsom::corpus::Entry;
use rtsom::io::{load_corpus, load_json, save_json};
use rtsom::pipelines::{CreativeWriting, Pipeline};
use rtsom::processing::{self, ExportFormat};
use rtsom::verse::{SyllableRecord, VerseAnalyzer};

fn entry(text: &str, tags: &[&str]) -> Entry {
    Entry::new(
        text.to_string(),
        tags.iter().map(|t| t.to_string()).collect(),
    )
}

fn corpus() -> Vec<Entry> {
    vec![
        entry(
            "ཀ་ཁ་ག་ངས། ཅ་ཆ་ཇ་ཉས། ཏ་ཐ་ད་ན། པ་ཕ་བ་མ།",
            &["རྩོམ་ཡིག་", "སྙན་ངག་"],
        ),
        entry("ཀ་ཁ། ཀ་ཁ་ག་ང་ཅ། ཀ།", &["སྙན་ངག"]),
        entry("ཙ་ཚ་ཛ་ཝ།", &["རྩོམ་ཡིག་"]),
        entry("ཞ་ཟ་འ་ཡ།", &["daily news"]),
        entry("ཞ་ཟ་འ་ཡ།", &["Breaking News"]),
        entry("  ", &["སྙན་ངག"]),
        entry("ར་ལ་ཤ་ས།", &["misc"]),
    ]
}

fn rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new("རྩོམ་ཡིག"),
        KeywordRule::new("གསར་འགྱུར།").with_additional(&["news", "News"]),
        KeywordRule::new("སྙན་ངག")
            .with_additional(&["ཚིགས་བཅད"])
            .with_priority("སྙན་ངག"),
    ]
}

fn write_corpus(dir: &Path, corpus: &[Entry]) -> std::path::PathBuf {
    let src = dir.join("creative_writing.json");
    save_json(corpus, &src).unwrap();
    src
}

#[test_log::test]
fn classify_and_analyze() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_corpus(dir.path(), &corpus());
    let dst = dir.path().join("output");

    let report = CreativeWriting::new(
        src,
        dst.clone(),
        Classifier::new(rules(), Assignment::Shared),
    )
    .with_poems("སྙན་ངག".to_string(), VerseAnalyzer::default())
    .run()
    .unwrap();

    assert_eq!(report.buckets.len(), 3);

    let poems: Vec<Entry> = load_corpus(&dst.join("སྙན་ངག.json")).unwrap();
    assert_eq!(poems, corpus()[..2]);

    let news: Vec<Entry> = load_corpus(&dst.join("གསར་འགྱུར།.json")).unwrap();
    assert_eq!(news, corpus()[3..5]);

    // the blank entry and the untagged one
    let rest: Vec<Entry> = load_corpus(&dst.join("unclassified.json")).unwrap();
    assert_eq!(rest, corpus()[5..]);

    let records: Vec<SyllableRecord> =
        load_json(&dst.join("སྙན་ངག_structured.json")).unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].syllable_count, 16);
    assert_eq!(records[0].line_count, 4);
    assert_eq!(records[0].modal_syllable_count, 4);
    assert!(records[0].structured);

    assert_eq!(records[1].syllable_count, 8);
    assert_eq!(records[1].line_count, 3);
    assert!(!records[1].structured);
}

#[test_log::test]
fn exclusive_assignment() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_corpus(dir.path(), &corpus());
    let dst = dir.path().join("output");

    CreativeWriting::new(
        src,
        dst.clone(),
        Classifier::new(rules(), Assignment::Exclusive),
    )
    .run()
    .unwrap();

    // the poem tagged as general writing too is claimed by the poem bucket
    let writing: Vec<Entry> = load_corpus(&dst.join("རྩོམ་ཡིག.json")).unwrap();
    assert_eq!(writing, corpus()[2..3]);
    let poems: Vec<Entry> = load_corpus(&dst.join("སྙན་ངག.json")).unwrap();
    assert_eq!(poems, corpus()[..2]);
    assert!(!dst.join("སྙན་ངག_structured.json").exists());
}

#[test_log::test]
fn empty_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_corpus(dir.path(), &[]);
    let dst = dir.path().join("output");

    let report = CreativeWriting::new(
        src,
        dst.clone(),
        Classifier::new(rules(), Assignment::Shared),
    )
    .with_poems("སྙན་ངག".to_string(), VerseAnalyzer::default())
    .run()
    .unwrap();

    assert!(report.buckets.is_empty());
    assert!(report.unclassified.is_none());
    let records: Vec<SyllableRecord> = load_json(report.poems.as_ref().unwrap()).unwrap();
    assert!(records.is_empty());
}

#[test_log::test]
fn dedup_then_export() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_corpus(dir.path(), &corpus());
    let deduped = dir.path().join("deduplicate_creative_writing.json");
    let dst = dir.path().join("output");

    processing::dedup(&src, &deduped).unwrap();
    assert_eq!(load_corpus(&deduped).unwrap().len(), corpus().len() - 2);

    let report = CreativeWriting::new(
        deduped,
        dst.clone(),
        Classifier::new(rules(), Assignment::Shared),
    )
    .with_poems("སྙན་ངག".to_string(), VerseAnalyzer::default())
    .run()
    .unwrap();
    assert!(!dst.join("གསར་འགྱུར།.json").exists());

    let samples = dir.path().join("samples");
    let written = processing::sample(&dst, &samples, 1).unwrap();
    assert_eq!(written.len(), 4);
    let sampled: Vec<Entry> = load_corpus(&samples.join("སྙན་ངག_sample.json")).unwrap();
    assert_eq!(sampled.len(), 1);

    let export_dir = dir.path().join("hf_dataset");
    let path = processing::export(
        report.poems.as_ref().unwrap(),
        &export_dir,
        "tibetan-poems",
        ExportFormat::Csv,
    )
    .unwrap();
    assert!(path.exists());
    assert!(export_dir.join("tibetan-poems_sha384.txt").exists());

    let tags = processing::extract_tags(&src, &dir.path().join("tags.json")).unwrap();
    assert!(tags.contains(&"misc".to_string()));
    assert!(tags.windows(2).all(|w| w[0] <= w[1]));
}
