//! # rtsom
//!
//! ```sh
//! rtsom 0.1.0
//! Tibetan creative writing corpus classification tool.
//!
//! USAGE:
//!     rtsom <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     check-dup    Report repeated texts
//!     classify     Classify a corpus into per-category files, and analyze poems
//!     dedup        Remove every entry whose text is repeated
//!     export       Export poem records as a dataset
//!     help         Prints this message or the help of the given subcommand(s)
//!     poems        Analyze the syllable structure of a poem file
//!     sample       Take the first entries of every JSON file of a folder
//!     tags         Extract the distinct tags of a corpus
//! ```
use structopt::StructOpt;

use rtsom::classify::{Assignment, Classifier, KeywordRule, DEFAULT_RULES};
use rtsom::cli::{self, Rtsom};
use rtsom::error::Error;
use rtsom::pipelines::{CreativeWriting, Pipeline, PoemStructure};
use rtsom::processing;
use rtsom::verse::VerseAnalyzer;

#[macro_use]
extern crate log;

fn classify(c: cli::Classify) -> Result<(), Error> {
    let analyzer = VerseAnalyzer::with_threshold(c.threshold)?;
    let rules = match &c.rules {
        Some(path) => KeywordRule::from_path(path)?,
        None => DEFAULT_RULES.clone(),
    };
    let assignment = if c.exclusive {
        Assignment::Exclusive
    } else {
        Assignment::Shared
    };

    let mut p = CreativeWriting::new(c.src, c.dst, Classifier::new(rules, assignment))
        .with_dedup(c.dedup);
    if !c.no_poems {
        p = p.with_poems(c.poem, analyzer);
    }

    let report = p.run()?;
    debug!("{:#?}", report);
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = Rtsom::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        Rtsom::Classify(c) => classify(c)?,
        Rtsom::Poems(p) => {
            let p = PoemStructure::new(p.src, p.dst, VerseAnalyzer::with_threshold(p.threshold)?);
            p.run()?;
        }
        Rtsom::Dedup(d) => processing::dedup(&d.src, &d.dst)?,
        Rtsom::CheckDup(c) => {
            let dups = processing::check_duplicates(&c.src)?;
            info!("{} repeated texts", dups.len());
        }
        Rtsom::Tags(t) => {
            processing::extract_tags(&t.src, &t.dst)?;
        }
        Rtsom::Sample(s) => {
            processing::sample(&s.src, &s.dst, s.size)?;
        }
        Rtsom::Export(e) => {
            processing::export(&e.src, &e.dst, &e.name, e.format)?;
        }
    };
    Ok(())
}
