//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use crate::processing::ExportFormat;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "rtsom",
    about = "Tibetan creative writing corpus classification tool."
)]
/// Holds every command that is callable by the `rtsom` command.
pub enum Rtsom {
    #[structopt(about = "Classify a corpus into per-category files, and analyze poems")]
    Classify(Classify),
    #[structopt(about = "Analyze the syllable structure of a poem file")]
    Poems(Poems),
    #[structopt(about = "Remove every entry whose text is repeated")]
    Dedup(Dedup),
    #[structopt(about = "Report repeated texts")]
    CheckDup(CheckDup),
    #[structopt(about = "Extract the distinct tags of a corpus")]
    Tags(Tags),
    #[structopt(about = "Take the first entries of every JSON file of a folder")]
    Sample(Sample),
    #[structopt(about = "Export poem records as a dataset")]
    Export(Export),
}

#[derive(Debug, StructOpt)]
/// Classify command and parameters.
///
/// ```sh
/// rtsom-classify 0.1.0
/// Classify a corpus into per-category files, and analyze poems
///
/// USAGE:
///     rtsom classify [FLAGS] [OPTIONS] <src> <dst>
///
/// FLAGS:
///     -d, --dedup        remove entries with a repeated text before classifying
///     -x, --exclusive    put each entry in a single bucket
///         --no-poems     skip poem analysis
///
/// OPTIONS:
///     -r, --rules <rules>            JSON rule table. Defaults to the built-in table.
///     -p, --poem <poem>              poem bucket keyword [default: སྙན་ངག]
///     -t, --threshold <threshold>    share of lines (in %) with the modal count for a structured poem [default: 80]
///
/// ARGS:
///     <src>    source corpus (JSON array of {text, tags})
///     <dst>    output folder
/// ```
pub struct Classify {
    #[structopt(parse(from_os_str), help = "source corpus (JSON array of {text, tags})")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "output folder")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "r",
        long = "rules",
        help = "JSON rule table. Defaults to the built-in table."
    )]
    pub rules: Option<PathBuf>,
    #[structopt(short = "x", long = "exclusive", help = "put each entry in a single bucket")]
    pub exclusive: bool,
    #[structopt(
        short = "d",
        long = "dedup",
        help = "remove entries with a repeated text before classifying"
    )]
    pub dedup: bool,
    #[structopt(
        short = "p",
        long = "poem",
        help = "poem bucket keyword",
        default_value = "སྙན་ངག"
    )]
    pub poem: String,
    #[structopt(long = "no-poems", help = "skip poem analysis")]
    pub no_poems: bool,
    #[structopt(
        short = "t",
        long = "threshold",
        help = "share of lines (in %) with the modal count for a structured poem",
        default_value = "80"
    )]
    pub threshold: usize,
}

#[derive(Debug, StructOpt)]
pub struct Poems {
    #[structopt(parse(from_os_str), help = "poem bucket file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination of poem records")]
    pub dst: PathBuf,
    #[structopt(
        short = "t",
        long = "threshold",
        help = "share of lines (in %) with the modal count for a structured poem",
        default_value = "80"
    )]
    pub threshold: usize,
}

#[derive(Debug, StructOpt)]
/// Dedup command and parameters.
pub struct Dedup {
    #[structopt(parse(from_os_str), help = "source corpus location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination corpus location")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct CheckDup {
    #[structopt(parse(from_os_str), help = "source corpus location")]
    pub src: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Tags {
    #[structopt(parse(from_os_str), help = "source corpus location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination of the tag list")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Sample {
    #[structopt(parse(from_os_str), help = "folder holding JSON files")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder of samples")]
    pub dst: PathBuf,
    #[structopt(
        short = "n",
        long = "size",
        help = "number of entries kept per file",
        default_value = "10"
    )]
    pub size: usize,
}

#[derive(Debug, StructOpt)]
pub struct Export {
    #[structopt(parse(from_os_str), help = "poem records file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(
        short = "f",
        long = "format",
        help = "jsonl or csv",
        default_value = "jsonl"
    )]
    pub format: ExportFormat,
    #[structopt(
        short = "n",
        long = "name",
        help = "dataset name",
        default_value = "tibetan-poems"
    )]
    pub name: String,
}
