/*! Dataset export

Converts analysed poems into flat, dataset friendly files, then writes a `sha384sum -c` compatible
checksum file next to them.

- JSON Lines: one record per line.
- CSV: tags are joined with `|`.
!*/
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, info};
use serde::Serialize;
use sha2::{Digest, Sha384};

use crate::error::Error;
use crate::io::load_json;
use crate::verse::SyllableRecord;

/// Export file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    JsonLines,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::JsonLines => "jsonl",
            ExportFormat::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jsonl" | "jsonlines" => Ok(ExportFormat::JsonLines),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(Error::Custom(format!("unsupported format: {}", other))),
        }
    }
}

/// Flat version of [SyllableRecord] for CSV.
#[derive(Serialize)]
struct CsvRecord<'a> {
    tags: String,
    text: &'a str,
    syllable_count: usize,
    line_count: usize,
    structured: bool,
    modal_syllable_count: usize,
}

impl<'a> From<&'a SyllableRecord> for CsvRecord<'a> {
    fn from(r: &'a SyllableRecord) -> Self {
        Self {
            tags: r.tags.join("|"),
            text: &r.text,
            syllable_count: r.syllable_count,
            line_count: r.line_count,
            structured: r.structured,
            modal_syllable_count: r.modal_syllable_count,
        }
    }
}

fn write_jsonl(records: &[SyllableRecord], dst: &Path) -> Result<(), Error> {
    let mut bw = BufWriter::new(File::create(dst)?);
    for record in records {
        serde_json::to_writer(&mut bw, record)?;
        bw.write_all(b"\n")?;
    }
    bw.flush()?;
    Ok(())
}

fn write_csv(records: &[SyllableRecord], dst: &Path) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_path(dst)?;
    for record in records {
        wtr.serialize(CsvRecord::from(record))?;
    }
    wtr.flush()?;
    Ok(())
}

/// compute the hash of the file pointed by the filepath by using [io::copy] between a file handler and the hasher.
fn get_hash(filepath: &Path) -> Result<String, Error> {
    let mut hasher = Sha384::new();
    let mut f = File::open(filepath)?;
    io::copy(&mut f, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

/// Writes `<file>`'s hash into `checksum_path`, in `sha384sum -c` format.
fn write_checksum(file: &Path, checksum_path: &Path) -> Result<(), Error> {
    let hash = get_hash(file)?;
    let filename = file
        .file_name()
        .ok_or_else(|| Error::Custom(format!("invalid file name: {:?}", file)))?
        .to_string_lossy();
    debug!("writing hash of {:?} to {:?}", file, checksum_path);
    let mut checksum_file = File::create(checksum_path)?;
    writeln!(&mut checksum_file, "{}  {}", hash, filename)?;
    Ok(())
}

/// Writes `records` to `dst/<name>.<ext>` and its checksum to `dst/<name>_sha384.txt`.
///
/// Returns the path of the dataset file.
pub fn export_records(
    records: &[SyllableRecord],
    dst: &Path,
    name: &str,
    format: ExportFormat,
) -> Result<PathBuf, Error> {
    std::fs::create_dir_all(dst)?;
    let data_path = dst.join(format!("{}.{}", name, format.extension()));

    match format {
        ExportFormat::JsonLines => write_jsonl(records, &data_path)?,
        ExportFormat::Csv => write_csv(records, &data_path)?,
    }

    write_checksum(&data_path, &dst.join(format!("{}_sha384.txt", name)))?;
    info!("exported {} records to {:?}", records.len(), data_path);
    Ok(data_path)
}

/// Loads syllable records from `src` and exports them.
pub fn export(src: &Path, dst: &Path, name: &str, format: ExportFormat) -> Result<PathBuf, Error> {
    let records: Vec<SyllableRecord> = load_json(src)?;
    export_records(&records, dst, name, format)
}
