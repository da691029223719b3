/*! Corpus processing

Tools operating on whole corpus files, used before and after classification:
deduplication, tag inventory, sampling of bucket files and dataset export.
!*/
pub mod dedup;
pub mod export;
pub mod sample;
pub mod tags;

pub use dedup::{check_duplicates, dedup};
pub use export::{export, ExportFormat};
pub use sample::sample;
pub use tags::extract_tags;
