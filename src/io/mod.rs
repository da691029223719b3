/*!
# IO utilities

Loading and saving of JSON files.

Files are JSON arrays, written with a 4 space indentation and without escaping non-ASCII characters,
so that Tibetan text stays readable.
!*/
pub mod reader;
pub mod writer;

pub use reader::{load_corpus, load_json};
pub use writer::save_json;
