/*! Verse analysis.

Tibetan syllables are separated by the tsheg (`་`), and clauses end with a shad (`།`) or one of its variants.
A poem is split into lines on whitespace, and each line is measured in syllables.

A poem is considered *structured* when at least 80% of its lines share the same syllable count,
that is when it follows a single dominant meter.
!*/
mod analyzer;
mod syllable;

pub use analyzer::{analyze, SyllableRecord, VerseAnalyzer, VerseSummary};
pub use syllable::{count_syllables, is_delimiter, is_syllable_separator, syllables};
