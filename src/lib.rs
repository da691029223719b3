/*! # rtsom

Classification, deduplication and verse analysis of a Tibetan creative writing corpus.

A corpus is a JSON array of entries holding a `text` and a list of `tags`.
Entries are sorted into per-category files following a keyword rule table (see [classify]),
and poems get their syllable structure analyzed (see [verse]).

This project can be used both as a command line tool or as a lib.
!*/
pub mod classify;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod io;
pub mod pipelines;
pub mod processing;
pub mod verse;
