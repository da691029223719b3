/*! Corpus types.

A corpus is an ordered list of [Entry], each one holding a text and its category tags.
!*/
mod entry;

pub use entry::Entry;
