/*! Keyword classification.

Entries are sorted into buckets by matching their tags against an ordered table of [KeywordRule].
A tag matches a keyword when it *contains* it, so `"foo-bar"` matches `"bar"`.

Rules can hold a priority keyword, letting a narrow category (poems, for example) claim
entries that a broader category (general writing) would also match.
See [Assignment] for how entries matching more than one rule are handled.

Entries that end up in no bucket are kept in [Classification::unclassified].
!*/
mod classifier;
mod rule;

pub use classifier::{Assignment, Bucket, Classification, Classifier};
pub use rule::{KeywordRule, DEFAULT_RULES};
