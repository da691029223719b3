//! Pipelines.
//!
//! A pipeline takes every path and parameter it needs at construction time,
//! and does all its work in [pipeline::Pipeline::run].
pub mod creative;
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod poems;

pub use creative::CreativeWriting;
pub use pipeline::Pipeline;
pub use poems::PoemStructure;
