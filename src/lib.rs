//! Builds a JSON search index from a tree of markdown documents.

pub mod config;
pub mod indexer;
pub mod metadata;
pub mod output;
pub mod source;

pub use config::Config;
pub use indexer::{build_index, generate, IndexRecord};
