use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, info};

use crate::{
    config::Config,
    metadata::{parse_document, MetaValue, Metadata},
    output,
    source::{DocumentSource, FsSource},
};

mod record;
mod utils;

pub use record::IndexRecord;

use utils::{slug, title_from_slug, word_count};

fn text_field(metadata: &Metadata, key: &str) -> Option<String> {
    metadata.get(key).map(MetaValue::to_text)
}

fn list_field(metadata: &Metadata, key: &str) -> Option<Vec<String>> {
    metadata.get(key).map(|value| match value {
        MetaValue::List(items) => items.clone(),
        MetaValue::Text(s) if s.is_empty() => vec![],
        MetaValue::Text(s) => vec![s.clone()],
    })
}

/// Landing pages are navigation unless they carry both a title and a category.
fn is_indexable_landing_page(metadata: &Metadata) -> bool {
    let has_title = metadata.get("title").is_some_and(|t| !t.is_empty());
    has_title && metadata.contains_key("category")
}

/// Builds the record for one document, or `None` when it does not belong in the index.
pub fn index_document(path: &Path, content: &str, config: &Config) -> Option<IndexRecord> {
    let (metadata, body) = parse_document(content);

    let is_landing_page = path
        .file_name()
        .is_some_and(|name| config.is_landing_page(&name.to_string_lossy()));
    if is_landing_page && !is_indexable_landing_page(&metadata) {
        debug!("skipping landing page {path:?}: no title or category");
        return None;
    }

    let id = slug(path, &config.extension);
    let title = text_field(&metadata, "title").unwrap_or_else(|| title_from_slug(&id));
    if title.is_empty() {
        debug!("skipping {path:?}: empty title");
        return None;
    }

    Some(IndexRecord {
        title,
        date: text_field(&metadata, "date").unwrap_or_default(),
        summary: text_field(&metadata, "summary").unwrap_or_default(),
        category: list_field(&metadata, "category")
            .unwrap_or_else(|| vec![config.default_category.clone()]),
        tags: list_field(&metadata, "tags").unwrap_or_default(),
        word_count: word_count(&body),
        id,
    })
}

/// Indexes every document of `source`, ordered by relative path.
///
/// Any discovery or read error aborts the whole build.
pub fn build_index(source: &dyn DocumentSource, config: &Config) -> anyhow::Result<Vec<IndexRecord>> {
    let mut paths = source
        .discover(&config.extension)
        .collect::<anyhow::Result<Vec<PathBuf>>>()?;
    paths.sort_by_cached_key(|path| slug(path, ""));

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        let content = source
            .read(&path)
            .with_context(|| format!("while indexing {path:?}"))?;
        if let Some(record) = index_document(&path, &content, config) {
            debug!("indexed {:?} ({} words)", record.id, record.word_count);
            records.push(record);
        }
    }

    Ok(records)
}

/// Scans `config.doc_dir` and writes the index to `config.output`.
/// Returns the number of indexed documents.
pub fn generate(config: &Config) -> anyhow::Result<usize> {
    let source = FsSource::open(&config.doc_dir)?;
    info!("scanning {:?}", source.root());

    let records = build_index(&source, config)?;
    output::save_index(&config.output, &records)
        .with_context(|| format!("while writing {:?}", config.output))?;
    info!("wrote {} records to {:?}", records.len(), config.output);

    Ok(records.len())
}
