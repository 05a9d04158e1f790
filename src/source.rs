//! Document discovery.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use walkdir::WalkDir;

/// Where documents come from.
///
/// Paths handed out by [`DocumentSource::discover`] are relative to the
/// source root and are the keys accepted by [`DocumentSource::read`].
pub trait DocumentSource {
    /// Lazily lists every document path. Order is not significant.
    fn discover<'a>(
        &'a self,
        extension: &'a str,
    ) -> Box<dyn Iterator<Item = anyhow::Result<PathBuf>> + 'a>;

    fn read(&self, path: &Path) -> anyhow::Result<String>;
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(extension))
        .unwrap_or(false)
}

/// Documents stored below a directory on disk.
#[derive(Debug)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn open(root: &Path) -> anyhow::Result<Self> {
        if !root.exists() || !root.is_dir() {
            bail!("document root {:?} must be a directory.", root);
        }
        Ok(Self {
            root: root.to_owned(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocumentSource for FsSource {
    fn discover<'a>(
        &'a self,
        extension: &'a str,
    ) -> Box<dyn Iterator<Item = anyhow::Result<PathBuf>> + 'a> {
        let walker = WalkDir::new(&self.root).sort_by_file_name().into_iter();
        Box::new(walker.filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    return Some(
                        Err::<PathBuf, _>(e)
                            .with_context(|| format!("while scanning {:?}", self.root)),
                    )
                }
            };
            // follows symlinks to files; symlinked directories are not descended into
            if !entry.path().is_file() || !has_extension(entry.path(), extension) {
                return None;
            }
            Some(
                entry
                    .path()
                    .strip_prefix(&self.root)
                    .map(Path::to_path_buf)
                    .with_context(|| format!("{:?} is outside of {:?}", entry.path(), self.root)),
            )
        }))
    }

    fn read(&self, path: &Path) -> anyhow::Result<String> {
        let full_path = self.root.join(path);
        std::fs::read_to_string(&full_path).with_context(|| format!("while reading {full_path:?}"))
    }
}

/// Documents held in memory, keyed by relative path.
#[derive(Debug, Default)]
pub struct MemorySource {
    documents: BTreeMap<PathBuf, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.documents.insert(path.into(), content.into());
    }

    pub fn with(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }
}

impl DocumentSource for MemorySource {
    fn discover<'a>(
        &'a self,
        extension: &'a str,
    ) -> Box<dyn Iterator<Item = anyhow::Result<PathBuf>> + 'a> {
        Box::new(
            self.documents
                .keys()
                .filter(move |path| has_extension(path, extension))
                .cloned()
                .map(Ok),
        )
    }

    fn read(&self, path: &Path) -> anyhow::Result<String> {
        match self.documents.get(path) {
            Some(content) => Ok(content.clone()),
            None => bail!("no such document: {:?}", path),
        }
    }
}
