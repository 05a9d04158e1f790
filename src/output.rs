use std::{
    fs::{File, Permissions},
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::anyhow;
use log::debug;
use tempfile::NamedTempFile;

use crate::indexer::IndexRecord;

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

/// Mode for the new index: the previous index's, or world-readable for a first run.
fn index_permissions(index_file_path: &Path) -> Option<Permissions> {
    match std::fs::metadata(index_file_path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    }
}

pub fn load_index(index_file_path: &Path) -> anyhow::Result<Vec<IndexRecord>> {
    let fd = File::open(index_file_path)?;
    let reader = BufReader::new(fd);
    serde_json::from_reader(reader).map_err(|e| anyhow!(e))
}

/// Replaces `index_file_path` with the pretty-printed records.
///
/// The data goes to a temporary file next to the destination first, so a
/// reader sees either the old index or the complete new one.
pub fn save_index(index_file_path: &Path, records: &[IndexRecord]) -> anyhow::Result<()> {
    let dir = match index_file_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)?;
    debug!("staging index in {:?}", tmp.path());
    {
        let mut writer = BufWriter::new(tmp.as_file());
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.flush()?;
    }
    if let Some(permissions) = index_permissions(index_file_path) {
        tmp.as_file().set_permissions(permissions)?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(index_file_path)?;

    Ok(())
}
