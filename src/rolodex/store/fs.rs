use super::{decode, encode, SnapshotStore};
use crate::directory::Directory;
use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_SNAPSHOT_FILE: &str = "address_book.json";

/// Snapshot stored as a JSON file at a fixed path.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Directory> {
        read_snapshot(&self.path)
    }

    fn save(&mut self, directory: &Directory) -> Result<()> {
        write_snapshot(&self.path, directory)
    }
}

/// Read the snapshot at `path`. A missing file is a fresh start; any other
/// failure is returned.
pub fn read_snapshot(path: &Path) -> Result<Directory> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "no snapshot found, starting empty");
            return Ok(Directory::new());
        }
        Err(e) => return Err(e.into()),
    };

    let directory = decode(&content)?;
    info!(path = %path.display(), contacts = directory.len(), "loaded snapshot");
    Ok(directory)
}

/// Write `directory` to `path`, replacing any previous snapshot.
///
/// The content goes to a sibling temp file first and is renamed over the
/// target, so a failed write leaves the old snapshot intact.
pub fn write_snapshot(path: &Path, directory: &Directory) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = encode(directory)?;
    let tmp = temp_path(path);
    debug!(tmp = %tmp.display(), "writing snapshot");
    if let Err(e) = fs::write(&tmp, content).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    info!(path = %path.display(), contacts = directory.len(), "saved snapshot");
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
