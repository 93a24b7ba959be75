//! # Storage Layer
//!
//! A [`Directory`] lives in memory while the program runs and is written out
//! as a single snapshot between runs. The [`SnapshotStore`] trait abstracts
//! where that snapshot goes:
//!
//! - [`fs::FileStore`]: a JSON file on disk (production)
//! - [`memory::InMemoryStore`]: a string held in memory (testing)
//!
//! ## Snapshot Format
//!
//! ```text
//! {
//!   "version": 1,
//!   "contacts": [
//!     { "name": "John", "phones": ["1234567890"], "birthday": "1990-05-15" },
//!     { "name": "Jane", "phones": [], "birthday": null }
//!   ]
//! }
//! ```
//!
//! Contacts are written in directory order, so pagination order survives a
//! round trip. Every phone and birthday is re-validated on load. A snapshot
//! with a `version` this build does not know is rejected rather than guessed at.

use crate::directory::Directory;
use crate::error::{RolodexError, Result};
use crate::model::Record;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

pub const SNAPSHOT_VERSION: u32 = 1;

/// Where a directory is loaded from and saved to.
pub trait SnapshotStore {
    /// Load the saved directory, or an empty one if nothing was saved yet.
    fn load(&self) -> Result<Directory>;

    /// Replace the saved snapshot with `directory`.
    fn save(&mut self, directory: &Directory) -> Result<()>;
}

#[derive(Serialize)]
struct SnapshotOut<'a> {
    version: u32,
    contacts: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct SnapshotHeader {
    version: u32,
}

#[derive(Deserialize)]
struct SnapshotIn {
    #[serde(default)]
    contacts: Vec<Record>,
}

pub fn encode(directory: &Directory) -> Result<String> {
    let snapshot = SnapshotOut {
        version: SNAPSHOT_VERSION,
        contacts: directory.iter().collect(),
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

pub fn decode(content: &str) -> Result<Directory> {
    let header: SnapshotHeader = serde_json::from_str(content)?;
    if header.version != SNAPSHOT_VERSION {
        return Err(RolodexError::Snapshot(format!(
            "unsupported snapshot version {} (expected {})",
            header.version, SNAPSHOT_VERSION
        )));
    }

    let snapshot: SnapshotIn = serde_json::from_str(content)?;
    let mut directory = Directory::new();
    for record in snapshot.contacts {
        directory.add_record(record);
    }
    Ok(directory)
}
