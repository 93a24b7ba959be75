//! # Directory
//!
//! The collection of contacts, keyed by name.
//!
//! Records are kept in insertion order so listing and pagination are
//! deterministic. Overwriting a name keeps its original slot. The raw
//! storage is never handed out mutably: callers get a `&mut Record` through
//! [`Directory::find_mut`] and change it through the record's own validating
//! methods, so a key can never drift away from the name of the record it holds.

use crate::error::{RolodexError, Result};
use crate::model::Record;
use std::path::Path;
use std::slice::Chunks;
use tracing::debug;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    records: Vec<Record>,
    page_size: usize,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.set_page_size(page_size);
        self
    }

    /// Zero is bumped to one so every page makes progress.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }

    /// Insert a record under its own name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(pos) => {
                debug!(name = %record.name(), "replacing contact");
                self.records[pos] = record;
            }
            None => {
                debug!(name = %record.name(), "adding contact");
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Result<&Record> {
        self.position(name)
            .map(|pos| &self.records[pos])
            .ok_or_else(|| RolodexError::ContactNotFound(name.to_string()))
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record> {
        let pos = self
            .position(name)
            .ok_or_else(|| RolodexError::ContactNotFound(name.to_string()))?;
        Ok(&mut self.records[pos])
    }

    /// Remove and return the record stored under `name`.
    pub fn delete(&mut self, name: &str) -> Result<Record> {
        let pos = self
            .position(name)
            .ok_or_else(|| RolodexError::ContactNotFound(name.to_string()))?;
        debug!(name, "deleting contact");
        Ok(self.records.remove(pos))
    }

    /// Pages of at most `page_size` records, in directory order.
    pub fn paginate(&self) -> Pages<'_> {
        Pages {
            chunks: self.records.chunks(self.page_size),
        }
    }

    /// Records with at least one phone containing `fragment`, each listed once.
    pub fn search_by_phone(&self, fragment: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| r.has_phone_containing(fragment))
            .collect()
    }

    pub fn records_with_birthdays(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| r.birthday().is_some())
    }

    /// Persist this directory to a snapshot file at `path`.
    pub fn save_to_disk<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        crate::store::fs::write_snapshot(path.as_ref(), self)
    }

    /// Load a directory from `path`, or an empty one if the file does not exist.
    pub fn load_from_disk<P: AsRef<Path>>(path: P) -> Result<Self> {
        crate::store::fs::read_snapshot(path.as_ref())
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy page iterator returned by [`Directory::paginate`].
pub struct Pages<'a> {
    chunks: Chunks<'a, Record>,
}

impl<'a> Iterator for Pages<'a> {
    type Item = &'a [Record];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}
