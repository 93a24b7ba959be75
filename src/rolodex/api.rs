//! # API Facade
//!
//! [`RolodexApi`] is the single entry point a UI talks to. It owns the
//! session state explicitly: the in-memory [`Directory`] and the
//! [`SnapshotStore`] it came from. Nothing lives in globals.
//!
//! Lifecycle:
//!
//! 1. [`RolodexApi::open`] loads the directory from the store
//! 2. verb methods dispatch to `commands::*::run`
//! 3. [`RolodexApi::save`] writes the directory back
//!
//! The API does no printing and no business logic of its own.

use crate::commands::{self, CmdResult};
use crate::directory::Directory;
use crate::error::Result;
use crate::store::SnapshotStore;
use tracing::debug;

pub struct RolodexApi<S: SnapshotStore> {
    store: S,
    directory: Directory,
}

impl<S: SnapshotStore> RolodexApi<S> {
    /// Load the directory from `store` and apply `page_size` to it.
    pub fn open(store: S, page_size: usize) -> Result<Self> {
        let directory = store.load()?.with_page_size(page_size);
        debug!(contacts = directory.len(), page_size, "opened directory");
        Ok(Self { store, directory })
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.directory)
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn hello(&self) -> CmdResult {
        commands::hello::run()
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.directory, name, phone)
    }

    pub fn change_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::change::run(&mut self.directory, name, phone)
    }

    pub fn show_phone(&self, name: &str) -> Result<CmdResult> {
        commands::phone::run(&self.directory, name)
    }

    pub fn show_all(&self) -> CmdResult {
        commands::list::run(&self.directory)
    }

    pub fn show_birthdays(&self) -> CmdResult {
        commands::birthdays::run(&self.directory)
    }

    pub fn search_phone(&self, fragment: &str) -> CmdResult {
        commands::search::run(&self.directory, fragment)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.directory, name)
    }

    pub fn set_birthday(&mut self, name: &str, birthday: &str) -> Result<CmdResult> {
        commands::birthday::run(&mut self.directory, name, birthday)
    }
}

pub use crate::commands::{BirthdayCountdown, CmdMessage, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::DirectoryFixture;
    use crate::store::memory::InMemoryStore;

    fn seeded_store() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        let dir = DirectoryFixture::new()
            .with_birthday_contact("john", "1234567890", "1990-05-15")
            .with_contact("jane", &["9876543210"])
            .build();
        store.save(&dir).unwrap();
        store
    }

    #[test]
    fn open_loads_and_applies_page_size() {
        let api = RolodexApi::open(seeded_store(), 1).unwrap();
        assert_eq!(api.directory().len(), 2);
        assert_eq!(api.show_all().listed_pages.len(), 2);
    }

    #[test]
    fn mutations_are_saved_back() {
        let mut api = RolodexApi::open(InMemoryStore::new(), 10).unwrap();
        api.add_contact("ann", "1111111111").unwrap();
        api.change_phone("ann", "2222222222").unwrap();
        api.set_birthday("ann", "2001-01-01").unwrap();
        api.save().unwrap();

        let reloaded = api.store().load().unwrap();
        let ann = reloaded.find("ann").unwrap();
        assert!(ann.find_phone("2222222222").is_some());
        assert_eq!(ann.birthday().unwrap().as_str(), "2001-01-01");
    }

    #[test]
    fn dispatches_queries() {
        let mut api = RolodexApi::open(seeded_store(), 10).unwrap();

        assert_eq!(api.hello().messages[0].content, "How can I help you?");
        assert_eq!(
            api.show_phone("jane").unwrap().messages[0].content,
            "Phone number for jane: 9876543210"
        );
        assert_eq!(api.search_phone("987").listed_records().count(), 1);
        assert_eq!(api.show_birthdays().birthdays.len(), 1);

        api.delete_contact("jane").unwrap();
        assert!(api.show_phone("jane").is_err());
    }

    #[test]
    fn nothing_is_saved_until_asked() {
        let mut api = RolodexApi::open(InMemoryStore::new(), 10).unwrap();
        api.add_contact("ann", "1111111111").unwrap();
        assert_eq!(api.store().save_count(), 0);
    }
}
