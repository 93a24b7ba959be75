use super::{decode, encode, SnapshotStore};
use crate::directory::Directory;
use crate::error::Result;

/// Keeps the last saved snapshot as an encoded string. No persistence.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    snapshot: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw snapshot text, if anything has been saved.
    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Result<Directory> {
        match &self.snapshot {
            Some(content) => decode(content),
            None => Ok(Directory::new()),
        }
    }

    fn save(&mut self, directory: &Directory) -> Result<()> {
        self.snapshot = Some(encode(directory)?);
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Record;

    pub struct DirectoryFixture {
        pub directory: Directory,
    }

    impl Default for DirectoryFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl DirectoryFixture {
        pub fn new() -> Self {
            Self {
                directory: Directory::new(),
            }
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let mut record = Record::new(format!("contact{}", i + 1));
                record.add_phone(format!("{:010}", i + 1)).unwrap();
                self.directory.add_record(record);
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(name);
            for phone in phones {
                record.add_phone(*phone).unwrap();
            }
            self.directory.add_record(record);
            self
        }

        pub fn with_birthday_contact(mut self, name: &str, phone: &str, birthday: &str) -> Self {
            let mut record = Record::with_birthday(name, birthday).unwrap();
            record.add_phone(phone).unwrap();
            self.directory.add_record(record);
            self
        }

        pub fn with_page_size(mut self, page_size: usize) -> Self {
            self.directory.set_page_size(page_size);
            self
        }

        pub fn build(self) -> Directory {
            self.directory
        }
    }
}
