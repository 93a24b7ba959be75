use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;

/// Contacts with a phone containing `fragment`.
pub fn run(directory: &Directory, fragment: &str) -> CmdResult {
    let found: Vec<_> = directory
        .search_by_phone(fragment)
        .into_iter()
        .cloned()
        .collect();

    if found.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info(format!(
            "No contacts found with phone containing {}",
            fragment
        )));
    }
    CmdResult::default().with_listed_pages(vec![found])
}
