use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;

/// Every contact, split into pages of the directory's page size.
pub fn run(directory: &Directory) -> CmdResult {
    if directory.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("No contacts found"));
    }

    let pages = directory.paginate().map(|page| page.to_vec()).collect();
    CmdResult::default().with_listed_pages(pages)
}
