use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::{RolodexError, Result};

/// Report the first phone of a contact.
pub fn run(directory: &Directory, name: &str) -> Result<CmdResult> {
    let record = directory.find(name)?;
    let phone = record
        .first_phone()
        .ok_or_else(|| RolodexError::Command(format!("Contact {} has no phone numbers", name)))?;

    Ok(CmdResult::default().with_message(CmdMessage::info(format!(
        "Phone number for {}: {}",
        name, phone
    ))))
}
