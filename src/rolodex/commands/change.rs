use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::{RolodexError, Result};

/// Replace the first phone of a contact.
pub fn run(directory: &mut Directory, name: &str, phone: &str) -> Result<CmdResult> {
    let record = directory.find_mut(name)?;
    let old = record
        .first_phone()
        .map(|p| p.as_str().to_string())
        .ok_or_else(|| RolodexError::Command(format!("Contact {} has no phone numbers", name)))?;

    record.edit_phone(&old, phone)?;

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Changed phone for {} to {}",
        name, phone
    ))))
}
