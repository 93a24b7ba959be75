use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;

/// Set or replace a contact's birthday.
pub fn run(directory: &mut Directory, name: &str, birthday: &str) -> Result<CmdResult> {
    let record = directory.find_mut(name)?;
    record.set_birthday(birthday)?;

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Set birthday for {} to {}",
        name, birthday
    ))))
}
