use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;
use crate::model::Record;

/// Create a contact with one phone. An existing contact of the same name is replaced.
pub fn run(directory: &mut Directory, name: &str, phone: &str) -> Result<CmdResult> {
    let mut record = Record::new(name);
    record.add_phone(phone)?;

    let replaced = directory.contains(name);
    directory.add_record(record);

    let mut result = CmdResult::default();
    if replaced {
        result.add_message(CmdMessage::warning(format!(
            "Replaced existing contact: {}",
            name
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Added contact: {}, {}",
        name, phone
    )));
    Ok(result)
}
