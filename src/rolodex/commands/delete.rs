use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;

pub fn run(directory: &mut Directory, name: &str) -> Result<CmdResult> {
    directory.delete(name)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Deleted contact: {}",
        name
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RolodexError;
    use crate::store::memory::fixtures::DirectoryFixture;

    #[test]
    fn deletes_contact() {
        let mut dir = DirectoryFixture::new()
            .with_contact("john", &["1234567890"])
            .build();
        let result = run(&mut dir, "john").unwrap();

        assert!(dir.is_empty());
        assert_eq!(result.messages[0].content, "Deleted contact: john");
    }

    #[test]
    fn unknown_contact() {
        let mut dir = Directory::new();
        assert!(matches!(
            run(&mut dir, "ghost").unwrap_err(),
            RolodexError::ContactNotFound(_)
        ));
    }
}
