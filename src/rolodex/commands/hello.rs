use crate::commands::{CmdMessage, CmdResult};

pub const GREETING: &str = "How can I help you?";

pub fn run() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info(GREETING))
}
