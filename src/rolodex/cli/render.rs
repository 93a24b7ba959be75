use colored::*;
use rolodex::api::{BirthdayCountdown, CmdMessage, MessageLevel};
use rolodex::commands::CmdResult;
use rolodex::error::RolodexError;
use rolodex::model::Record;
use std::io::{self, Write};

pub fn print_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    print_pages(out, &result.listed_pages)?;
    print_birthdays(out, &result.birthdays)?;
    print_messages(out, &result.messages)
}

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content)?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub fn print_error<W: Write>(out: &mut W, error: &RolodexError) -> io::Result<()> {
    print_messages(out, &[CmdMessage::error(error.to_string())])
}

fn print_pages<W: Write>(out: &mut W, pages: &[Vec<Record>]) -> io::Result<()> {
    let total = pages.len();
    for (i, page) in pages.iter().enumerate() {
        if total > 1 {
            let header = format!("-- page {}/{} --", i + 1, total);
            writeln!(out, "{}", header.dimmed())?;
        }
        for record in page {
            writeln!(out, "{}", record)?;
        }
    }
    Ok(())
}

fn print_birthdays<W: Write>(out: &mut W, birthdays: &[BirthdayCountdown]) -> io::Result<()> {
    for countdown in birthdays {
        writeln!(
            out,
            "{}'s birthday in {} days",
            countdown.name.bold(),
            countdown.days
        )?;
    }
    Ok(())
}
