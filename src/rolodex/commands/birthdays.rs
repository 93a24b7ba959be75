use crate::commands::{BirthdayCountdown, CmdMessage, CmdResult};
use crate::directory::Directory;
use chrono::{Local, NaiveDate};

/// Countdown to the next birthday of every contact that has one.
pub fn run(directory: &Directory) -> CmdResult {
    run_on(directory, Local::now().date_naive())
}

pub fn run_on(directory: &Directory, today: NaiveDate) -> CmdResult {
    let birthdays: Vec<_> = directory
        .records_with_birthdays()
        .filter_map(|record| {
            record.days_to_birthday_from(today).map(|days| BirthdayCountdown {
                name: record.name().to_string(),
                days,
            })
        })
        .collect();

    if birthdays.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("No birthdays recorded"));
    }
    CmdResult::default().with_birthdays(birthdays)
}
