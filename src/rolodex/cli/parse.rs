use rolodex::error::{Result, RolodexError};

/// One line of user input, tokenized and classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Empty,
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    ShowAll,
    ShowBirthdays,
    SearchPhone { fragment: String },
    Delete { name: String },
    Birthday { name: String, date: String },
    Exit,
}

/// Parse a command line. Matching is case-insensitive, so arguments come
/// back lowercased.
pub fn parse_line(line: &str) -> Result<Input> {
    let line = line.trim().to_lowercase();
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let input = match tokens.as_slice() {
        [] => Input::Empty,
        ["hello"] => Input::Hello,
        ["good", "bye"] | ["close"] | ["exit"] => Input::Exit,
        ["show", "all"] => Input::ShowAll,
        ["show", "birthday"] | ["show", "birthdays"] => Input::ShowBirthdays,
        ["search", "phone", fragment] => Input::SearchPhone {
            fragment: fragment.to_string(),
        },
        ["add", name, phone] => Input::Add {
            name: name.to_string(),
            phone: phone.to_string(),
        },
        ["change", name, phone] => Input::Change {
            name: name.to_string(),
            phone: phone.to_string(),
        },
        ["phone", name] => Input::Phone {
            name: name.to_string(),
        },
        ["delete", name] => Input::Delete {
            name: name.to_string(),
        },
        ["birthday", name, date] => Input::Birthday {
            name: name.to_string(),
            date: date.to_string(),
        },
        [verb, ..] => {
            return Err(RolodexError::Command(match usage(verb) {
                Some(usage) => format!("Usage: {}", usage),
                None => format!("Unknown command: {}", verb),
            }))
        }
    };
    Ok(input)
}

fn usage(verb: &str) -> Option<&'static str> {
    let usage = match verb {
        "hello" => "hello",
        "add" => "add <name> <phone>",
        "change" => "change <name> <phone>",
        "phone" => "phone <name>",
        "show" => "show all | show birthday",
        "search" => "search phone <digits>",
        "delete" => "delete <name>",
        "birthday" => "birthday <name> <YYYY-MM-DD>",
        "good" | "close" | "exit" => "good bye | close | exit",
        _ => return None,
    };
    Some(usage)
}
