//! The in-app command vocabulary.
//!
//! A command line is split on the first space: a fixed verb plus a free-form
//! argument. Unknown verbs are preserved so the caller can report them.

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/task <name>` -- add a task for today.
    Task(String),
    /// `/note <title>` -- capture a note.
    Note(String),
    /// `/theme <name>` -- switch the theme preset.
    Theme(String),
    /// `/wake <HH:MM>` -- set the wake target.
    Wake(String),
    /// Anything else.
    Unknown(String),
}

impl Command {
    pub fn parse(input: &str) -> Command {
        let trimmed = input.trim();
        let (verb, arg) = match trimmed.split_once(' ') {
            Some((verb, rest)) => (verb, rest.trim().to_string()),
            None => (trimmed, String::new()),
        };
        match verb {
            "/task" => Command::Task(arg),
            "/note" => Command::Note(arg),
            "/theme" => Command::Theme(arg),
            "/wake" => Command::Wake(arg),
            _ => Command::Unknown(trimmed.to_string()),
        }
    }
}
