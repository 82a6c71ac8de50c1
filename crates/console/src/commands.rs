use telehealth_core::{form::FormField, models::provider::ProviderId};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  name <text>      set the provider name
  start <HH:MM>    set the availability start
  end <HH:MM>      set the availability end
  submit           add the provider, or update the one being edited
  edit <id>        load a provider into the form
  cancel           discard the form
  delete <id>      delete a provider
  providers        reload the provider list
  schedule         fetch the schedule
  show             print the current state
  help             print this text
  quit             exit";

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(FormField, String),
    Submit,
    Edit(ProviderId),
    Cancel,
    Delete(ProviderId),
    Providers,
    Schedule,
    Show,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty input")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing provider id for `{0}`")]
    MissingId(&'static str),

    #[error("Invalid provider id: {0}")]
    InvalidId(String),
}

/// Parses a console line. Field values keep inner spaces, and an empty value
/// clears the field.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "name" => Command::Set(FormField::Name, rest.to_string()),
        "start" => Command::Set(FormField::AvailabilityStart, rest.to_string()),
        "end" => Command::Set(FormField::AvailabilityEnd, rest.to_string()),
        "submit" => Command::Submit,
        "edit" => Command::Edit(parse_id("edit", rest)?),
        "cancel" => Command::Cancel,
        "delete" => Command::Delete(parse_id("delete", rest)?),
        "providers" => Command::Providers,
        "schedule" => Command::Schedule,
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(ParseError::Unknown(word.to_string())),
    };

    Ok(command)
}

fn parse_id(command: &'static str, raw: &str) -> Result<ProviderId, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::MissingId(command));
    }
    raw.parse()
        .map_err(|_| ParseError::InvalidId(raw.to_string()))
}
