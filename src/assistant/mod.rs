//! Line oriented command handling for the interactive assistant.
//!
//! [`Assistant::execute`] turns one input line into the text to print, so
//! the whole command set runs without a terminal attached.

mod cmds;


use clap::{ArgMatches, Command};
use log::{debug, error};

use crate::{
    Error,
    core::Result,
    book::{
        address_book::{AddressBook, Added},
        record::NOT_PROVIDED,
    },
};

use cmds::*;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const GREETING: &str = "How can I help you?";
pub const GOODBYE: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";
pub const EMPTY_BOOK: &str = "Contacts book is empty.";
pub const USAGE_ERROR: &str = "Give me name (and phone/birthday) please.";
pub const NOT_FOUND: &str = "Contact doesn't exist.";
pub const UNEXPECTED_ERROR: &str = "Oops! Something wrong happened.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next line.
    Continue(String),
    /// Print the text and end the session.
    Quit(String),
    /// Nothing to print.
    Empty,
}

pub struct Assistant {
    book: AddressBook,
    cli : Command,
}

impl Assistant {
    pub fn new(book: AddressBook) -> Self {
        Self {
            book,
            cli: assistant_cli(),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    pub fn supported_commands(&self) -> String {
        supported_commands(&self.cli)
    }

    pub fn welcome(&self) -> String {
        format!("{}\n{}", WELCOME, self.supported_commands())
    }

    pub fn execute(&mut self, line: &str) -> Reply {
        let mut args = line.split_whitespace()
            .map(|v| v.to_string())
            .collect::<Vec<_>>();

        let Some(first) = args.first_mut() else {
            return Reply::Empty;
        };
        *first = first.to_lowercase();

        if EXIT_COMMANDS.contains(&first.as_str()) {
            return Reply::Quit(GOODBYE.into());
        }
        if self.cli.find_subcommand(first.as_str()).is_none() {
            debug!("Unknown command: {}", first);
            return Reply::Continue(INVALID_COMMAND.into());
        }

        let result = self.cli.try_get_matches_from_mut(args)
            .map_err(|e| Error::Argument(format!("{:?}", e.kind())))
            .and_then(|matches| self.dispatch(&matches));

        match result {
            Ok(text) => Reply::Continue(text),
            Err(e) => Reply::Continue(translate(&e)),
        }
    }

    fn dispatch(&mut self, matches: &ArgMatches) -> Result<String> {
        let book = &mut self.book;
        match matches.subcommand() {
            Some((HELLO, _)) => {
                Ok(format!("{}\n{}", GREETING, supported_commands(&self.cli)))
            }
            Some((ADD, m)) => {
                match book.add_contact(value(m, "NAME")?, value(m, "PHONE")?)? {
                    Added::Created => Ok("Contact added.".into()),
                    Added::AlreadyExists => Ok("Contact already exists.".into()),
                }
            }
            Some((ADD_BIRTHDAY, m)) => {
                book.add_birthday(value(m, "NAME")?, value(m, "BIRTHDAY")?)?;
                Ok("Birthday added.".into())
            }
            Some((SHOW_BIRTHDAY, m)) => {
                Ok(book.birthday(value(m, "NAME")?)?
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| NOT_PROVIDED.into()))
            }
            Some((BIRTHDAYS, _)) => {
                Ok(book.birthdays()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| EMPTY_BOOK.into()))
            }
            Some((CHANGE, m)) => {
                book.change_phone(value(m, "NAME")?, value(m, "PHONE")?)?;
                Ok("Contact's phone updated.".into())
            }
            Some((PHONE, m)) => {
                Ok(book.phone(value(m, "NAME")?)?.to_string())
            }
            Some((ALL, _)) => {
                if book.is_empty() {
                    return Ok(EMPTY_BOOK.into());
                }
                Ok(book.all()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
            Some((name, _)) => Err(Error::State(format!("Unhandled command {}", name))),
            None => Err(Error::Argument("Missing command".into())),
        }
    }
}

fn value<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str> {
    matches.get_one::<String>(id)
        .map(|v| v.as_str())
        .ok_or_else(|| Error::Argument(format!("Missing argument {}", id)))
}

/// Maps an error to the text shown to the user.
pub fn translate(err: &Error) -> String {
    match err {
        Error::Field(msg) => msg.clone(),
        Error::Argument(_) => USAGE_ERROR.into(),
        Error::NotFound(_) => NOT_FOUND.into(),
        Error::Io(_) | Error::State(_) => {
            error!("Command failed: {err}");
            UNEXPECTED_ERROR.into()
        }
    }
}
