use std::fmt;
use chrono::NaiveDate;

use crate::{
    Error,
    core::Result,
};

pub const NAME_ERROR: &str = "Incorrect name provided. Name must contain only letters.";
pub const PHONE_ERROR: &str = "Incorrect phone provided. Phone must consist of 10 digits.";
pub const BIRTHDAY_ERROR: &str = "Incorrect birthday provided. Birthday data must be like DD.MM.YYYY and in the past.";

pub const PHONE_DIGITS: usize = 10;
pub const DATE_FORMAT: &str = "%d.%m.%Y";
const YEAR_DIGITS: usize = 4;

pub fn is_valid_name(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_alphabetic)
}

pub fn is_valid_phone(value: &str) -> bool {
    value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

/// An empty string is a valid "no birthday" value.
pub fn is_valid_birthday(value: &str, today: NaiveDate) -> bool {
    value.is_empty() || parse_date(value).map_or(false, |date| date <= today)
}

// `%Y` alone accepts any number of year digits.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let year = value.rsplit('.').next()?;
    if year.len() != YEAR_DIGITS || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> Result<Self> {
        match is_valid_name(value) {
            true => Ok(Self(value.to_string())),
            false => Err(Error::Field(NAME_ERROR.into())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> Result<Self> {
        match is_valid_phone(value) {
            true => Ok(Self(value.to_string())),
            false => Err(Error::Field(PHONE_ERROR.into())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A birthday that was not in the future when it was validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(value: &str, today: NaiveDate) -> Result<Self> {
        let Some(date) = parse_date(value) else {
            return Err(Error::Field(BIRTHDAY_ERROR.into()));
        };
        Self::from_date(date, today)
    }

    pub fn from_date(date: NaiveDate, today: NaiveDate) -> Result<Self> {
        match date <= today {
            true => Ok(Self(date)),
            false => Err(Error::Field(BIRTHDAY_ERROR.into())),
        }
    }

    /// Parses an optional birthday, where the empty string means none.
    pub fn parse_optional(value: &str, today: NaiveDate) -> Result<Option<Self>> {
        match value.is_empty() {
            true => Ok(None),
            false => Self::new(value, today).map(Some),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
