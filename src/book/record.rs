use std::fmt;
use chrono::NaiveDate;

use crate::{
    Error,
    core::Result,
};

use super::field::{
    Name,
    Phone,
    Birthday,
};

pub const NOT_PROVIDED: &str = "Not provided.";

pub struct RecordBuilder<'a> {
    name    : &'a str,
    phone   : Option<&'a str>,
    birthday: &'a str,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            phone   : None,
            birthday: "",
        }
    }

    pub fn with_phone(&mut self, phone: &'a str) -> &mut Self {
        self.phone = Some(phone);
        self
    }

    pub fn with_birthday(&mut self, birthday: &'a str) -> &mut Self {
        self.birthday = birthday;
        self
    }

    /// Validates every field against `today`; nothing is built unless all pass.
    pub fn build(&self, today: NaiveDate) -> Result<Record> {
        let Some(phone) = self.phone else {
            return Err(Error::Argument(format!("Missing phone for contact {}", self.name)));
        };

        Ok(Record {
            name    : Name::new(self.name)?,
            phone   : Phone::new(phone)?,
            birthday: Birthday::parse_optional(self.birthday, today)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name    : Name,
    phone   : Phone,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name, phone: Phone) -> Self {
        Self {
            name,
            phone,
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub(crate) fn set_phone(&mut self, phone: Phone) {
        self.phone = phone;
    }

    pub(crate) fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phone: {}, birthday: ", self.name, self.phone)?;
        match self.birthday.as_ref() {
            Some(v) => write!(f, "{}", v),
            None => write!(f, "{}", NOT_PROVIDED),
        }
    }
}
