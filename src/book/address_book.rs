use chrono::NaiveDate;
use indexmap::IndexMap;
use log::{debug, warn};

use crate::{
    Error,
    core::Result,
};

use super::{
    birthdays::{self, BirthdayReport},
    clock::{Clock, SystemClock},
    field::{Name, Phone, Birthday},
    record::{Record, RecordBuilder},
    storage::{Row, Storage},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Added {
    Created,
    AlreadyExists,
}

pub struct AddressBookBuilder {
    storage : Option<Box<dyn Storage>>,
    clock   : Option<Box<dyn Clock>>,
}

impl AddressBookBuilder {
    pub fn new() -> Self {
        Self {
            storage : None,
            clock   : None,
        }
    }

    pub fn with_storage(&mut self, storage: Box<dyn Storage>) -> &mut Self {
        self.storage = Some(storage);
        self
    }

    pub fn with_clock(&mut self, clock: Box<dyn Clock>) -> &mut Self {
        self.clock = Some(clock);
        self
    }

    /// Builds the book and loads every valid row from the attached storage.
    pub fn build(&mut self) -> Result<AddressBook> {
        let mut book = AddressBook {
            records : IndexMap::new(),
            storage : self.storage.take(),
            clock   : self.clock.take().unwrap_or_else(|| Box::new(SystemClock) as Box<dyn Clock>),
        };
        book.load()?;
        Ok(book)
    }
}

impl Default for AddressBookBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Contacts keyed by name, kept in insertion order.
///
/// Every successful mutation is written through to the attached storage.
pub struct AddressBook {
    records : IndexMap<String, Record>,
    storage : Option<Box<dyn Storage>>,
    clock   : Box<dyn Clock>,
}

impl AddressBook {
    /// An in-memory book using the system clock.
    pub fn new() -> Self {
        Self {
            records : IndexMap::new(),
            storage : None,
            clock   : Box::new(SystemClock),
        }
    }

    fn load(&mut self) -> Result<()> {
        let Some(storage) = self.storage.as_mut() else {
            return Ok(());
        };

        let today = self.clock.today();
        for row in storage.load()? {
            if self.records.contains_key(&row.name) {
                warn!("Skipped duplicated contact {}", row.name);
                continue;
            }

            let result = RecordBuilder::new(&row.name)
                .with_phone(&row.phone)
                .with_birthday(&row.birthday)
                .build(today);

            match result {
                Ok(record) => { self.records.insert(row.name, record); }
                Err(e) => warn!("Skipped invalid contact {}: {e}", row.name),
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if self.records.is_empty() {
            return Ok(());
        }
        let Some(storage) = self.storage.as_mut() else {
            return Ok(());
        };

        let rows = self.records.values()
            .map(Row::from)
            .collect::<Vec<_>>();
        storage.save(&rows)
    }

    fn record_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.records.get_mut(name).ok_or_else(|| Error::NotFound(name.to_string()))
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Adds a contact unless one with the same name is already stored.
    ///
    /// A contact that cannot be written to storage is not kept in memory.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<Added> {
        if self.records.contains_key(name) {
            self.flush()?;
            return Ok(Added::AlreadyExists);
        }

        let record = Record::new(Name::new(name)?, Phone::new(phone)?);
        self.records.insert(name.to_string(), record);
        if let Err(e) = self.flush() {
            self.records.shift_remove(name);
            return Err(e);
        }
        debug!("Added contact {}", name);
        Ok(Added::Created)
    }

    /// Sets the contact's birthday; an empty string clears it.
    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> Result<()> {
        let today = self.today();
        let record = self.record_mut(name)?;
        let birthday = Birthday::parse_optional(birthday, today)?;
        let previous = record.birthday().copied();
        record.set_birthday(birthday);
        if let Err(e) = self.flush() {
            self.record_mut(name)?.set_birthday(previous);
            return Err(e);
        }
        debug!("Updated birthday of contact {}", name);
        Ok(())
    }

    pub fn change_phone(&mut self, name: &str, phone: &str) -> Result<()> {
        let record = self.record_mut(name)?;
        let phone = Phone::new(phone)?;
        let previous = record.phone().clone();
        record.set_phone(phone);
        if let Err(e) = self.flush() {
            self.record_mut(name)?.set_phone(previous);
            return Err(e);
        }
        debug!("Updated phone of contact {}", name);
        Ok(())
    }

    pub fn phone(&self, name: &str) -> Result<&Phone> {
        self.get(name)
            .map(|v| v.phone())
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    pub fn birthday(&self, name: &str) -> Result<Option<&Birthday>> {
        self.get(name)
            .map(|v| v.birthday())
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    pub fn all(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn birthdays_for_report(&self) -> Vec<(&str, NaiveDate)> {
        self.records.values()
            .filter_map(|v| v.birthday().map(|b| (v.name().as_str(), b.date())))
            .collect()
    }

    /// Upcoming birthdays as of the book's clock, or `None` for an empty book.
    pub fn birthdays(&self) -> Option<BirthdayReport> {
        if self.is_empty() {
            return None;
        }
        Some(birthdays::upcoming_birthdays(self.today(), self.birthdays_for_report()))
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}
