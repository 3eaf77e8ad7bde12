pub mod core;
pub mod book;
pub mod assistant;

pub use crate::core::{
    error::{self, Error},
    config,
    logger,
    default_configuration as configuration,
};

pub use crate::book::{
    field::{self, Name, Phone, Birthday},
    record::{self, Record, RecordBuilder},
    storage::{self, Storage, CsvStorage},
    clock::{self, Clock, SystemClock, FixedClock},
    birthdays::{self, BirthdayReport},
    address_book::{self, AddressBook, AddressBookBuilder, Added},
};

pub use crate::assistant::{
    Assistant,
    Reply,
};
