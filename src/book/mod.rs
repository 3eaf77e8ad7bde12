pub mod field;
pub mod record;
pub mod storage;
pub mod clock;
pub mod birthdays;
pub mod address_book;
