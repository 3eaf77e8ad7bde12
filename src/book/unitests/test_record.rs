use crate::Error;
use crate::book::{
    field,
    record::{RecordBuilder, NOT_PROVIDED},
};
use super::date;

#[test]
fn test_build_record() {
    let today = date(2024, 6, 10);
    let record = RecordBuilder::new("Alice")
        .with_phone("1234567890")
        .with_birthday("14.06.1990")
        .build(today)
        .unwrap();

    assert_eq!(record.name().as_str(), "Alice");
    assert_eq!(record.phone().as_str(), "1234567890");
    assert_eq!(record.birthday().map(|v| v.date()), Some(date(1990, 6, 14)));
    assert_eq!(
        record.to_string(),
        "Contact name: Alice, phone: 1234567890, birthday: 14.06.1990"
    );
}

#[test]
fn test_record_without_birthday() {
    let record = RecordBuilder::new("Bob")
        .with_phone("0987654321")
        .build(date(2024, 6, 10))
        .unwrap();

    assert_eq!(record.birthday().is_none(), true);
    assert_eq!(
        record.to_string(),
        format!("Contact name: Bob, phone: 0987654321, birthday: {}", NOT_PROVIDED)
    );
}

#[test]
fn test_invalid_record() {
    let today = date(2024, 6, 10);

    let result = RecordBuilder::new("Bob1").with_phone("0987654321").build(today);
    assert_eq!(result.unwrap_err(), Error::Field(field::NAME_ERROR.into()));

    let result = RecordBuilder::new("Bob").with_phone("09876").build(today);
    assert_eq!(result.unwrap_err(), Error::Field(field::PHONE_ERROR.into()));

    let result = RecordBuilder::new("Bob")
        .with_phone("0987654321")
        .with_birthday("01.01.2030")
        .build(today);
    assert_eq!(result.unwrap_err(), Error::Field(field::BIRTHDAY_ERROR.into()));

    let result = RecordBuilder::new("Bob").build(today);
    assert_eq!(matches!(result, Err(Error::Argument(_))), true);
}
