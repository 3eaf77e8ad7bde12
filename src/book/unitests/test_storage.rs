use std::fs;
use tempfile::TempDir;

use crate::book::storage::{CsvStorage, Row, Storage};

fn row(name: &str, phone: &str, birthday: &str) -> Row {
    Row {
        name    : name.to_string(),
        phone   : phone.to_string(),
        birthday: birthday.to_string(),
    }
}

#[test]
fn test_open_creates_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.csv");
    assert_eq!(path.exists(), false);

    let mut storage = CsvStorage::open(&path).unwrap();
    assert_eq!(path.exists(), true);
    assert_eq!(storage.path(), path.as_path());
    assert_eq!(storage.load().unwrap().is_empty(), true);
}

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.csv");
    let rows = vec![
        row("Alice", "1234567890", "14.06.1990"),
        row("Bob", "0987654321", ""),
    ];

    {
        let mut storage = CsvStorage::open(&path).unwrap();
        storage.save(&rows).unwrap();
    }

    let data = fs::read_to_string(&path).unwrap();
    assert_eq!(data, "name,phone,birthday\r\nAlice,1234567890,14.06.1990\r\nBob,0987654321,\r\n");

    let mut storage = CsvStorage::open(&path).unwrap();
    assert_eq!(storage.load().unwrap(), rows);
}

#[test]
fn test_save_truncates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.csv");
    let mut storage = CsvStorage::open(&path).unwrap();

    storage.save(&[
        row("Alice", "1234567890", "14.06.1990"),
        row("Bob", "0987654321", ""),
    ]).unwrap();
    storage.save(&[row("Carol", "1111111111", "")]).unwrap();

    assert_eq!(storage.load().unwrap(), vec![row("Carol", "1111111111", "")]);
}

#[test]
fn test_load_by_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.csv");
    fs::write(&path, "phone,name,birthday\n1234567890,Alice,01.01.1990\n\n").unwrap();

    let mut storage = CsvStorage::open(&path).unwrap();
    assert_eq!(storage.load().unwrap(), vec![row("Alice", "1234567890", "01.01.1990")]);
}

#[test]
fn test_load_without_birthday_column() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.csv");
    fs::write(&path, "name,phone\nAlice,1234567890\n").unwrap();

    let mut storage = CsvStorage::open(&path).unwrap();
    assert_eq!(storage.load().unwrap(), vec![row("Alice", "1234567890", "")]);
}

#[test]
fn test_load_skips_malformed_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.csv");
    fs::write(&path, "name,phone,birthday\nAlice,1234567890\nBob,0987654321,,extra\nCarol,1111111111,\n").unwrap();

    let mut storage = CsvStorage::open(&path).unwrap();
    assert_eq!(storage.load().unwrap(), vec![row("Carol", "1111111111", "")]);
}

#[test]
fn test_load_bad_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.csv");
    fs::write(&path, "first,second\nAlice,1234567890\n").unwrap();

    let mut storage = CsvStorage::open(&path).unwrap();
    assert_eq!(storage.load().is_err(), true);
}

#[test]
fn test_load_quoted_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.csv");
    fs::write(&path, "\"name\",\"phone\",\"birthday\"\r\n\"Alice\",\"1234567890\",\"01.01.1990\"\r\n").unwrap();

    let mut storage = CsvStorage::open(&path).unwrap();
    assert_eq!(storage.load().unwrap(), vec![row("Alice", "1234567890", "01.01.1990")]);
}

#[test]
fn test_load_extra_columns_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.csv");
    fs::write(&path, "name,email,phone\nAlice,\"alice@home, flat 2\",1234567890\n").unwrap();

    let mut storage = CsvStorage::open(&path).unwrap();
    assert_eq!(storage.load().unwrap(), vec![row("Alice", "1234567890", "")]);
}
