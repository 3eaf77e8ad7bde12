use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom};
use std::path::{Path, PathBuf};
use csv::{ReaderBuilder, Terminator, Trim, WriterBuilder};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    core::Result,
};

use super::record::Record;

pub const FIELDS: [&str; 3] = ["name", "phone", "birthday"];

/// One unvalidated row of the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub name    : String,
    pub phone   : String,
    #[serde(default)]
    pub birthday: String,
}

impl From<&Record> for Row {
    fn from(record: &Record) -> Self {
        Self {
            name    : record.name().to_string(),
            phone   : record.phone().to_string(),
            birthday: record.birthday().map(|v| v.to_string()).unwrap_or_default(),
        }
    }
}

pub trait Storage {
    fn load(&mut self) -> Result<Vec<Row>>;
    /// Replaces the whole backing content with `rows`.
    fn save(&mut self, rows: &[Row]) -> Result<()>;
}

/// Comma separated file with a `name,phone,birthday` header, rows ending in CRLF.
///
/// Columns are matched by header name; quoted fields are accepted on load.
///
/// The file stays open for the lifetime of the value and is closed on drop.
#[derive(Debug)]
pub struct CsvStorage {
    path: PathBuf,
    file: File,
}

impl CsvStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let existed = path.exists();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&path)
            .map_err(|e| {
                Error::Io(format!("Opening contacts file {} error: {e}", path.display()))
            })?;

        match existed {
            true  => info!("Opened contacts file {}", path.display()),
            false => info!("Created contacts file {}", path.display()),
        }
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for CsvStorage {
    fn load(&mut self) -> Result<Vec<Row>> {
        self.file.seek(SeekFrom::Start(0))?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(&self.file);

        let header = reader.headers()?.clone();
        if header.is_empty() {
            return Ok(Vec::new());
        }
        let has = |field: &str| header.iter().any(|v| v == field);
        if !has(FIELDS[0]) || !has(FIELDS[1]) {
            return Err(Error::Io(format!(
                "Malformed contacts header: {}",
                header.iter().collect::<Vec<_>>().join(",")
            )));
        }

        let rows = reader.deserialize::<Row>()
            .filter_map(|item| match item {
                Ok(row) => Some(row),
                Err(e) => {
                    warn!("Skipped malformed contacts row: {e}");
                    None
                }
            })
            .collect::<Vec<_>>();

        info!("Loaded {} rows from {}", rows.len(), self.path.display());
        Ok(rows)
    }

    fn save(&mut self, rows: &[Row]) -> Result<()> {
        self.file.set_len(0)?;
        self.file.seek(SeekFrom::Start(0))?;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(&self.file);

        writer.write_record(FIELDS)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        debug!("Saved {} rows to {}", rows.len(), self.path.display());
        Ok(())
    }
}

impl Drop for CsvStorage {
    fn drop(&mut self) {
        // Close failures are not surfaced to the session.
        if let Err(e) = self.file.sync_all() {
            warn!("Closing contacts file {} error: {e}", self.path.display());
        }
    }
}
