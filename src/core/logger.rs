use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use log::{
    LevelFilter,
    Metadata,
    Record
};

use crate::core::Result;

static MY_LOGGER: MyLogger = MyLogger {
    file: Mutex::new(None),
};

struct MyLogger {
    file: Mutex<Option<File>>,
}

impl log::Log for MyLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{}] {}",
            record.target(),
            record.level(),
            record.args()
        );

        // REPL output owns stdout, so the console fallback is stderr.
        let mut file = self.file.lock().unwrap_or_else(|e| e.into_inner());
        match file.as_mut() {
            Some(f) => { _ = writeln!(f, "{}", line); }
            None => eprintln!("{}", line),
        }
    }

    fn flush(&self) {
        let mut file = self.file.lock().unwrap_or_else(|e| e.into_inner());
        match file.as_mut() {
            Some(f) => { _ = f.flush(); }
            None => { _ = io::stderr().flush(); }
        }
    }
}

pub fn setup(level: LevelFilter, file: Option<&str>) -> Result<()> {
    let output = match file {
        Some(path) => Some(OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| crate::Error::Io(format!("Opening log file {} error: {e}", path)))?
        ),
        None => None,
    };

    *MY_LOGGER.file.lock().unwrap_or_else(|e| e.into_inner()) = output;

    // The facade accepts only one logger per process; later calls just
    // retarget the output and level.
    _ = log::set_logger(&MY_LOGGER);
    log::set_max_level(level);
    Ok(())
}

pub fn teardown() {
    log::logger().flush();
    log::set_max_level(LevelFilter::Off);
    *MY_LOGGER.file.lock().unwrap_or_else(|e| e.into_inner()) = None;
}
