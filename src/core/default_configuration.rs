use std::fmt;
use std::fs;
use serde::Deserialize;
use log::LevelFilter;

use crate::{
    Error,
    core::{
        config::Config,
        Result
    },
};

pub const DEFAULT_DATA_FILE: &str = "address_book_data.csv";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Clone, Deserialize)]
struct LogCfg {
    #[serde(rename = "level")]
    level   : Option<String>,
    #[serde(rename = "logFile")]
    file    : Option<String>,

    #[serde(skip)]
    deserde_level: Option<LevelFilter>,
}

#[derive(Clone, Deserialize)]
struct Configuration {
    #[serde(rename = "dataFile")]
    data_file   : Option<String>,

    #[serde(rename = "logger")]
    logger      : Option<LogCfg>,
}

pub struct Builder<'a> {
    data_file   : Option<&'a str>,

    log_level   : Option<LevelFilter>,
    log_file    : Option<&'a str>,

    cfg         : Option<Configuration>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Builder<'a> {
        Self {
            data_file   : None,
            log_level   : None,
            log_file    : None,
            cfg         : None,
        }
    }

    pub fn with_data_file(&mut self, path: &'a str) -> &mut Self {
        self.data_file = Some(path);
        self
    }

    pub fn with_log_level(&mut self, level: LevelFilter) -> &mut Self {
        self.log_level = Some(level);
        self
    }

    pub fn with_logger(&mut self, level: LevelFilter, file: Option<&'a str>) -> &mut Self {
        self.log_level = Some(level);
        self.log_file = file;
        self
    }

    pub fn load(&mut self, input: &str) -> Result<&mut Self> {
        let data = fs::read_to_string(input).map_err(|e| {
            Error::Io(format!("Reading config error: {}", e))
        })?;

        let cfg = serde_json::from_str::<Configuration>(&data)?;
        self.cfg = Some(cfg);
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Box<dyn Config>> {
        Ok(Box::new(Configuration::new(self)?))
    }
}

impl<'a> Default for Builder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    fn new(b: &Builder) -> Result<Self> {
        let mut cfg = b.cfg.clone().unwrap_or(Self {
            data_file   : None,
            logger      : None,
        });

        if let Some(path) = b.data_file {
            cfg.data_file = Some(path.to_string());
        }
        if cfg.data_file.as_deref().map_or(true, |v| v.is_empty()) {
            cfg.data_file = Some(DEFAULT_DATA_FILE.to_string());
        }

        let mut logger = cfg.logger.take().unwrap_or(LogCfg {
            level: None,
            file: None,
            deserde_level: None,
        });

        let level = match logger.level.as_deref() {
            Some(v) => v.parse::<LevelFilter>().map_err(|_| {
                Error::Argument(format!("bad config, unknown log level: {}", v))
            })?,
            None => DEFAULT_LOG_LEVEL,
        };
        logger.deserde_level = Some(b.log_level.unwrap_or(level));
        if let Some(file) = b.log_file {
            logger.file = Some(file.to_string());
        }

        cfg.logger = Some(logger);
        Ok(cfg)
    }
}

impl Config for Configuration {
    fn data_file(&self) -> &str {
        self.data_file.as_deref().unwrap_or(DEFAULT_DATA_FILE)
    }

    fn log_level(&self) -> LevelFilter {
        self.logger.as_ref()
            .and_then(|v| v.deserde_level)
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    fn log_file(&self) -> Option<&str> {
        self.logger.as_ref().and_then(|v| v.file.as_deref())
    }

    #[cfg(feature = "inspect")]
    fn dump(&self) {
        println!("config: {}", self);
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dataFile:{},", self.data_file())?;
        write!(f, "\tlogLevel:{},", self.log_level())?;
        if let Some(file) = self.log_file() {
            write!(f, "\tlogFile:{}", file)?;
        }
        Ok(())
    }
}
