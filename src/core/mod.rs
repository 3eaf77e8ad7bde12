pub mod config;
pub mod default_configuration;
pub mod error;
pub mod logger;


pub type Result<T> = error::Result<T>;
