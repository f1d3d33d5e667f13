mod config;
pub use self::config::{Config, Host};

mod commands;

mod start;
pub use self::start::{get_config_path, s3_from_matches, start};
