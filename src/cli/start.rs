use crate::cli::{Config, Host, commands};
use crate::s3::{Credentials, S3};
use anyhow::{Context, Result, anyhow};
use clap::{ArgMatches, parser::ValueSource};
use colored::Colorize;
use secrecy::SecretString;
use std::path::{Path, PathBuf};

/// `~/.config/tfbucket`, `/tmp/tfbucket` when there is no home directory
#[must_use]
pub fn get_config_path() -> PathBuf {
    let home_dir = dirs::home_dir().map_or_else(|| PathBuf::from("/tmp"), |h| h);

    Path::new(&home_dir).join(".config").join("tfbucket")
}

/// Parse the command line, set up logging and build the S3 client
///
/// # Errors
///
/// Will return an error if the config file can not be used
pub fn start() -> Result<S3> {
    let config_path = get_config_path();

    // start the command line interface
    let matches = commands::new(&config_path).get_matches();

    let verbosity_level = match matches.get_one::<u8>("verbose").copied().unwrap_or(0) {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(verbosity_level)
        .init();

    s3_from_matches(&matches)
}

/// # Errors
///
/// Will return an error if the config file can not be used
pub fn s3_from_matches(matches: &ArgMatches) -> Result<S3> {
    let config = load_config(matches)?;

    log::debug!("config: {config:#?}");

    let host_name = matches
        .get_one::<String>("host")
        .map_or("aws", String::as_str);

    // HOST: no config at all means defaults and keys from the environment
    let default_host = Host::default();
    let host = if config.hosts.is_empty() {
        &default_host
    } else {
        config.get_host(host_name).map_err(|_| {
            anyhow!(
                "Could not find host: \"{}\" in the config file, For more information try {}",
                host_name.red(),
                "--help".green()
            )
        })?
    };

    // REGION
    let region = host.get_region()?;

    log::info!("region: {region}");

    // AUTH
    let credentials = Credentials::new(
        &host.access_key,
        &SecretString::new(host.secret_key.clone().into()),
    );

    let s3 = S3::new(&credentials, &region, None);

    log::debug!("S3:\n{s3}");

    Ok(s3)
}

fn load_config(matches: &ArgMatches) -> Result<Config> {
    let config_file = matches
        .get_one::<PathBuf>("config")
        .context("config file path missing")?;

    // the default location may not exist, an explicit --config must
    if matches.value_source("config") == Some(ValueSource::DefaultValue) && !config_file.is_file()
    {
        log::info!(
            "no config file at {}, using defaults",
            config_file.display()
        );
        return Ok(Config::default());
    }

    log::info!("config file: {}", config_file.display());

    Config::new(config_file)
}
