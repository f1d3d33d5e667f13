use crate::s3::Region;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{collections::BTreeMap, fs::File, path::Path};

/// Signing region used for an `endpoint` without a `region`
const CUSTOM_ENDPOINT_REGION: &str = "us-east-1";

#[derive(Debug, Default, Deserialize, Eq, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub hosts: BTreeMap<String, Host>,
}

#[derive(Debug, Default, Deserialize, Eq, PartialEq)]
pub struct Host {
    pub endpoint: Option<String>,
    pub region: Option<String>,
    #[serde(default)]
    pub access_key: String,
    #[serde(default)]
    pub secret_key: String,
}

impl Config {
    /// # Errors
    ///
    /// Will return `Err` if the file can not be read or parsed
    pub fn new(config_path: &Path) -> Result<Self> {
        let file = File::open(config_path)
            .with_context(|| format!("unable to open {}", config_path.display()))?;

        let config: Self =
            serde_yaml_ng::from_reader(file).context("unable to parse config file")?;

        Ok(config)
    }

    /// Get the host from the config.yml
    ///
    /// # Errors
    ///
    /// Will return `Err` if the host is not defined
    pub fn get_host(&self, name: &str) -> Result<&Host> {
        self.hosts
            .get(name)
            .with_context(|| format!("could not find host {name}"))
    }
}

impl Host {
    /// Region for the host, London when nothing is configured
    ///
    /// # Errors
    ///
    /// Will return `Err` if `region` is not an AWS region and there is no `endpoint`
    pub fn get_region(&self) -> Result<Region> {
        Ok(match (&self.region, &self.endpoint) {
            (region, Some(endpoint)) => Region::Custom {
                name: region
                    .clone()
                    .unwrap_or_else(|| CUSTOM_ENDPOINT_REGION.to_string()),
                endpoint: endpoint.to_string(),
            },
            (Some(region), None) => region.parse::<Region>()?,
            (None, None) => Region::default(),
        })
    }
}
