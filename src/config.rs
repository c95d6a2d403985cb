//! User configuration.
//!
//! The config file can declare models on top of the built-in catalog:
//!
//! ```toml
//! [[models]]
//! key = "fast-gpt-4"
//! name = "gpt-4"
//! base_provider = "openai"
//! providers = ["liaobots", "you"]
//!
//! [[models]]
//! key = "gpt-4-turbo"
//! alias_of = "gpt-4"
//! ```
//!
//! An entry either lists its providers or reuses the chain of an existing key through
//! `alias_of`. Entries are registered after the catalog, in file order, and go through
//! the same validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::providers::ProviderIdentifier;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read config \"{}\": {}", .0.display(), .1)]
    Read(PathBuf, #[source] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to compare config keys: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("model \"{0}\" must set exactly one of \"providers\" or \"alias_of\"")]
    AmbiguousChain(String),
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
pub struct ModelEntry {
    /// The registry key
    pub key: String,
    /// Upstream model name; defaults to the aliased model's name, then to `key`
    pub name: Option<String>,
    pub base_provider: Option<String>,
    pub providers: Option<Vec<ProviderIdentifier>>,
    /// Key of a model whose chain is reused
    pub alias_of: Option<String>,
}

/// Where an entry's chain comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChainSource<'a> {
    Providers(&'a [ProviderIdentifier]),
    AliasOf(&'a str),
}

impl ModelEntry {
    /// None unless exactly one of `providers` and `alias_of` is set.
    pub fn chain_source(&self) -> Option<ChainSource<'_>> {
        match (&self.providers, &self.alias_of) {
            (Some(providers), None) => Some(ChainSource::Providers(providers)),
            (None, Some(alias_of)) => Some(ChainSource::AliasOf(alias_of)),
            _ => None,
        }
    }
}

#[derive(Deserialize, Serialize, Default, Debug)]
pub struct Config {
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

fn get_config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME");

    if let Some(home) = home {
        let home = PathBuf::from(home);

        const USER_PATHS: [&str; 2] = [".config/modelreg/config.toml", ".modelreg.toml"];

        for &path in USER_PATHS.iter() {
            let fullpath = home.join(path);

            if fullpath.exists() {
                return Some(fullpath);
            }
        }
    }

    let system_config = PathBuf::from("/etc/modelreg.toml");

    if system_config.exists() {
        Some(system_config)
    } else {
        None
    }
}

fn extra_fields_helper(
    path: &mut Vec<String>,
    extra: &mut Vec<String>,
    user_value: &toml::Value,
    config_value: &toml::Value,
) {
    match (user_value, config_value) {
        (toml::Value::Table(user_table), toml::Value::Table(config_table)) => {
            for (user_key, user_value) in user_table {
                path.push(user_key.clone());

                match config_table.get(user_key) {
                    Some(config_value) => {
                        extra_fields_helper(path, extra, user_value, config_value)
                    }
                    None => extra.push(path.join(".")),
                }

                path.pop();
            }
        }
        (toml::Value::Array(user_array), toml::Value::Array(config_array)) => {
            for (i, (user_value, config_value)) in
                user_array.iter().zip(config_array.iter()).enumerate()
            {
                path.push(i.to_string());

                extra_fields_helper(path, extra, user_value, config_value);

                path.pop();
            }
        }
        _ => {}
    }
}

/// Keys present in `raw_config` which `config` does not understand, as dotted paths.
fn extra_fields(config: &Config, raw_config: &str) -> Result<Vec<String>, Error> {
    let user_config = toml::Value::Table(toml::from_str::<toml::Table>(raw_config)?);

    let config = toml::Value::try_from(config)?;

    let mut path = Vec::new();
    let mut extra = Vec::new();

    extra_fields_helper(&mut path, &mut extra, &user_config, &config);

    Ok(extra)
}

pub fn parse_config(raw_config: &str) -> Result<Config, Error> {
    let config: Config = toml::from_str(raw_config)?;

    for key in extra_fields(&config, raw_config)? {
        crate::warn!("config contains extraneous key \"{}\", ignoring", key);
    }

    for entry in &config.models {
        if entry.chain_source().is_none() {
            return Err(Error::AmbiguousChain(entry.key.clone()));
        }
    }

    Ok(config)
}

fn read_config_file(path: &Path) -> Result<Config, Error> {
    let raw_config =
        std::fs::read_to_string(path).map_err(|err| Error::Read(path.to_path_buf(), err))?;

    parse_config(&raw_config)
}

/// Reads the config at `config`, or at the first default location which exists. When
/// there is no config file the default config is returned.
pub fn read_config(config: Option<PathBuf>) -> Result<Config, Error> {
    let config_path = config.or_else(get_config_path);

    match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading config");

            read_config_file(&path)
        }
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_has_no_models() {
        let config = parse_config("").unwrap();

        assert!(config.models.is_empty());
    }

    #[test]
    fn entries_need_exactly_one_chain_source() {
        let both = r#"
            [[models]]
            key = "x"
            providers = ["you"]
            alias_of = "gpt-4"
        "#;

        assert!(matches!(
            parse_config(both),
            Err(Error::AmbiguousChain(key)) if key == "x"
        ));

        let neither = r#"
            [[models]]
            key = "y"
        "#;

        assert!(matches!(parse_config(neither), Err(Error::AmbiguousChain(_))));
    }

    #[test]
    fn unknown_provider_fails_to_parse() {
        let raw = r#"
            [[models]]
            key = "x"
            providers = ["nobody"]
        "#;

        assert!(matches!(parse_config(raw), Err(Error::Parse(_))));
    }

    #[test]
    fn extraneous_keys_are_reported_with_their_path() {
        let raw = r#"
            editor = "vim"

            [[models]]
            key = "x"
            providers = ["you"]
            priority = 3
        "#;

        let config: Config = toml::from_str(raw).unwrap();

        assert_eq!(
            extra_fields(&config, raw).unwrap(),
            vec!["editor".to_string(), "models.0.priority".to_string()]
        );
    }

    #[test]
    fn unset_optional_fields_are_not_extraneous() {
        let raw = r#"
            [[models]]
            key = "gpt-4-turbo"
            alias_of = "gpt-4"
        "#;

        let config = parse_config(raw).unwrap();

        assert!(extra_fields(&config, raw).unwrap().is_empty());
        assert_eq!(config.models[0].providers, None);
    }
}
