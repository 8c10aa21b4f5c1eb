#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path;
use std::str::FromStr;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use mediagen_core::SearchConfig;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

use crate::domain::models::CatalogSourceName;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    CatalogSource,
    CatalogUrl,
    CatalogLimit,
    CatalogTimeoutMs,
    PopularTerms,
    PopularBoost,
    MaxRows,
    LogDir,
    LogLevel,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    /// Parse the current value of `key`.
    pub fn parse<T>(key: ConfigKey) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let val = Config::get(key);
        return val
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value for '{key}': {val}"));
    }

    pub fn default(key: ConfigKey) -> String {
        let default_source = CatalogSourceName::Fal.to_string();
        let config_path = dirs::config_dir()
            .map(|dir| dir.join("mediagen/config.toml"))
            .unwrap_or_else(|| path::PathBuf::from("mediagen.toml"));

        let res: &str = match key {
            ConfigKey::CatalogSource => &default_source,
            ConfigKey::CatalogUrl => "https://fal.ai/api/models",
            ConfigKey::CatalogLimit => "1000",
            ConfigKey::CatalogTimeoutMs => "10000",
            ConfigKey::PopularTerms => "flux,veo,kling,wan,stable",
            ConfigKey::PopularBoost => "100",
            ConfigKey::MaxRows => "10",
            ConfigKey::LogDir => "logs",
            ConfigKey::LogLevel => "info",

            // Special
            ConfigKey::ConfigFile => return config_path.to_string_lossy().to_string(),
        };

        return res.to_string();
    }

    pub async fn load(cmd: Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(&config_path).await?;
            Config::apply_toml(&cmd, &toml_str)
                .with_context(|| format!("failed to load {}", config_path.display()))?;
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            catalog_source = Config::get(ConfigKey::CatalogSource),
            catalog_url = Config::get(ConfigKey::CatalogUrl),
            popular_terms = Config::get(ConfigKey::PopularTerms),
            "config"
        );

        return Ok(());
    }

    fn apply_toml(cmd: &Command, toml_str: &str) -> Result<()> {
        let doc = toml_str.parse::<toml_edit::Document>()?;

        for key in ConfigKey::iter() {
            let Some(val) = doc.get(&key.to_string()) else {
                continue;
            };

            // Use clap value parsers to do validation.
            let possible_values = Config::possible_values(cmd, key);

            if let Some(val_int) = val.as_integer() {
                Config::set(key, &val_int.to_string());
            } else if let Some(val_float) = val.as_float() {
                Config::set(key, &val_float.to_string());
            } else if let Some(val_array) = val.as_array() {
                let joined = val_array
                    .iter()
                    .filter_map(|e| return e.as_str())
                    .collect::<Vec<_>>()
                    .join(",");
                Config::set(key, &joined);
            } else if let Some(val_str) = val.as_str() {
                if val_str.is_empty() {
                    continue;
                }
                if !possible_values.is_empty() && !possible_values.contains(&val_str.to_string())
                {
                    bail!(format!("config.toml has an invalid value for key '{key}': {val_str}\nPossible values are: {}", possible_values.join(", ")));
                }
                Config::set(key, val_str);
            }
        }

        return Ok(());
    }

    fn possible_values(cmd: &Command, key: ConfigKey) -> Vec<String> {
        let long = key.to_string();
        return cmd
            .get_arguments()
            .find(|e| return e.get_long() == Some(long.as_str()))
            .map(|arg| {
                return arg
                    .get_possible_values()
                    .iter()
                    .map(|e| return e.get_name().to_string())
                    .collect::<Vec<String>>();
            })
            .unwrap_or_default();
    }

    /// Search tuning derived from the loaded configuration.
    pub fn search_config() -> Result<SearchConfig> {
        let popular_terms = Config::get(ConfigKey::PopularTerms)
            .split(',')
            .map(|term| return term.trim().to_string())
            .filter(|term| return !term.is_empty())
            .collect::<Vec<String>>();

        return Ok(SearchConfig {
            popular_terms,
            popular_boost: Config::parse::<f64>(ConfigKey::PopularBoost)?,
        });
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let long = key.to_string();
                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(long.as_str()))?;

                let mut description = arg
                    .get_help()
                    .map(|help| return help.to_string())
                    .unwrap_or_default();

                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                if !arg.get_possible_values().is_empty() {
                    let possible_values = arg
                        .get_possible_values()
                        .iter()
                        .map(|e| return e.get_name())
                        .collect::<Vec<_>>()
                        .join(", ");
                    description = format!("{description} [possible values: {}]", possible_values);
                }

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<i64>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
