//! Environment-driven configuration.
//!
//! Read with `figment` from raw environment variables (after `dotenvy` has
//! loaded any `.env` file), so `PORT=9000` maps to [`Config::port`].

use std::time::Duration;

use anyhow::Context;
use figment::Figment;
use figment::providers::Env;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Level for this crate's own log targets; everything else stays at `warn`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// How long in-flight requests may take to drain after a shutdown signal.
    /// Accepts plain seconds or a human duration such as `8s` or `1m`.
    #[serde(
        default = "default_shutdown_timeout",
        deserialize_with = "deserialize_duration"
    )]
    pub shutdown_timeout: Duration,
    /// Results per page for queryset views.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Field new tags are created through. Empty disables creation.
    #[serde(default = "default_create_field")]
    pub create_field: String,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub editors: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub blocked_users: Vec<String>,
    #[serde(default = "default_seed_tags", deserialize_with = "deserialize_list")]
    pub seed_tags: Vec<String>,
    #[serde(default = "default_seed_colors", deserialize_with = "deserialize_list")]
    pub seed_colors: Vec<String>,
    #[serde(
        default = "default_seed_countries",
        deserialize_with = "deserialize_list"
    )]
    pub seed_countries: Vec<String>,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_figment(Figment::new().merge(Env::raw()))
    }

    pub fn from_figment(figment: Figment) -> anyhow::Result<Self> {
        figment.extract().context("Failed to load config")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            port: default_port(),
            shutdown_timeout: default_shutdown_timeout(),
            page_size: default_page_size(),
            create_field: default_create_field(),
            editors: Vec::new(),
            blocked_users: Vec::new(),
            seed_tags: default_seed_tags(),
            seed_colors: default_seed_colors(),
            seed_countries: default_seed_countries(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_port() -> u16 {
    8080
}

fn default_shutdown_timeout() -> Duration {
    Duration::from_secs(8)
}

fn default_page_size() -> usize {
    10
}

fn default_create_field() -> String {
    "name".to_owned()
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

fn default_seed_tags() -> Vec<String> {
    owned(&["async", "cli", "database", "embedded", "parser", "web"])
}

fn default_seed_colors() -> Vec<String> {
    owned(&["Red", "Green", "Blue", "Yellow", "Purple"])
}

fn default_seed_countries() -> Vec<String> {
    owned(&["Argentina", "Canada", "France", "Japan", "Kenya", "Norway"])
}

/// Seconds as a number, or anything `fundu` can parse (`750ms`, `8s`, `1m`).
fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Seconds(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Seconds(secs) => Ok(Duration::from_secs(secs)),
        Raw::Text(text) => fundu::parse_duration(text.trim()).map_err(serde::de::Error::custom),
    }
}

/// A sequence, or a single comma-separated string (`EDITORS=alice,bob`).
///
/// `Env` parses number-like values, so `EDITORS=1001` arrives as an integer
/// and is kept as the one-element list `["1001"]`.
fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
        Flag(bool),
    }

    impl Scalar {
        fn into_text(self) -> String {
            match self {
                Scalar::Text(text) => text,
                Scalar::Int(n) => n.to_string(),
                Scalar::Float(n) => n.to_string(),
                Scalar::Flag(b) => b.to_string(),
            }
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Many(Vec<Scalar>),
        One(Scalar),
    }

    let values: Vec<String> = match Raw::deserialize(deserializer)? {
        Raw::Many(values) => values.into_iter().map(Scalar::into_text).collect(),
        Raw::One(Scalar::Text(joined)) => joined.split(',').map(str::to_owned).collect(),
        Raw::One(single) => vec![single.into_text()],
    };
    Ok(values
        .into_iter()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .collect())
}
