//! Logging and configuration for the driver.

use std::env;
use std::num::NonZeroUsize;

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

use crate::catalog::{default_catalog, GroupSpec, ParseGroupSpecError};

/// Logs to stderr, filtered by `RUST_LOG`. Only warnings and errors are shown by default.
pub fn init_logging() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()
}

/// Settings read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `DOUBLE_GROUPS`, a comma separated list such as `S3,A4,K4`. Defaults to
    /// [`default_catalog`].
    pub groups: Vec<GroupSpec>,
    /// `DOUBLE_THREADS`. Only meaningful with the `concurrent` feature.
    pub threads: Option<NonZeroUsize>,
    /// `DOUBLE_JSON`. If set to anything but `0`, a JSON summary follows each group.
    pub json: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ParseGroupSpecError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary source of variables.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ParseGroupSpecError> {
        let groups = match var("DOUBLE_GROUPS") {
            Some(list) if !list.trim().is_empty() => list
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(str::parse)
                .collect::<Result<_, _>>()?,
            _ => default_catalog(),
        };

        let threads = var("DOUBLE_THREADS").and_then(|n| match n.parse::<NonZeroUsize>() {
            Ok(n) => Some(n),
            Err(_) => {
                tracing::warn!("Invalid value of DOUBLE_THREADS variable: {n}");
                None
            }
        });

        let json = var("DOUBLE_JSON").is_some_and(|v| v != "0" && !v.is_empty());

        Ok(Self {
            groups,
            threads,
            json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config.groups, default_catalog());
        assert_eq!(config.threads, None);
        assert!(!config.json);
    }

    #[test]
    fn overrides() {
        let config = Config::from_vars(vars(&[
            ("DOUBLE_GROUPS", "S3, A4,K4"),
            ("DOUBLE_THREADS", "4"),
            ("DOUBLE_JSON", "1"),
        ]))
        .unwrap();
        assert_eq!(
            config.groups,
            [
                GroupSpec::Symmetric(3),
                GroupSpec::Alternating(4),
                GroupSpec::KleinFour
            ]
        );
        assert_eq!(config.threads, NonZeroUsize::new(4));
        assert!(config.json);
    }

    #[test]
    fn bad_values() {
        assert!(Config::from_vars(vars(&[("DOUBLE_GROUPS", "S3,Q8")])).is_err());
        let config = Config::from_vars(vars(&[("DOUBLE_THREADS", "zero")])).unwrap();
        assert_eq!(config.threads, None);
    }
}
