use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use seed_consul::ConsulConfig;
use seed_resolver::{RelativeKeys, ResolverConfig};

use crate::cli::Cli;

/// Settings read from the `--config` TOML file.
///
/// ```toml
/// [consul]
/// address = "consul.service:8500"
/// datacenter = "dc1"
///
/// [resolver]
/// relative_keys = "prefix"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub consul: ConsulConfig,
    pub resolver: ResolverConfig,
}

impl SeedConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid seed config")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// File settings (if any), overridden by command-line flags.
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(cli);
        Ok(config)
    }

    fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(address) = &cli.address {
            self.consul.address = address.clone();
        }
        if let Some(dc) = &cli.datacenter {
            self.consul.datacenter = Some(dc.clone());
        }
        if let Some(token) = &cli.token {
            self.consul.token = Some(token.clone());
        }
        if let Some(timeout) = cli.timeout_secs {
            self.consul.timeout_secs = timeout;
        }
        if cli.literal_keys {
            self.resolver.relative_keys = RelativeKeys::Literal;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::*;

    #[test]
    fn empty_file_is_default() {
        let c = SeedConfig::from_toml_str("").unwrap();
        assert_eq!(c, SeedConfig::default());
    }

    #[test]
    fn parse_full_file() {
        let c = SeedConfig::from_toml_str(
            r#"
            [consul]
            address = "https://consul.example.com"
            datacenter = "dc1"
            token = "abc"
            timeout_secs = 10

            [resolver]
            relative_keys = "literal"
            "#,
        )
        .unwrap();
        assert_eq!(c.consul.address, "https://consul.example.com");
        assert_eq!(c.consul.datacenter.as_deref(), Some("dc1"));
        assert_eq!(c.consul.token.as_deref(), Some("abc"));
        assert_eq!(c.consul.timeout_secs, 10);
        assert_eq!(c.resolver.relative_keys, RelativeKeys::Literal);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = SeedConfig::from_toml_str("[resolver]\nrelative_keys = \"regex\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn load_from_file_and_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[consul]\ndatacenter = \"dc1\"\ntimeout_secs = 7").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::try_parse_from([
            "seed", "get", "k",
            "--config", path.as_str(),
            "--datacenter", "dc9",
            "--literal-keys",
        ])
        .unwrap();
        let c = SeedConfig::from_cli(&cli).unwrap();
        assert_eq!(c.consul.timeout_secs, 7);
        assert_eq!(c.consul.datacenter.as_deref(), Some("dc9"));
        assert_eq!(c.resolver.relative_keys, RelativeKeys::Literal);
    }

    #[test]
    fn explicit_address_flag_beats_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[consul]\naddress = \"file:8500\"").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::try_parse_from([
            "seed", "get", "k",
            "--config", path.as_str(),
            "--address", "flag:8500",
        ])
        .unwrap();
        let c = SeedConfig::from_cli(&cli).unwrap();
        assert_eq!(c.consul.address, "flag:8500");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = SeedConfig::load(&missing).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }
}
