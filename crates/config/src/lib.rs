// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod args;
mod cost;
mod error;
mod log;

pub use args::{Args, Command, EstimateArgs, NormalizeArgs};
pub use cost::CostConfig;
pub use error::ConfigError;
pub use log::LogConfig;

use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct HelpersConfig {
    pub log: LogConfig,

    pub cost: CostConfig,
}

impl HelpersConfig {
    /// Load every section from its `ERH_<SECTION>_` prefixed environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            log: envy::prefixed("ERH_LOG_").from_env::<LogConfig>()?,
            cost: envy::prefixed("ERH_COST_").from_env::<CostConfig>()?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.log.validate()?;
        self.cost.validate()?;
        Ok(())
    }
}

/// Load variables from a dotenv file into the process environment.
///
/// Returns `Ok(false)` when the file does not exist. Variables already set in
/// the environment are not overridden.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<bool, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(false);
    }

    dotenv::from_path(path).map_err(|source| ConfigError::EnvFileError {
        path: path.display().to_string(),
        source,
    })?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        for key in [
            "ERH_LOG_LEVEL",
            "ERH_LOG_JSON",
            "ERH_COST_BASE_CYCLES",
            "ERH_COST_STANDARD_SUBNET_NODES",
            "ERH_COST_FIDUCIARY_SUBNET_NODES",
        ] {
            unsafe { std::env::remove_var(key) };
        }
    }

    #[test]
    fn test_default_config() {
        let config = HelpersConfig::default();
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.cost.standard_subnet_nodes, 13);
        assert_eq!(config.cost.fiduciary_subnet_nodes, 34);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = HelpersConfig::from_env().unwrap();
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.cost, CostConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        unsafe {
            std::env::set_var("ERH_LOG_LEVEL", "debug");
            std::env::set_var("ERH_LOG_JSON", "true");
            std::env::set_var("ERH_COST_BASE_CYCLES", "1000");
            std::env::set_var("ERH_COST_FIDUCIARY_SUBNET_NODES", "40");
        }

        let config = HelpersConfig::from_env().unwrap();
        assert_eq!(config.log.level, "debug");
        assert!(config.log.json);
        assert_eq!(config.cost.base_cycles, 1000);
        assert_eq!(config.cost.fiduciary_subnet_nodes, 40);
        assert_eq!(config.cost.standard_subnet_nodes, 13);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_invalid_values() {
        clear_env();
        unsafe { std::env::set_var("ERH_COST_STANDARD_SUBNET_NODES", "0") };
        assert!(matches!(
            HelpersConfig::from_env(),
            Err(ConfigError::ValidateError(_))
        ));

        unsafe { std::env::set_var("ERH_COST_STANDARD_SUBNET_NODES", "many") };
        assert!(matches!(
            HelpersConfig::from_env(),
            Err(ConfigError::EnvError(_))
        ));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_env_file() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ERH_LOG_LEVEL=info").unwrap();
        writeln!(file, "ERH_COST_BASE_CYCLES=42").unwrap();

        assert!(load_env_file(file.path()).unwrap());

        let config = HelpersConfig::from_env().unwrap();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.cost.base_cycles, 42);

        clear_env();
    }

    #[test]
    fn test_load_missing_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(".env.missing");
        assert!(!load_env_file(&missing).unwrap());
    }
}
