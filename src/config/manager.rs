use super::{evolution::EvolutionConfig, output::OutputConfig, traits::ConfigSection};
use crate::error::ExprEvolveError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variables such as `EXPREVOLVE_EVOLUTION__TARGET=42` override file values
pub const ENV_PREFIX: &str = "EXPREVOLVE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ExprEvolveError> {
        validate_section(&self.evolution)?;
        validate_section(&self.output)?;
        Ok(())
    }
}

/// Prefixes configuration errors with the section they come from
fn validate_section<S: ConfigSection>(section: &S) -> Result<(), ExprEvolveError> {
    section.validate().map_err(|err| match err {
        ExprEvolveError::Configuration(msg) => {
            ExprEvolveError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    })
}

pub struct ConfigManager {
    config: AppConfig,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Layer defaults, an optional TOML file and `EXPREVOLVE_*` variables
    pub fn load(path: Option<&Path>) -> Result<Self, ExprEvolveError> {
        let mut builder = Config::builder().add_source(Config::try_from(&AppConfig::default())?);

        if let Some(path) = path {
            log::debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;

        Ok(Self { config })
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ExprEvolveError> {
        let toml_str = toml::to_string_pretty(&self.config)?;

        std::fs::write(path, toml_str)?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    /// Apply changes and re-validate; the previous config is kept on failure
    pub fn update<F>(&mut self, f: F) -> Result<(), ExprEvolveError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}
