use super::traits::ConfigSection;
use crate::error::ExprEvolveError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default `env_logger` filter; `RUST_LOG` still wins
    pub log_level: String,
    /// Log a sample individual every N generations
    pub report_interval: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            report_interval: 1,
        }
    }
}

impl ConfigSection for OutputConfig {
    fn section_name() -> &'static str {
        "output"
    }

    fn validate(&self) -> Result<(), ExprEvolveError> {
        if self.report_interval == 0 {
            return Err(ExprEvolveError::Configuration(
                "Report interval must be at least 1".to_string()
            ));
        }
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(ExprEvolveError::Configuration(format!(
                "Unknown log level: {}",
                self.log_level
            )));
        }
        Ok(())
    }
}
