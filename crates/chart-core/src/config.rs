use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};

/// Which party substitutes the placeholder time for an unknown birth time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeDefaultPolicy {
    /// Calculators receive the input as entered and apply their own default.
    #[default]
    Collaborator,
    /// The builder rewrites hour/minute before calling any calculator.
    Builder,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    pub time_default_policy: TimeDefaultPolicy,
    pub placeholder_hour: u32,
    pub placeholder_minute: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            time_default_policy: TimeDefaultPolicy::Collaborator,
            placeholder_hour: 12,
            placeholder_minute: 0,
        }
    }
}

impl ChartConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.placeholder_hour > 23 {
            return Err(ChartError::Config(format!(
                "placeholder_hour must be 0..=23, got {}",
                self.placeholder_hour
            )));
        }
        if self.placeholder_minute > 59 {
            return Err(ChartError::Config(format!(
                "placeholder_minute must be 0..=59, got {}",
                self.placeholder_minute
            )));
        }
        Ok(())
    }
}
