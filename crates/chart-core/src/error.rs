use crate::types::ChartSystem;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum ChartError {
    /// An external calculator rejected the birth data. The collaborator's
    /// own error is kept as the source.
    #[error("{system} calculation failed: {source}")]
    Calculator {
        system: ChartSystem,
        #[source]
        source: BoxError,
    },
    #[error("{system} calculation cancelled")]
    Cancelled { system: ChartSystem },
    #[error("Invalid config: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ChartError {
    pub fn calculator(system: ChartSystem, source: impl Into<BoxError>) -> Self {
        Self::Calculator { system, source: source.into() }
    }

    /// The system whose computation aborted the build, if any.
    pub fn system(&self) -> Option<ChartSystem> {
        match self {
            Self::Calculator { system, .. } | Self::Cancelled { system } => Some(*system),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
