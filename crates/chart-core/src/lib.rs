//! Shared data model for chart payload building: birth input, chart systems,
//! the fortune request body, configuration and errors.

pub mod config;
pub mod error;
pub mod types;

pub use config::{ChartConfig, TimeDefaultPolicy};
pub use error::{BoxError, ChartError, Result};
pub use types::{BirthInput, ChartSystem, FortuneRequest, Gender, FORTUNE_ENDPOINT};
