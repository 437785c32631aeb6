//! Chart data builder: BirthInput -> Saju / Ziwei / Natal text -> compact
//! fortune payload.

pub mod builder;
pub mod calculator;

pub use builder::ChartDataBuilder;
pub use calculator::{NatalCalculator, SajuCalculator, ZiweiCalculator};
pub use tokio_util::sync::CancellationToken;
