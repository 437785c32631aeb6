//! Chart calculation collaborators. Each calculator computes a chart and
//! renders it to line-oriented text; the builder only sees the text.

use async_trait::async_trait;
use chart_core::BirthInput;

/// Four-pillar chart.
pub trait SajuCalculator: Send + Sync {
    type Chart;

    fn calculate(&self, input: &BirthInput) -> anyhow::Result<Self::Chart>;

    fn render(&self, chart: &Self::Chart) -> String;
}

/// Twelve-palace chart. Needs an exact birth time.
pub trait ZiweiCalculator: Send + Sync {
    type Chart;

    fn create_chart(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        is_male: bool,
    ) -> anyhow::Result<Self::Chart>;

    fn render(&self, chart: &Self::Chart) -> String;
}

/// Western natal chart. Ephemeris work may suspend, so this one is async.
/// Implementations own their default time for an unknown birth time.
#[async_trait]
pub trait NatalCalculator: Send + Sync {
    type Chart: Send;

    async fn calculate_natal(&self, input: &BirthInput) -> anyhow::Result<Self::Chart>;

    fn render(&self, chart: &Self::Chart) -> String;
}
