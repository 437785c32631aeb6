//! Chart data builder: runs the three calculators and compacts their output
//! into a single fortune payload.

use crate::calculator::{NatalCalculator, SajuCalculator, ZiweiCalculator};
use chart_compactor::{CompressionResult, FortuneCompactor};
use chart_core::{
    BirthInput, ChartConfig, ChartError, ChartSystem, FortuneRequest, Result, TimeDefaultPolicy,
};
use std::borrow::Cow;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub struct ChartDataBuilder<S, Z, N> {
    saju: S,
    ziwei: Z,
    natal: N,
    config: ChartConfig,
    compactor: FortuneCompactor,
}

impl<S, Z, N> ChartDataBuilder<S, Z, N>
where
    S: SajuCalculator,
    Z: ZiweiCalculator,
    N: NatalCalculator,
{
    pub fn new(saju: S, ziwei: Z, natal: N) -> Self {
        Self {
            saju,
            ziwei,
            natal,
            config: ChartConfig::default(),
            compactor: FortuneCompactor::new(),
        }
    }

    pub fn with_config(mut self, config: ChartConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Input as the calculators should see it under the configured policy.
    pub fn effective_input<'a>(&self, input: &'a BirthInput) -> Cow<'a, BirthInput> {
        match self.config.time_default_policy {
            TimeDefaultPolicy::Builder if input.unknown_time => Cow::Owned(
                input.with_time_placeholder(self.config.placeholder_hour, self.config.placeholder_minute),
            ),
            _ => Cow::Borrowed(input),
        }
    }

    /// Raw Saju rendering.
    pub fn saju_text(&self, input: &BirthInput) -> Result<String> {
        let chart = self.saju.calculate(input).map_err(|e| {
            warn!(error = %e, "saju calculation failed");
            ChartError::calculator(ChartSystem::Saju, e)
        })?;
        Ok(self.saju.render(&chart))
    }

    /// Raw Ziwei rendering, or `None` when the birth time is unknown.
    pub fn ziwei_text(&self, input: &BirthInput) -> Result<Option<String>> {
        if input.unknown_time {
            debug!("birth time unknown, skipping ziwei");
            return Ok(None);
        }
        let chart = self
            .ziwei
            .create_chart(input.year, input.month, input.day, input.hour, input.minute, input.gender.is_male())
            .map_err(|e| {
                warn!(error = %e, "ziwei calculation failed");
                ChartError::calculator(ChartSystem::Ziwei, e)
            })?;
        Ok(Some(self.ziwei.render(&chart)))
    }

    /// Raw natal rendering. A fired `cancel` token abandons the pending calculation.
    pub async fn natal_text(&self, input: &BirthInput, cancel: Option<&CancellationToken>) -> Result<String> {
        let pending = self.natal.calculate_natal(input);
        let outcome = match cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!("natal calculation cancelled");
                    return Err(ChartError::Cancelled { system: ChartSystem::Natal });
                }
                outcome = pending => outcome,
            },
            None => pending.await,
        };
        let chart = outcome.map_err(|e| {
            warn!(error = %e, "natal calculation failed");
            ChartError::calculator(ChartSystem::Natal, e)
        })?;
        Ok(self.natal.render(&chart))
    }

    /// Build the payload and keep the compression statistics.
    pub async fn build_with_stats(
        &self,
        input: &BirthInput,
        cancel: Option<&CancellationToken>,
    ) -> Result<CompressionResult> {
        if cancel.is_some_and(|t| t.is_cancelled()) {
            return Err(ChartError::Cancelled { system: ChartSystem::Saju });
        }
        let input = self.effective_input(input);

        let saju = self.saju_text(&input)?;
        let ziwei = self.ziwei_text(&input)?.unwrap_or_default();
        let natal = self.natal_text(&input, cancel).await?;
        debug!(saju = saju.len(), ziwei = ziwei.len(), natal = natal.len(), "raw chart text ready");

        let result = self.compactor.compress(&saju, &ziwei, &natal, input.gender);
        info!(
            bytes = result.compressed_len,
            tokens = result.estimated_tokens,
            reduction_pct = result.reduction_pct,
            "chart data built"
        );
        Ok(result)
    }

    pub async fn build_chart_data(&self, input: &BirthInput) -> Result<String> {
        Ok(self.build_with_stats(input, None).await?.output)
    }

    pub async fn build_chart_data_with_cancel(&self, input: &BirthInput, cancel: &CancellationToken) -> Result<String> {
        Ok(self.build_with_stats(input, Some(cancel)).await?.output)
    }

    /// Request body for the fortune endpoint. Nothing is produced unless the
    /// whole chart was built.
    pub async fn prepare_fortune_request(
        &self,
        input: &BirthInput,
        device_id: &str,
        prompt_template_id: u32,
    ) -> Result<FortuneRequest> {
        let chart_data = self.build_chart_data(input).await?;
        Ok(FortuneRequest::new(chart_data, device_id, prompt_template_id))
    }
}
