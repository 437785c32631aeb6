use serde::{Deserialize, Serialize};
use std::fmt;

/// Endpoint the fortune request body is posted to.
pub const FORTUNE_ENDPOINT: &str = "/api/v1/fortune";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Header line that opens every payload.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Male => "# 남성",
            Self::Female => "# 여성",
        }
    }

    pub fn is_male(&self) -> bool {
        matches!(self, Self::Male)
    }
}

/// Birth data as entered on the profile form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub gender: Gender,
    pub unknown_time: bool,
    pub latitude: f64,
    pub longitude: f64,
}

impl BirthInput {
    /// Copy with hour/minute forced to the placeholder when the birth time
    /// is unknown. Known times are returned untouched.
    pub fn with_time_placeholder(&self, hour: u32, minute: u32) -> Self {
        if !self.unknown_time {
            return self.clone();
        }
        Self { hour, minute, ..self.clone() }
    }
}

/// The three chart systems that make up a payload, in payload order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChartSystem {
    Saju,
    Ziwei,
    Natal,
}

impl ChartSystem {
    pub const ALL: [ChartSystem; 3] = [Self::Saju, Self::Ziwei, Self::Natal];

    /// Section tag written above the compressed block.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Saju => "[SAJU]",
            Self::Ziwei => "[ZWDS]",
            Self::Natal => "[NATAL]",
        }
    }

    /// Ziwei palaces cannot be laid out without an exact birth time.
    pub fn is_time_dependent(&self) -> bool {
        matches!(self, Self::Ziwei)
    }
}

impl fmt::Display for ChartSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Saju => "saju",
            Self::Ziwei => "ziwei",
            Self::Natal => "natal",
        };
        f.write_str(name)
    }
}

/// JSON body for the fortune analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortuneRequest {
    #[serde(rename = "chartData")]
    pub chart_data: String,
    #[serde(rename = "deviceID")]
    pub device_id: String,
    #[serde(rename = "promptTemplateId")]
    pub prompt_template_id: u32,
}

impl FortuneRequest {
    pub fn new(chart_data: impl Into<String>, device_id: impl Into<String>, prompt_template_id: u32) -> Self {
        Self {
            chart_data: chart_data.into(),
            device_id: device_id.into(),
            prompt_template_id,
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
