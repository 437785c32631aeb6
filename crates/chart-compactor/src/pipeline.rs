//! Compaction pipeline: compress each raw section, then assemble the payload.

use crate::{assemble, natal, saju, ziwei};
use chart_core::{ChartSystem, Gender};
use serde::Serialize;
use tracing::debug;

/// Per-section sizes, in bytes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionStats {
    pub system: ChartSystem,
    pub original_len: usize,
    pub compressed_len: usize,
}

/// Compression result with statistics.
#[derive(Debug, Clone, Serialize)]
pub struct CompressionResult {
    pub output: String,
    pub original_len: usize,
    pub compressed_len: usize,
    pub reduction_pct: f64,
    pub estimated_tokens: usize,
    /// Systems that made it into the payload, in payload order.
    pub sections: Vec<ChartSystem>,
    pub section_stats: Vec<SectionStats>,
}

impl CompressionResult {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.compressed_len as f64 / self.original_len as f64
    }

    pub fn contains(&self, system: ChartSystem) -> bool {
        self.sections.contains(&system)
    }
}

/// Rough token count used for payload sizing.
pub fn estimate_tokens(text: &str) -> usize {
    text.len() / 4
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FortuneCompactor;

impl FortuneCompactor {
    pub fn new() -> Self {
        Self
    }

    /// Run one system's raw text through its compressor.
    pub fn compress_section(&self, system: ChartSystem, raw: &str) -> String {
        match system {
            ChartSystem::Saju => saju::compress(raw),
            ChartSystem::Ziwei => ziwei::compress(raw),
            ChartSystem::Natal => natal::compress(raw),
        }
    }

    pub fn compress(&self, saju: &str, ziwei: &str, natal: &str, gender: Gender) -> CompressionResult {
        let mut compressed = Vec::with_capacity(3);
        let mut section_stats = Vec::with_capacity(3);
        for (system, raw) in ChartSystem::ALL.into_iter().zip([saju, ziwei, natal]) {
            let section = self.compress_section(system, raw);
            debug!(%system, original = raw.len(), compressed = section.len(), "section compressed");
            section_stats.push(SectionStats {
                system,
                original_len: raw.len(),
                compressed_len: section.len(),
            });
            compressed.push(section);
        }

        let sections = ChartSystem::ALL
            .into_iter()
            .zip(&compressed)
            .filter(|(_, s)| !s.is_empty())
            .map(|(system, _)| system)
            .collect();
        let output = assemble::assemble(&compressed[0], &compressed[1], &compressed[2], gender);

        let original_len = saju.len() + ziwei.len() + natal.len();
        let compressed_len = output.len();
        let reduction = if original_len > 0 {
            (original_len as f64 - compressed_len as f64) / original_len as f64 * 100.0
        } else {
            0.0
        };

        CompressionResult {
            estimated_tokens: estimate_tokens(&output),
            output,
            original_len,
            compressed_len,
            reduction_pct: reduction,
            sections,
            section_stats,
        }
    }
}

/// Compress three raw sections and assemble the payload in one call.
pub fn compress_fortune_text(saju: &str, ziwei: &str, natal: &str, gender: Gender) -> String {
    FortuneCompactor::new().compress(saju, ziwei, natal, gender).output
}
