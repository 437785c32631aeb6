//! Fortune text assembler.

use chart_core::{ChartSystem, Gender};

/// Tag each non-empty section and join them with a blank line, in
/// [`ChartSystem::ALL`] order.
pub fn join_sections(saju: &str, ziwei: &str, natal: &str) -> String {
    ChartSystem::ALL
        .iter()
        .zip([saju, ziwei, natal])
        .filter(|(_, body)| !body.is_empty())
        .map(|(system, body)| format!("{}\n{}", system.tag(), body))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Gender marker line followed by the joined sections.
pub fn assemble(saju: &str, ziwei: &str, natal: &str, gender: Gender) -> String {
    format!("{}\n{}", gender.marker(), join_sections(saju, ziwei, natal))
}
