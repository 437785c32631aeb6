//! Chart compactor: turns raw chart renderings into a compact fortune payload.
//!
//! Stages:
//! 1. Normalize (trim lines, drop blanks and separators)
//! 2. Per-system rule sets (Saju, Ziwei, Natal)
//! 3. Assemble tagged sections behind a gender marker

pub mod assemble;
pub mod natal;
pub mod normalize;
pub mod pipeline;
pub mod rules;
pub mod saju;
pub mod ziwei;

pub use assemble::assemble;
pub use normalize::normalize;
pub use pipeline::{compress_fortune_text, CompressionResult, FortuneCompactor, SectionStats};
pub use rules::{RuleSet, SubstitutionRule};

#[cfg(test)]
mod tests;
