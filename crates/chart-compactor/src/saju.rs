//! Saju compressor: shortens the pillar table's column labels.

use crate::rules::{RuleSet, SubstitutionRule};
use std::sync::LazyLock;

/// Column label -> one-syllable abbreviation.
pub const TERMS: [(&str, &str); 5] = [
    ("십신", "신"),
    ("천간", "천"),
    ("지지", "지"),
    ("운성", "운"),
    ("장간", "장"),
];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new()
        .with_rules(TERMS.iter().map(|&(term, short)| SubstitutionRule::literal("abbreviate_term", term, short).unwrap()))
        .with_rule(SubstitutionRule::collapse_whitespace())
});

pub fn rules() -> &'static RuleSet {
    &RULES
}

pub fn compress(text: &str) -> String {
    RULES.compress(text)
}
