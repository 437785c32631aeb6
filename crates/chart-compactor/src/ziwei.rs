//! Ziwei compressor: drops the redundant palace/transformation/decade headers.

use crate::rules::{RuleSet, SubstitutionRule};
use std::sync::LazyLock;

pub const REMOVED_HEADERS: [&str; 3] = ["十二宮", "四化", "大限"];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new()
        .with_rules(REMOVED_HEADERS.iter().map(|&h| SubstitutionRule::removal("remove_header", h).unwrap()))
        .with_rule(SubstitutionRule::collapse_whitespace())
});

pub fn rules() -> &'static RuleSet {
    &RULES
}

pub fn compress(text: &str) -> String {
    RULES.compress(text)
}
