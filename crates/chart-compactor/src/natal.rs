//! Natal compressor: sign abbreviations, header removal and `orb` shorthand.

use crate::rules::{RuleSet, SubstitutionRule};
use std::sync::LazyLock;

pub const ZODIAC: [(&str, &str); 12] = [
    ("Sagittarius", "Sag"),
    ("Capricorn", "Cap"),
    ("Aquarius", "Aqu"),
    ("Pisces", "Pis"),
    ("Aries", "Ari"),
    ("Taurus", "Tau"),
    ("Gemini", "Gem"),
    ("Cancer", "Can"),
    ("Leo", "Leo"),
    ("Virgo", "Vir"),
    ("Libra", "Lib"),
    ("Scorpio", "Sco"),
];

pub const REMOVED_HEADERS: [&str; 4] = ["Major Aspects", "Planets", "Houses", "Angles"];

/// `orb` and the whitespace after it fold into a bare `@`.
pub const ORB_PATTERN: &str = r"orb\s+";

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new()
        .with_rules(ZODIAC.iter().map(|&(sign, short)| SubstitutionRule::literal("abbreviate_sign", sign, short).unwrap()))
        .with_rules(REMOVED_HEADERS.iter().map(|&h| SubstitutionRule::removal("remove_header", h).unwrap()))
        .with_rule(SubstitutionRule::new("orb_marker", ORB_PATTERN, "@").unwrap())
        .with_rule(SubstitutionRule::collapse_whitespace())
});

pub fn rules() -> &'static RuleSet {
    &RULES
}

pub fn compress(text: &str) -> String {
    RULES.compress(text)
}
