//! Ordered substitution rules shared by the per-system compressors.

use crate::normalize::normalize;
use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Pattern matched by the whitespace collapse rule.
pub const WHITESPACE_RUN: &str = r"\s{2,}";

static RE_WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(WHITESPACE_RUN).unwrap());

/// One (pattern, replacement) pair.
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    pub name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl SubstitutionRule {
    pub fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Result<Self, regex::Error> {
        Ok(Self { name, pattern: Regex::new(pattern)?, replacement })
    }

    /// Case-sensitive match on the exact term.
    pub fn literal(name: &'static str, term: &str, replacement: &'static str) -> Result<Self, regex::Error> {
        Self::new(name, &regex::escape(term), replacement)
    }

    /// Delete every occurrence of `term` outright.
    pub fn removal(name: &'static str, term: &str) -> Result<Self, regex::Error> {
        Self::literal(name, term, "")
    }

    /// Runs of two or more whitespace characters (newlines included) become one space.
    pub fn collapse_whitespace() -> Self {
        Self {
            name: "collapse_whitespace",
            pattern: RE_WHITESPACE_RUN.clone(),
            replacement: " ",
        }
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &str {
        self.replacement
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(text, NoExpand(self.replacement))
    }
}

/// Rules evaluated strictly in insertion order.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<SubstitutionRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: SubstitutionRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = SubstitutionRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn rules(&self) -> &[SubstitutionRule] {
        &self.rules
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for rule in &self.rules {
            result = rule.apply(&result).into_owned();
        }
        result
    }

    /// Normalize, apply the rules, then trim the ends so a term removed from
    /// the first or last line leaves nothing behind.
    pub fn compress(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let cleaned = normalize(text);
        if cleaned.is_empty() {
            return cleaned;
        }
        self.apply(&cleaned).trim().to_string()
    }
}
