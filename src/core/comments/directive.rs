//! Modlint directive parsing.
//!
//! Comment directives for suppressing rules:
//! - `modlint-disable` / `modlint-enable` - range suppression
//! - `modlint-disable-next-line` - single-line suppression
//!
//! Each directive may be followed by rule names; an empty list means all
//! suppressible rules.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use super::suppressions::SuppressibleRule;

static DIRECTIVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^modlint-(disable-next-line|disable|enable)(?:\s+(.+))?$").unwrap());

/// Modlint comment directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Disable { rules: HashSet<SuppressibleRule> },
    Enable { rules: HashSet<SuppressibleRule> },
    DisableNextLine { rules: HashSet<SuppressibleRule> },
}

impl Directive {
    /// Parse directive from comment text (pure text parsing, no semantic processing)
    ///
    /// # Arguments
    /// * `text` - Comment text (SWC has already stripped `//` and `/* */`)
    ///
    /// # Returns
    /// - `Some(Directive)` if it's a valid modlint directive
    /// - `None` if it's not a modlint directive
    pub fn parse(text: &str) -> Option<Self> {
        let captures = DIRECTIVE_REGEX.captures(text.trim())?;
        let rules = parse_rules(captures.get(2).map_or("", |m| m.as_str()));

        match &captures[1] {
            "disable-next-line" => Some(Self::DisableNextLine { rules }),
            "disable" => Some(Self::Disable { rules }),
            "enable" => Some(Self::Enable { rules }),
            _ => None,
        }
    }
}

/// Parse suppression rule list
///
/// # Design decisions:
/// - Empty input = all rules
/// - Valid tokens only = only those rules
/// - Mixed valid/invalid = only valid rules
/// - All invalid tokens = all rules (fail-safe)
fn parse_rules(rest: &str) -> HashSet<SuppressibleRule> {
    let rest = rest.trim();
    if rest.is_empty() {
        return SuppressibleRule::all();
    }

    let rules: HashSet<SuppressibleRule> = rest
        .split_whitespace()
        .filter_map(SuppressibleRule::parse)
        .collect();

    if rules.is_empty() {
        SuppressibleRule::all()
    } else {
        rules
    }
}
