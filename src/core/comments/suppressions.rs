//! Suppression state collected from comment directives.

use std::collections::{HashMap, HashSet};

/// Rules that can be suppressed with comment directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuppressibleRule {
    PreferDefaultExport,
}

impl SuppressibleRule {
    /// Parse rule name from string (case insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "prefer-default-export" => Some(Self::PreferDefaultExport),
            _ => None,
        }
    }

    /// All available rules (for "no args = all rules" case).
    pub fn all() -> HashSet<Self> {
        [Self::PreferDefaultExport].into_iter().collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreferDefaultExport => "prefer-default-export",
        }
    }
}

/// A line range disabled by `modlint-disable` / `modlint-enable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisabledRange {
    pub start: usize,
    pub end: usize,
}

/// Per-file suppression state.
#[derive(Debug, Default, Clone)]
pub struct Suppressions {
    /// Lines disabled by `modlint-disable-next-line`.
    pub disabled_lines: HashMap<SuppressibleRule, HashSet<usize>>,
    /// Ranges disabled by `modlint-disable` .. `modlint-enable`.
    pub disabled_ranges: HashMap<SuppressibleRule, Vec<DisabledRange>>,
}

impl Suppressions {
    /// Check if a line is suppressed for a specific rule.
    pub fn is_suppressed(&self, line: usize, rule: SuppressibleRule) -> bool {
        if let Some(lines) = self.disabled_lines.get(&rule)
            && lines.contains(&line)
        {
            return true;
        }
        if let Some(ranges) = self.disabled_ranges.get(&rule)
            && ranges.iter().any(|r| line >= r.start && line <= r.end)
        {
            return true;
        }
        false
    }
}
