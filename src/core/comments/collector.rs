//! Comment collector.
//!
//! Collects all modlint directives from a file's parsed comments in a single
//! pass and turns them into per-file suppression state.
//!
//! # Consecutive Comment Handling
//!
//! When a `modlint-disable-next-line` directive is followed by further
//! comment lines, it applies to the next non-comment line. Blank lines are
//! not comment lines, so a blank line breaks the chain.

use std::collections::{HashMap, HashSet};

use swc_common::SourceMap;

use super::directive::Directive;
use super::suppressions::{DisabledRange, SuppressibleRule, Suppressions};
use crate::core::parsers::js::ExtractedComments;

/// Maximum number of consecutive comment lines to traverse when looking for
/// the target code line of a `disable-next-line` directive.
pub const MAX_COMMENT_CHAIN_LINES: usize = 10;

/// Collects all modlint comment directives from a file.
pub struct CommentCollector;

impl CommentCollector {
    /// Collect suppressions from a file's comments in a single pass.
    ///
    /// # Arguments
    /// * `comments` - Extracted comments from parsing
    /// * `source_map` - Source map for line number lookup
    pub fn collect(comments: &ExtractedComments, source_map: &SourceMap) -> Suppressions {
        let mut suppressions = Suppressions::default();

        // Collect all comments with their line numbers (computed once)
        let (leading, trailing) = comments.borrow_all();
        let mut comments_with_lines: Vec<_> = leading
            .iter()
            .chain(trailing.iter())
            .flat_map(|(_, cmts)| cmts.iter())
            .map(|cmt| {
                let line = source_map.lookup_char_pos(cmt.span.lo).line;
                (line, cmt)
            })
            .collect();

        comments_with_lines.sort_by_key(|(line, _)| *line);

        // Needed to chain consecutive directive comments to the next code line
        let comment_lines: HashSet<usize> =
            comments_with_lines.iter().map(|(line, _)| *line).collect();

        // Track open disable ranges per rule
        let mut open_ranges: HashMap<SuppressibleRule, usize> = HashMap::new();

        for (line, cmt) in comments_with_lines {
            let Some(directive) = Directive::parse(cmt.text.trim()) else {
                continue;
            };

            match directive {
                Directive::Disable { rules } => {
                    for rule in rules {
                        open_ranges.entry(rule).or_insert(line);
                    }
                }
                Directive::Enable { rules } => {
                    for rule in rules {
                        if let Some(start) = open_ranges.remove(&rule) {
                            let end = line.saturating_sub(1);
                            suppressions
                                .disabled_ranges
                                .entry(rule)
                                .or_default()
                                .push(DisabledRange { start, end });
                        }
                    }
                }
                Directive::DisableNextLine { rules } => {
                    let target_line = Self::find_next_non_comment_line(line, &comment_lines);
                    for rule in rules {
                        suppressions
                            .disabled_lines
                            .entry(rule)
                            .or_default()
                            .insert(target_line);
                    }
                }
            }
        }

        // Close any open ranges (extend to end of file)
        for (rule, start) in open_ranges {
            suppressions
                .disabled_ranges
                .entry(rule)
                .or_default()
                .push(DisabledRange {
                    start,
                    end: usize::MAX,
                });
        }

        suppressions
    }

    /// Find the next non-comment line after the given line.
    ///
    /// Skips over consecutive comment lines to find the actual code line the
    /// directive applies to, limited to [`MAX_COMMENT_CHAIN_LINES`].
    fn find_next_non_comment_line(line: usize, comment_lines: &HashSet<usize>) -> usize {
        let mut next = line + 1;
        let max_line = line + MAX_COMMENT_CHAIN_LINES;
        while comment_lines.contains(&next) && next < max_line {
            next += 1;
        }
        next
    }
}
