//! Comment directive handling (suppressions).

pub mod collector;
pub mod directive;
pub mod suppressions;

pub use collector::CommentCollector;
pub use suppressions::{SuppressibleRule, Suppressions};
