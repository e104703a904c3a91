//! Rule matching and rewriting for onefile.
//!
//! This module handles:
//! - Literal and regex matchers with optional occurrence limits
//! - Ordered application of rules to a document
//! - The built-in Coreus rule set

pub mod builtin;
pub mod matcher;
pub mod rewriter;

pub use builtin::{builtin_rewriter, builtin_rules};
pub use matcher::Matcher;
pub use rewriter::{Rewriter, Rewritten, Rule, RuleOutcome};
