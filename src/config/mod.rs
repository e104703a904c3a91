//! Optional TOML rule files for onefile.
//!
//! This module handles:
//! - Rule file parsing and validation
//! - Compiling rule specs into a [`crate::rules::Rewriter`]

pub mod parser;
pub mod types;

pub use parser::{compile_rules, load_rewriter, parse_config_file, parse_config_str};
pub use types::{RuleFile, RuleSpec};
