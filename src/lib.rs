//! Onefile - build a standalone single-file copy of an HTML page.
//!
//! This library provides the core functionality for onefile, including:
//! - Literal and regex rewrite rules with occurrence limits
//! - The built-in rule set for the Coreus `index.html`
//! - Optional TOML rule files
//! - The read, rewrite, write and report build step
//!
//! # Example
//!
//! ```no_run
//! use onefile::build::{rewrite, DEFAULT_INPUT, DEFAULT_OUTPUT};
//! use std::path::Path;
//!
//! let report = rewrite(Path::new(DEFAULT_INPUT), Path::new(DEFAULT_OUTPUT)).unwrap();
//! println!("{report}");
//! ```

pub mod build;
pub mod config;
pub mod error;
pub mod rules;

pub use build::{RewriteReport, rewrite, rewrite_with};
pub use error::{OnefileError, Result};
