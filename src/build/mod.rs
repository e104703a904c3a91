//! Read, rewrite, write: the single-file build.

pub mod report;

pub use report::{RewriteReport, group_thousands};

use crate::error::{OnefileError, Result};
use crate::rules::{Rewriter, builtin_rewriter};
use std::path::Path;
use tracing::{debug, info};

/// Default source document.
pub const DEFAULT_INPUT: &str = "index.html";

/// Default standalone build.
pub const DEFAULT_OUTPUT: &str = "coreus-onefile.html";

/// Build `output` from `input` with the built-in rule set.
pub fn rewrite(input: &Path, output: &Path) -> Result<RewriteReport> {
	let rewriter = builtin_rewriter()?;
	rewrite_with(input, output, &rewriter)
}

/// Build `output` from `input` with a caller-supplied rule set.
///
/// Fails with [`OnefileError::InputNotFound`] before anything is written if
/// `input` does not exist. An existing `output` is overwritten.
pub fn rewrite_with(input: &Path, output: &Path, rewriter: &Rewriter) -> Result<RewriteReport> {
	if !input.exists() {
		return Err(OnefileError::InputNotFound {
			path: input.to_path_buf(),
		});
	}

	let document = std::fs::read_to_string(input).map_err(|source| OnefileError::InputReadError {
		path: input.to_path_buf(),
		source,
	})?;
	debug!(path = %input.display(), bytes = document.len(), "read input");

	let rewritten = rewriter.apply(&document);

	std::fs::write(output, &rewritten.text).map_err(|source| OnefileError::OutputWriteError {
		path: output.to_path_buf(),
		source,
	})?;

	let input_bytes = file_size(input).map_err(|source| OnefileError::InputReadError {
		path: input.to_path_buf(),
		source,
	})?;
	let output_bytes = file_size(output).map_err(|source| OnefileError::OutputWriteError {
		path: output.to_path_buf(),
		source,
	})?;

	let report = RewriteReport {
		input_path: input.to_path_buf(),
		output_path: output.to_path_buf(),
		input_bytes,
		output_bytes,
		outcomes: rewritten.outcomes,
	};

	let unmatched = report.unmatched_rules().count();
	info!(
		output = %output.display(),
		rules = report.outcomes.len(),
		unmatched,
		"build complete"
	);

	Ok(report)
}

fn file_size(path: &Path) -> std::io::Result<u64> {
	std::fs::metadata(path).map(|m| m.len())
}
