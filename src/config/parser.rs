use crate::config::types::{RuleFile, RuleSpec};
use crate::error::{OnefileError, Result};
use crate::rules::{Matcher, Rewriter, Rule};
use std::path::Path;

/// Parse a rule file from the given path.
pub fn parse_config_file(path: &Path) -> Result<RuleFile> {
	let content = std::fs::read_to_string(path).map_err(|source| OnefileError::ConfigReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse a rule file from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<RuleFile> {
	let config: RuleFile =
		toml::from_str(content).map_err(|source| OnefileError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		})?;

	config.validate()?;

	Ok(config)
}

/// Compile validated rule specs into a [`Rewriter`].
pub fn compile_rules(config: &RuleFile) -> Result<Rewriter> {
	config
		.rules
		.iter()
		.enumerate()
		.map(|(index, spec)| compile_rule(index, spec))
		.collect::<Result<Vec<_>>>()
		.map(Rewriter::new)
}

fn compile_rule(index: usize, spec: &RuleSpec) -> Result<Rule> {
	spec.validate(index)?;

	let matcher = match (&spec.literal, &spec.pattern) {
		(Some(text), _) => Matcher::literal(text.as_str()),
		(None, Some(pattern)) => Matcher::pattern(pattern)?,
		(None, None) => {
			return Err(OnefileError::MissingMatch {
				rule: spec.display_name(index),
			});
		}
	};

	Ok(Rule {
		name: spec.display_name(index),
		expand: spec.expand && matches!(matcher, Matcher::Pattern(_)),
		matcher,
		replacement: spec.replacement.clone(),
		limit: spec.limit,
	})
}

/// Load a rule file and compile it.
pub fn load_rewriter(path: &Path) -> Result<Rewriter> {
	let config = parse_config_file(path)?;
	compile_rules(&config)
}
