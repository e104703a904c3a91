use crate::error::OnefileError;
use serde::Deserialize;

/// Top-level contents of a rule file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleFile {
	/// Rules in application order.
	#[serde(default)]
	pub rules: Vec<RuleSpec>,
}

/// One rule as written in TOML, before its pattern is compiled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
	/// Display name. Defaults to `rule-<n>` (1-based).
	pub name: Option<String>,

	/// Exact substring to replace (mutually exclusive with `pattern`).
	pub literal: Option<String>,

	/// Regex to replace (mutually exclusive with `literal`).
	pub pattern: Option<String>,

	/// Replacement text. Empty deletes the match.
	#[serde(default)]
	pub replacement: String,

	/// Replace only the first `limit` occurrences.
	pub limit: Option<usize>,

	/// Expand `$1` / `${name}` capture references in `replacement`.
	/// Ignored for literal rules.
	#[serde(default)]
	pub expand: bool,
}

impl RuleSpec {
	/// Name used in listings and error messages.
	pub fn display_name(&self, index: usize) -> String {
		self.name
			.clone()
			.unwrap_or_else(|| format!("rule-{}", index + 1))
	}

	/// Validate the rule without compiling it.
	pub fn validate(&self, index: usize) -> Result<(), OnefileError> {
		let rule = self.display_name(index);

		match (&self.literal, &self.pattern) {
			(Some(_), Some(_)) => {
				return Err(OnefileError::MutuallyExclusive {
					rule,
					option1: "literal".to_string(),
					option2: "pattern".to_string(),
				});
			}
			(None, None) => return Err(OnefileError::MissingMatch { rule }),
			_ => {}
		}

		if self.limit == Some(0) {
			return Err(OnefileError::InvalidLimit { rule });
		}

		Ok(())
	}
}

impl RuleFile {
	/// Validate all rules in this file.
	pub fn validate(&self) -> Result<(), OnefileError> {
		for (index, rule) in self.rules.iter().enumerate() {
			rule.validate(index)?;
		}
		Ok(())
	}
}
