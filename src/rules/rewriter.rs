use crate::rules::matcher::Matcher;
use std::borrow::Cow;
use tracing::{debug, trace};

/// A single transformation: what to find, what to put there, and how many
/// occurrences to touch.
#[derive(Debug, Clone)]
pub struct Rule {
	/// Name shown in listings and log events.
	pub name: String,

	/// What to look for.
	pub matcher: Matcher,

	/// Text inserted in place of each match.
	pub replacement: String,

	/// Replace only the first `n` matches; `None` replaces all of them.
	pub limit: Option<usize>,

	/// Expand `$1` / `${name}` capture references (pattern rules only).
	pub expand: bool,
}

impl Rule {
	/// Rule replacing every occurrence of a literal substring.
	pub fn literal(
		name: impl Into<String>,
		text: impl Into<String>,
		replacement: impl Into<String>,
	) -> Self {
		Rule {
			name: name.into(),
			matcher: Matcher::literal(text),
			replacement: replacement.into(),
			limit: None,
			expand: false,
		}
	}

	/// Rule replacing every match of a regex pattern.
	pub fn pattern(
		name: impl Into<String>,
		pattern: &str,
		replacement: impl Into<String>,
	) -> crate::Result<Self> {
		Ok(Rule {
			name: name.into(),
			matcher: Matcher::pattern(pattern)?,
			replacement: replacement.into(),
			limit: None,
			expand: false,
		})
	}

	/// Bound this rule to the first `n` occurrences.
	pub fn first(mut self, n: usize) -> Self {
		self.limit = Some(n);
		self
	}

	/// Apply this rule to `document`, returning the new text and the number
	/// of replacements made. Zero replacements is a normal outcome.
	pub fn apply<'d>(&self, document: &'d str) -> (Cow<'d, str>, usize) {
		let hits = self.matcher.count(document, self.limit);
		if hits == 0 {
			return (Cow::Borrowed(document), 0);
		}

		let rewritten = self
			.matcher
			.substitute(document, &self.replacement, self.limit, self.expand);
		(rewritten, hits)
	}
}

/// How a rule fared during one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
	pub name: String,
	pub replacements: usize,
}

/// Result of running a [`Rewriter`] over a document.
#[derive(Debug, Clone)]
pub struct Rewritten {
	pub text: String,
	pub outcomes: Vec<RuleOutcome>,
}

/// An ordered list of rules. Each rule sees the output of every rule before it.
#[derive(Debug, Clone, Default)]
pub struct Rewriter {
	rules: Vec<Rule>,
}

impl Rewriter {
	pub fn new(rules: Vec<Rule>) -> Self {
		Rewriter { rules }
	}

	/// The rules in application order.
	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}

	/// Run every rule over `document`, in order.
	pub fn apply(&self, document: &str) -> Rewritten {
		let mut text = document.to_string();
		let mut outcomes = Vec::with_capacity(self.rules.len());

		for rule in &self.rules {
			let (next, replacements) = rule.apply(&text);
			let changed = match next {
				Cow::Owned(rewritten) => Some(rewritten),
				Cow::Borrowed(_) => None,
			};
			match changed {
				Some(rewritten) => {
					debug!(rule = %rule.name, replacements, "applied");
					text = rewritten;
				}
				None => debug!(rule = %rule.name, "no match, left unchanged"),
			}
			trace!(rule = %rule.name, len = text.len(), "document length");

			outcomes.push(RuleOutcome {
				name: rule.name.clone(),
				replacements,
			});
		}

		Rewritten { text, outcomes }
	}
}
