use crate::error::{OnefileError, Result};
use regex::{NoExpand, Regex};
use std::borrow::Cow;

/// What a rule looks for in the document.
#[derive(Debug, Clone)]
pub enum Matcher {
	/// Exact substring, whitespace and quoting included.
	Literal(String),

	/// Compiled regex pattern.
	Pattern(Regex),
}

impl Matcher {
	/// Build a literal matcher.
	pub fn literal(text: impl Into<String>) -> Self {
		Matcher::Literal(text.into())
	}

	/// Compile a pattern matcher.
	pub fn pattern(pattern: &str) -> Result<Self> {
		compile_regex(pattern).map(Matcher::Pattern)
	}

	/// Short label for listings ("literal" or "pattern").
	pub fn kind(&self) -> &'static str {
		match self {
			Matcher::Literal(_) => "literal",
			Matcher::Pattern(_) => "pattern",
		}
	}

	/// The literal text or the pattern source.
	pub fn as_str(&self) -> &str {
		match self {
			Matcher::Literal(text) => text,
			Matcher::Pattern(regex) => regex.as_str(),
		}
	}

	/// Count matches in `haystack`, stopping at `limit` when one is given.
	pub fn count(&self, haystack: &str, limit: Option<usize>) -> usize {
		let cap = limit.unwrap_or(usize::MAX);
		match self {
			// An empty literal would match between every character.
			Matcher::Literal(text) if text.is_empty() => 0,
			Matcher::Literal(text) => haystack.matches(text.as_str()).take(cap).count(),
			Matcher::Pattern(regex) => regex.find_iter(haystack).take(cap).count(),
		}
	}

	/// Replace the first `limit` matches (all of them when `limit` is `None`).
	///
	/// `replacement` is inserted verbatim unless `expand` is set on a pattern
	/// matcher, in which case `$1` / `${name}` refer to capture groups.
	pub fn replace<'h>(
		&self,
		haystack: &'h str,
		replacement: &str,
		limit: Option<usize>,
		expand: bool,
	) -> Cow<'h, str> {
		if self.count(haystack, Some(1)) == 0 {
			return Cow::Borrowed(haystack);
		}
		self.substitute(haystack, replacement, limit, expand)
	}

	/// [`Matcher::replace`] without the up-front match check, for callers that
	/// have already counted the matches.
	pub(crate) fn substitute<'h>(
		&self,
		haystack: &'h str,
		replacement: &str,
		limit: Option<usize>,
		expand: bool,
	) -> Cow<'h, str> {
		match self {
			Matcher::Literal(text) if text.is_empty() => Cow::Borrowed(haystack),
			Matcher::Literal(text) => match limit {
				Some(n) => Cow::Owned(haystack.replacen(text.as_str(), replacement, n)),
				None => Cow::Owned(haystack.replace(text.as_str(), replacement)),
			},
			Matcher::Pattern(regex) => {
				// regex treats a limit of 0 as "replace all".
				let n = limit.unwrap_or(0);
				if expand {
					regex.replacen(haystack, n, replacement)
				} else {
					regex.replacen(haystack, n, NoExpand(replacement))
				}
			}
		}
	}
}

/// Compile a regex pattern string.
pub(crate) fn compile_regex(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| OnefileError::InvalidRegex {
		pattern: pattern.to_string(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_compile_valid_regex() {
		let result = compile_regex(r"<p[^>]*>");
		assert!(result.is_ok());
	}

	#[test]
	fn test_compile_invalid_regex() {
		let result = Matcher::pattern(r"[invalid");
		assert!(result.is_err());
		match result.unwrap_err() {
			OnefileError::InvalidRegex { pattern, .. } => {
				assert_eq!(pattern, "[invalid");
			}
			_ => panic!("Expected InvalidRegex error"),
		}
	}

	#[test]
	fn test_literal_replace_all() {
		let m = Matcher::literal("./assets/");
		let out = m.replace("a ./assets/ b ./assets/", "X/", None, false);
		assert_eq!(out, "a X/ b X/");
	}

	#[test]
	fn test_literal_replace_bounded() {
		let m = Matcher::literal("foo");
		assert_eq!(m.replace("foo foo foo", "bar", Some(1), false), "bar foo foo");
		assert_eq!(m.replace("foo foo foo", "bar", Some(2), false), "bar bar foo");
	}

	#[test]
	fn test_literal_no_match_borrows_input() {
		let m = Matcher::literal("missing");
		let out = m.replace("nothing here", "x", None, false);
		assert!(matches!(out, Cow::Borrowed(_)));
	}

	#[test]
	fn test_empty_literal_is_a_no_op() {
		let m = Matcher::literal("");
		assert_eq!(m.count("abc", None), 0);
		assert_eq!(m.replace("abc", "x", None, false), "abc");
	}

	#[test]
	fn test_count_respects_limit() {
		let m = Matcher::literal("a");
		assert_eq!(m.count("aaaa", None), 4);
		assert_eq!(m.count("aaaa", Some(2)), 2);
	}

	#[test]
	fn test_pattern_replacement_is_verbatim_by_default() {
		let m = Matcher::pattern(r"src=[^>\s]+").unwrap();
		let out = m.replace("<img src=x>", "src=${imagePath}", None, false);
		assert_eq!(out, "<img src=${imagePath}>");
	}

	#[test]
	fn test_pattern_replacement_expands_captures_when_asked() {
		let m = Matcher::pattern(r"(\w+)@(\w+)").unwrap();
		let out = m.replace("user@host", "$2:$1", None, true);
		assert_eq!(out, "host:user");
	}

	#[test]
	fn test_pattern_replace_bounded() {
		let m = Matcher::pattern(r"\d").unwrap();
		assert_eq!(m.replace("1 2 3", "#", Some(2), false), "# # 3");
		assert_eq!(m.replace("1 2 3", "#", None, false), "# # #");
	}
}
