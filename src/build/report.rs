use crate::rules::RuleOutcome;
use std::fmt;
use std::path::PathBuf;

/// What a successful build produced.
#[derive(Debug, Clone)]
pub struct RewriteReport {
	pub input_path: PathBuf,
	pub output_path: PathBuf,

	/// Size of the input file on disk, in bytes.
	pub input_bytes: u64,

	/// Size of the written output file, in bytes.
	pub output_bytes: u64,

	/// Per-rule replacement counts, in application order.
	pub outcomes: Vec<RuleOutcome>,
}

impl RewriteReport {
	/// Rules that found nothing to replace.
	pub fn unmatched_rules(&self) -> impl Iterator<Item = &str> {
		self.outcomes
			.iter()
			.filter(|o| o.replacements == 0)
			.map(|o| o.name.as_str())
	}
}

impl fmt::Display for RewriteReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Built {} successfully.", self.output_path.display())?;
		writeln!(
			f,
			"  Source: {} ({} bytes)",
			self.input_path.display(),
			group_thousands(self.input_bytes)
		)?;
		write!(
			f,
			"  Output: {} ({} bytes)",
			self.output_path.display(),
			group_thousands(self.output_bytes)
		)
	}
}

/// Format `n` with `,` between each group of three digits.
pub fn group_thousands(n: u64) -> String {
	let digits = n.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, c) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i).is_multiple_of(3) {
			out.push(',');
		}
		out.push(c);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_group_thousands() {
		assert_eq!(group_thousands(0), "0");
		assert_eq!(group_thousands(999), "999");
		assert_eq!(group_thousands(1000), "1,000");
		assert_eq!(group_thousands(123456), "123,456");
		assert_eq!(group_thousands(1234567), "1,234,567");
	}

	#[test]
	fn test_report_display() {
		let report = RewriteReport {
			input_path: PathBuf::from("index.html"),
			output_path: PathBuf::from("coreus-onefile.html"),
			input_bytes: 48213,
			output_bytes: 48877,
			outcomes: vec![],
		};

		assert_eq!(
			report.to_string(),
			"Built coreus-onefile.html successfully.\n  \
			 Source: index.html (48,213 bytes)\n  \
			 Output: coreus-onefile.html (48,877 bytes)"
		);
	}

	#[test]
	fn test_unmatched_rules() {
		let report = RewriteReport {
			input_path: PathBuf::from("in.html"),
			output_path: PathBuf::from("out.html"),
			input_bytes: 0,
			output_bytes: 0,
			outcomes: vec![
				RuleOutcome {
					name: "hit".to_string(),
					replacements: 1,
				},
				RuleOutcome {
					name: "miss".to_string(),
					replacements: 0,
				},
			],
		};

		assert_eq!(report.unmatched_rules().collect::<Vec<_>>(), vec!["miss"]);
	}
}
