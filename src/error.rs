use std::path::PathBuf;

/// Library-level structured errors for onefile.
///
/// Rules that find nothing to replace are not errors; only I/O and rule
/// definition problems end up here. The CLI binary wraps these with `anyhow`.
#[derive(Debug, thiserror::Error)]
pub enum OnefileError {
	#[error("Input file not found: {path}")]
	InputNotFound { path: PathBuf },

	#[error("Failed to read input file: {path}")]
	InputReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write output file: {path}")]
	OutputWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read rule file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse rule file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid regex pattern in rule: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Mutually exclusive options in rule {rule}: {option1} and {option2}")]
	MutuallyExclusive {
		rule: String,
		option1: String,
		option2: String,
	},

	#[error("Rule {rule} needs either `literal` or `pattern`")]
	MissingMatch { rule: String },

	#[error("Rule {rule} has limit = 0; omit `limit` to replace every occurrence")]
	InvalidLimit { rule: String },
}

/// Result type alias using OnefileError.
pub type Result<T> = std::result::Result<T, OnefileError>;
