use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, trace};

use onefile::build::{DEFAULT_INPUT, DEFAULT_OUTPUT, rewrite_with};
use onefile::config::load_rewriter;
use onefile::rules::{Rewriter, builtin_rewriter};

#[derive(Parser)]
#[command(name = "onefile")]
#[command(
	author,
	version,
	about = "Build a standalone single-file copy of an HTML page by rewriting asset references"
)]
struct Cli {
	/// Source HTML document
	#[arg(default_value = DEFAULT_INPUT)]
	input: PathBuf,

	/// Where to write the standalone build (overwritten if present)
	#[arg(default_value = DEFAULT_OUTPUT)]
	output: PathBuf,

	/// Load rewrite rules from a TOML file instead of the built-in set
	#[arg(long, value_name = "FILE")]
	rules: Option<PathBuf>,

	/// Print the rules that would be applied, in order, and exit
	#[arg(long)]
	list_rules: bool,

	/// Increase log verbosity (-v debug, -vv trace)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	match run(cli) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_logging(verbose: u8) {
	let default_level = match verbose {
		0 => "warn",
		1 => "debug",
		_ => "trace",
	};
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(verbose >= 2)
		.init();

	trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}

fn run(cli: Cli) -> Result<ExitCode> {
	let rewriter = load_rules(cli.rules.as_deref())?;

	if cli.list_rules {
		return handle_list_rules(&rewriter);
	}

	// No context here: a missing input should read as a single line.
	let report = rewrite_with(&cli.input, &cli.output, &rewriter)?;

	for name in report.unmatched_rules() {
		debug!(rule = name, "rule matched nothing");
	}

	println!("{report}");
	Ok(ExitCode::SUCCESS)
}

fn load_rules(path: Option<&Path>) -> Result<Rewriter> {
	match path {
		Some(path) => {
			debug!(path = %path.display(), "loading rule file");
			load_rewriter(path).with_context(|| format!("Invalid rule file: {}", path.display()))
		}
		None => builtin_rewriter().context("Failed to compile built-in rules"),
	}
}

fn handle_list_rules(rewriter: &Rewriter) -> Result<ExitCode> {
	if rewriter.rules().is_empty() {
		println!("No rules defined.");
		return Ok(ExitCode::SUCCESS);
	}

	println!("Rules (in application order):\n");

	for (i, rule) in rewriter.rules().iter().enumerate() {
		println!("  Rule {}: {}", i + 1, rule.name);
		println!("    {}: {}", rule.matcher.kind(), rule.matcher.as_str());
		println!("    replacement: {}", rule.replacement);
		match rule.limit {
			Some(n) => println!("    limit: {}", n),
			None => println!("    limit: all"),
		}
		if rule.expand {
			println!("    expand: true");
		}
		println!();
	}

	Ok(ExitCode::SUCCESS)
}
