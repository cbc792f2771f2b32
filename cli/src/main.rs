mod error;

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use colored::Colorize;
use error::*;
use irgen::{Config, OpcodeTable, Target};

#[derive(Parser)]
#[command(name = "irgen")]
#[command(about = "Generate the opcode table of the meep IR", long_about = None)]
#[command(version)]
struct Cli {
	/// Read mnemonics from a file instead of the built-in listing
	#[arg(short, long)]
	input: Option<PathBuf>,
	/// Artifact to (over)write
	#[arg(short, long, default_value = irgen::config::DEFAULT_OUTPUT)]
	out: PathBuf,
	/// Output language: js, rust or json
	#[arg(short, long, default_value = "js", value_parser = parse_target)]
	target: Target,
	/// Reject repeated mnemonics
	#[arg(long)]
	strict: bool,
	/// Exit with an error if the artifact is stale; write nothing
	#[arg(long, conflicts_with = "list")]
	check: bool,
	/// Print the table; write nothing
	#[arg(long)]
	list: bool,
	/// Only print warnings and errors
	#[arg(short, long)]
	quiet: bool,
}

fn parse_target(s: &str) -> Result<Target, String> {
	s.parse().map_err(|e: irgen::error::EmitError| e.to_string())
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	irgen::log::set_quiet(cli.quiet);
	match execute(cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("{} {}", "error:".red().bold(), e);
			ExitCode::FAILURE
		}
	}
}

fn execute(cli: Cli) -> CLIResult {
	let mut config = Config::default()
		.with_output(cli.out)
		.with_target(cli.target)
		.strict(cli.strict);
	if let Some(input) = cli.input {
		config = config.with_input_file(input)?;
	}

	if cli.list {
		list(&config.assign()?);
		Ok(())
	} else if cli.check {
		if irgen::check(&config)? {
			irgen::info!("{} is up to date", config.output.display());
			Ok(())
		} else {
			Err(CLIError::Stale(config.output))
		}
	} else {
		irgen::run(&config)?;
		Ok(())
	}
}

fn list(table: &OpcodeTable) {
	for entry in table {
		println!(
			"{}  {:<16} {}",
			format!("{:>4}", entry.code).cyan(),
			entry.mnemonic.as_str(),
			entry.mnemonic.upper().bold()
		);
	}
}
