#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "frdwalk", about = "FRD track file structure walker")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Walk a file and print every record.
	Walk(cmd::walk::Args),
	/// Print declared counts and per-kind record totals.
	Info(cmd::info::Args),
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> frdwalk::frd::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Walk(args) => cmd::walk::run(args),
		Commands::Info(args) => cmd::info::run(args),
	}
}
