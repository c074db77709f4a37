use std::path::PathBuf;
use std::time::Instant;

use frdwalk::frd::{FrdFile, Result, WalkResult};
use serde::Serialize;

use crate::cmd::print::{render_summary, render_tree};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Print a JSON document instead of the listing.
	#[arg(long)]
	pub json: bool,
	/// Print per-kind record totals instead of the listing.
	#[arg(long, conflicts_with = "json")]
	pub summary: bool,
}

#[derive(Serialize)]
struct WalkReport<'a> {
	path: String,
	elapsed_ms: f64,
	#[serde(flatten)]
	result: &'a WalkResult,
}

/// Walk a track file and print its record listing.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json, summary } = args;

	let file = FrdFile::open(&path)?;
	if !json {
		println!("Processing {}", path.display());
	}

	let started = Instant::now();
	let result = file.walk()?;
	let elapsed_ms = started.elapsed().as_secs_f64() * 1e3;

	if json {
		let report = WalkReport {
			path: path.display().to_string(),
			elapsed_ms,
			result: &result,
		};
		println!("{}", serde_json::to_string_pretty(&report)?);
		return Ok(());
	}

	if summary {
		print!("{}", render_summary(&result));
	} else {
		print!("{}", render_tree(&result));
	}

	let name = path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
	println!("Walking '{name}' with frdwalk took {elapsed_ms:.2} ms");
	Ok(())
}
