use std::path::PathBuf;

use frdwalk::frd::{FrdFile, RecordKind, Result};
use serde_json::json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print declared counts and record totals for a track file.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let file = FrdFile::open(&path)?;
	let result = file.walk()?;
	let counts = result.kind_counts();

	if json {
		let records: serde_json::Map<_, _> = RecordKind::ALL
			.into_iter()
			.map(|kind| (kind.as_str().to_owned(), json!(counts.get(&kind).copied().unwrap_or(0))))
			.collect();
		let doc = json!({
			"path": path.display().to_string(),
			"size": result.buffer_len,
			"block_count": result.block_count,
			"track_blocks": result.block_count + 1,
			"texture_count": result.texture_count,
			"end_offset": result.end_offset,
			"nodes": result.tree.len(),
			"records": records,
		});
		println!("{}", serde_json::to_string_pretty(&doc)?);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("size: {}", result.buffer_len);
	println!("block_count: {}", result.block_count);
	println!("track_blocks: {}", result.block_count + 1);
	println!("texture_count: {}", result.texture_count);
	println!("end_offset: {}", result.end_offset);
	println!("nodes: {}", result.tree.len());
	println!("records:");
	for kind in RecordKind::ALL {
		println!("  {}: {}", kind.as_str(), counts.get(&kind).copied().unwrap_or(0));
	}

	Ok(())
}

#[cfg(test)]
mod tests;
