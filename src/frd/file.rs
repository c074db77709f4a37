use std::fs;
use std::path::Path;

use crate::frd::{Result, WalkResult, Walker};

/// FRD file bytes loaded fully into memory.
pub struct FrdFile {
	bytes: Vec<u8>,
}

impl FrdFile {
	/// Read a track file from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let bytes = fs::read(path)?;
		tracing::debug!(len = bytes.len(), "read track file");
		Ok(Self { bytes })
	}

	/// Raw file bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Walk and validate the whole file.
	pub fn walk(&self) -> Result<WalkResult> {
		Walker::new(&self.bytes)?.run()
	}
}
