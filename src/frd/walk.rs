use std::collections::BTreeMap;

use serde::Serialize;

use crate::frd::bytes::Cursor;
use crate::frd::polygon::decode_polygon_block;
use crate::frd::texture::{TEXTURE_BLOCK_SIZE, decode_texture_block};
use crate::frd::track::decode_track_block;
use crate::frd::xobj::decode_xobj_block;
use crate::frd::{FrdError, RecordKind, RecordTree, Result};

/// Size of the uninterpreted file header.
pub const HEADER_SIZE: usize = 28;

/// Successful walk output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkResult {
	/// Declared block count `N`; the file holds `N + 1` track blocks.
	pub block_count: u32,
	/// Declared texture count.
	pub texture_count: u32,
	/// Terminal cursor offset, equal to `buffer_len`.
	pub end_offset: usize,
	/// Buffer length in bytes.
	pub buffer_len: usize,
	/// Every visited record in pre-order.
	pub tree: RecordTree,
}

impl WalkResult {
	/// Tally recorded nodes per kind.
	pub fn kind_counts(&self) -> BTreeMap<RecordKind, usize> {
		self.tree.kind_counts()
	}
}

/// Single-pass walker over one FRD buffer.
///
/// Nodes appended before a failure stay readable through [`Walker::tree`].
pub struct Walker<'a> {
	cursor: Cursor<'a>,
	tree: RecordTree,
}

impl<'a> Walker<'a> {
	/// Create a walker at offset 0.
	pub fn new(bytes: &'a [u8]) -> Result<Self> {
		if u32::try_from(bytes.len()).is_err() {
			return Err(FrdError::BufferTooLarge { len: bytes.len() });
		}

		Ok(Self {
			cursor: Cursor::new(bytes),
			tree: RecordTree::new(),
		})
	}

	/// Current cursor offset.
	pub fn pos(&self) -> usize {
		self.cursor.pos()
	}

	/// Nodes recorded so far.
	pub fn tree(&self) -> &RecordTree {
		&self.tree
	}

	/// Walk the whole buffer from the root record.
	///
	/// On success the tree moves into the result. The walker is single-use:
	/// a second call fails with [`FrdError::WalkerReused`] and leaves the tree as is.
	pub fn run(&mut self) -> Result<WalkResult> {
		if self.cursor.pos() != 0 || !self.tree.is_empty() {
			return Err(FrdError::WalkerReused { pos: self.cursor.pos() });
		}

		let len = self.cursor.len();
		tracing::debug!(len, "walk start");

		let (block_count, texture_count) = match decode_file(&mut self.cursor, &mut self.tree) {
			Ok(counts) => counts,
			Err(err) => {
				tracing::debug!(%err, nodes = self.tree.len(), pos = self.cursor.pos(), "walk failed");
				return Err(err);
			}
		};

		tracing::debug!(block_count, texture_count, nodes = self.tree.len(), "walk done");
		Ok(WalkResult {
			block_count,
			texture_count,
			end_offset: self.cursor.pos(),
			buffer_len: len,
			tree: std::mem::take(&mut self.tree),
		})
	}
}

/// Walk `bytes` as one FRD file and validate it is consumed exactly.
pub fn walk_frd(bytes: &[u8]) -> Result<WalkResult> {
	Walker::new(bytes)?.run()
}

fn decode_file(cursor: &mut Cursor<'_>, tree: &mut RecordTree) -> Result<(u32, u32)> {
	tree.push(cursor.pos(), 0, RecordKind::File);
	let depth = 1;

	cursor.advance(HEADER_SIZE)?;
	let blocks = cursor.read_count("FILE", "nBlocks")?;
	let block_count = counter_u32(blocks);
	let blocks = blocks + 1;

	for _ in 0..blocks {
		decode_track_block(cursor, tree, depth)?;
	}
	for _ in 0..blocks {
		decode_polygon_block(cursor, tree, depth)?;
	}
	for _ in 0..blocks.saturating_mul(4).saturating_add(1) {
		decode_xobj_block(cursor, tree, depth)?;
	}

	let textures = cursor.read_count("FILE", "nTextures")?;
	let table_end = textures
		.checked_mul(TEXTURE_BLOCK_SIZE)
		.and_then(|size| cursor.pos().checked_add(size))
		.unwrap_or(usize::MAX);
	if table_end > cursor.len() {
		return Err(FrdError::LengthMismatch {
			end: table_end,
			len: cursor.len(),
		});
	}
	for _ in 0..textures {
		decode_texture_block(cursor, tree, depth)?;
	}

	if cursor.pos() != cursor.len() {
		return Err(FrdError::LengthMismatch {
			end: cursor.pos(),
			len: cursor.len(),
		});
	}
	Ok((block_count, counter_u32(textures)))
}

fn counter_u32(count: usize) -> u32 {
	// Counters are read from i32 fields, so they always fit.
	u32::try_from(count).unwrap_or(u32::MAX)
}
