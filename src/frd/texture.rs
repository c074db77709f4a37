use crate::frd::bytes::Cursor;
use crate::frd::{RecordKind, RecordTree, Result};

/// Size of one texture table entry.
pub const TEXTURE_BLOCK_SIZE: usize = 47;

/// Record and skip one texture block.
pub(crate) fn decode_texture_block(cursor: &mut Cursor<'_>, tree: &mut RecordTree, depth: u32) -> Result<()> {
	tree.push(cursor.pos(), depth, RecordKind::TextureBlock);
	cursor.advance(TEXTURE_BLOCK_SIZE)
}
