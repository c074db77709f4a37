//! Extra-object block (`XOBJBLOCK`) and extra-object (`XOBJDATA`) decoders.

use crate::frd::bytes::Cursor;
use crate::frd::{FrdError, RecordKind, RecordTree, Result};

const RECORD: &str = "XOBJDATA";

const STATIC_BODY_SIZE: usize = 12 + 4;
const ANIMATED_PREFIX_SIZE: usize = 9 * 2 + 1 + 1;
const ANIMATION_FRAME_SIZE: usize = 20;
const VERTEX_SIZE: usize = 12 + 4;
const POLYGON_SIZE: usize = 14;

/// Type tag of an extra object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XObjTag {
	/// Tag `3`: animated object with a frame table.
	Animated,
	/// Tag `4`: static object.
	Static,
}

impl XObjTag {
	/// Legal raw tag values.
	pub const LEGAL: &'static [i32] = &[3, 4];

	/// Map a raw tag; `at` is the tag field offset used for errors.
	pub fn from_raw(tag: i32, at: usize) -> Result<Self> {
		match tag {
			3 => Ok(Self::Animated),
			4 => Ok(Self::Static),
			_ => Err(FrdError::InvalidTag {
				record: RECORD,
				at,
				tag,
				expected: Self::LEGAL,
			}),
		}
	}
}

/// Decode one extra-object block and its objects.
pub(crate) fn decode_xobj_block(cursor: &mut Cursor<'_>, tree: &mut RecordTree, depth: u32) -> Result<()> {
	tree.push(cursor.pos(), depth, RecordKind::XObjBlock);

	let objects = cursor.read_count("XOBJBLOCK", "nObjects")?;
	for _ in 0..objects {
		decode_xobj_data(cursor, tree, depth + 1)?;
	}
	Ok(())
}

fn decode_xobj_data(cursor: &mut Cursor<'_>, tree: &mut RecordTree, depth: u32) -> Result<()> {
	let at = cursor.pos();
	tree.push(at, depth, RecordKind::XObjData);

	let tag = XObjTag::from_raw(cursor.read_i32_le()?, at)?;
	cursor.advance(4 + 4)?;
	match tag {
		XObjTag::Static => cursor.advance(STATIC_BODY_SIZE)?,
		XObjTag::Animated => {
			cursor.advance(ANIMATED_PREFIX_SIZE)?;
			let frames = cursor.read_count_i16(RECORD, "nAnimLength")?;
			cursor.advance(2)?;
			cursor.skip_span(frames, ANIMATION_FRAME_SIZE)?;
		}
	}

	let vertices = cursor.read_count(RECORD, "nVertices")?;
	cursor.skip_span(vertices, VERTEX_SIZE)?;
	let polygons = cursor.read_count(RECORD, "nPolygons")?;
	cursor.skip_span(polygons, POLYGON_SIZE)
}
