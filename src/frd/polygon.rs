//! Polygon block (`POLYGONBLOCK`) decoders.
//!
//! A polygon block is 7 road polygon chunks followed by 4 object-polygon
//! blocks. Chunks and poly-object records are consumed without being recorded.

use crate::frd::bytes::Cursor;
use crate::frd::{FrdError, RecordKind, RecordTree, Result};

const CHUNKS_PER_BLOCK: usize = 7;
const OBJ_POLY_BLOCKS_PER_BLOCK: usize = 4;
const POLYGON_SIZE: usize = 14;

/// Type tag of a poly-object record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyObjTag {
	/// Tag `1`: polygon count and polygons follow.
	Polygons,
	/// Tag `3`: no body.
	Marker3,
	/// Tag `4`: no body.
	Marker4,
}

impl PolyObjTag {
	/// Legal raw tag values.
	pub const LEGAL: &'static [i32] = &[1, 3, 4];

	/// Map a raw tag; `at` is the tag field offset used for errors.
	pub fn from_raw(tag: i32, at: usize) -> Result<Self> {
		match tag {
			1 => Ok(Self::Polygons),
			3 => Ok(Self::Marker3),
			4 => Ok(Self::Marker4),
			_ => Err(FrdError::InvalidTag {
				record: "POLYOBJDATA",
				at,
				tag,
				expected: Self::LEGAL,
			}),
		}
	}
}

/// Decode one polygon block and its object-polygon children.
pub(crate) fn decode_polygon_block(cursor: &mut Cursor<'_>, tree: &mut RecordTree, depth: u32) -> Result<()> {
	tree.push(cursor.pos(), depth, RecordKind::PolygonBlock);

	for _ in 0..CHUNKS_PER_BLOCK {
		decode_polygon_chunk(cursor)?;
	}
	for _ in 0..OBJ_POLY_BLOCKS_PER_BLOCK {
		decode_obj_poly_block(cursor, tree, depth + 1)?;
	}
	Ok(())
}

fn decode_polygon_chunk(cursor: &mut Cursor<'_>) -> Result<()> {
	let polygons = cursor.read_count("POLYGONCHUNK", "nPolygons")?;
	if polygons > 0 {
		cursor.advance(4)?;
		cursor.skip_span(polygons, POLYGON_SIZE)?;
	}
	Ok(())
}

fn decode_obj_poly_block(cursor: &mut Cursor<'_>, tree: &mut RecordTree, depth: u32) -> Result<()> {
	tree.push(cursor.pos(), depth, RecordKind::ObjPolyBlock);

	let flag = cursor.read_i32_le()?;
	if flag == 0 {
		return Ok(());
	}

	let objects = cursor.read_count("OBJPOLYBLOCK", "nObjects")?;
	for _ in 0..objects {
		decode_poly_obj_data(cursor)?;
	}
	Ok(())
}

fn decode_poly_obj_data(cursor: &mut Cursor<'_>) -> Result<()> {
	let at = cursor.pos();
	let tag = PolyObjTag::from_raw(cursor.read_i32_le()?, at)?;
	match tag {
		PolyObjTag::Marker3 | PolyObjTag::Marker4 => Ok(()),
		PolyObjTag::Polygons => {
			let polygons = cursor.read_count("POLYOBJDATA", "nPolygons")?;
			cursor.skip_span(polygons, POLYGON_SIZE)
		}
	}
}
