//! Track block (`TRKBLOCK`) decoder.
//!
//! ```text
//! [12]           block centre/bounds prefix
//! [12 x 4]       bounding points
//! i32            nVertices
//! [5 x 4]        vertex range fields
//! [nVertices x (12 + 4)]   vertex positions + shading
//! [4 x 300]      neighbour table
//! [4]            padding
//! i32 x 7        nPositions nPolygons nVroad nXobj nPolyobj nSoundsrc nLightsrc
//! arrays         8 8 12 20 20 16 16 bytes per element, same order
//! ```

use crate::frd::bytes::Cursor;
use crate::frd::{RecordKind, RecordTree, Result};

const RECORD: &str = "TRKBLOCK";

const PREFIX_SIZE: usize = 12 + 12 * 4;
const VERTEX_RANGE_SIZE: usize = 5 * 4;
const VERTEX_SIZE: usize = 12 + 4;
const NEIGHBOUR_TABLE_SIZE: usize = 4 * 300;
const PADDING_SIZE: usize = 4;

/// Per-block arrays in file order: counter name and element size.
const ARRAYS: [(&str, usize); 7] = [
	("nPositions", 8),
	("nPolygons", 8),
	("nVroad", 12),
	("nXobj", 20),
	("nPolyobj", 20),
	("nSoundsrc", 16),
	("nLightsrc", 16),
];

/// Decode one track block and record its node at `depth`.
pub(crate) fn decode_track_block(cursor: &mut Cursor<'_>, tree: &mut RecordTree, depth: u32) -> Result<()> {
	tree.push(cursor.pos(), depth, RecordKind::TrkBlock);

	cursor.advance(PREFIX_SIZE)?;
	let vertices = cursor.read_count(RECORD, "nVertices")?;
	cursor.advance(VERTEX_RANGE_SIZE)?;
	cursor.skip_span(vertices, VERTEX_SIZE)?;
	cursor.advance(NEIGHBOUR_TABLE_SIZE)?;
	cursor.advance(PADDING_SIZE)?;

	let mut counts = [0_usize; ARRAYS.len()];
	for (slot, (field, _)) in counts.iter_mut().zip(ARRAYS) {
		*slot = cursor.read_count(RECORD, field)?;
	}
	for (count, (_, elem_size)) in counts.into_iter().zip(ARRAYS) {
		cursor.skip_span(count, elem_size)?;
	}

	Ok(())
}
