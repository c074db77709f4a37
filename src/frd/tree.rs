use std::collections::BTreeMap;

use serde::Serialize;

/// Kind tag of a recorded FRD record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordKind {
	/// Whole-file root record.
	File,
	/// Track block with vertices, neighbour table, and per-block arrays.
	TrkBlock,
	/// Polygon block holding road chunks and object-polygon blocks.
	PolygonBlock,
	/// Object-polygon block inside a polygon block.
	ObjPolyBlock,
	/// Extra-object block.
	XObjBlock,
	/// One extra object inside an extra-object block.
	XObjData,
	/// Fixed-size texture table entry.
	TextureBlock,
}

impl RecordKind {
	/// Every kind, in file order.
	pub const ALL: [RecordKind; 7] = [
		Self::File,
		Self::TrkBlock,
		Self::PolygonBlock,
		Self::ObjPolyBlock,
		Self::XObjBlock,
		Self::XObjData,
		Self::TextureBlock,
	];

	/// Stable tag used in listings and errors.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::File => "FILE",
			Self::TrkBlock => "TRKBLOCK",
			Self::PolygonBlock => "POLYGONBLOCK",
			Self::ObjPolyBlock => "OBJPOLYBLOCK",
			Self::XObjBlock => "XOBJBLOCK",
			Self::XObjData => "XOBJDATA",
			Self::TextureBlock => "TEXTUREBLOCK",
		}
	}
}

/// One visited record: where it starts, how deep it sits, what it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordNode {
	/// Byte offset where the record begins.
	pub offset: u32,
	/// Nesting depth, root is 0.
	pub depth: u32,
	/// Record kind.
	pub kind: RecordKind,
}

/// Append-only pre-order sequence of visited records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecordTree {
	nodes: Vec<RecordNode>,
}

impl RecordTree {
	/// Create an empty tree.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a node for a record starting at `offset`.
	pub fn push(&mut self, offset: usize, depth: u32, kind: RecordKind) {
		// Walker::new rejects buffers past u32::MAX, so every offset fits.
		let offset = u32::try_from(offset).unwrap_or(u32::MAX);
		tracing::trace!(kind = kind.as_str(), offset, depth, "record");
		self.nodes.push(RecordNode { offset, depth, kind });
	}

	/// Visited nodes in pre-order.
	pub fn nodes(&self) -> &[RecordNode] {
		&self.nodes
	}

	/// Number of visited nodes.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Whether no node was recorded.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Iterate nodes in pre-order.
	pub fn iter(&self) -> std::slice::Iter<'_, RecordNode> {
		self.nodes.iter()
	}

	/// Tally nodes per kind; kinds that never occur are omitted.
	pub fn kind_counts(&self) -> BTreeMap<RecordKind, usize> {
		let mut counts = BTreeMap::new();
		for node in &self.nodes {
			*counts.entry(node.kind).or_insert(0) += 1;
		}
		counts
	}
}

impl<'a> IntoIterator for &'a RecordTree {
	type Item = &'a RecordNode;
	type IntoIter = std::slice::Iter<'a, RecordNode>;

	fn into_iter(self) -> Self::IntoIter {
		self.nodes.iter()
	}
}
