//! Shared test helpers: synthetic FRD buffers and scratch paths.
//!
//! The builders run the FRD record grammar in reverse. Uninterpreted bytes are
//! filled with [`FILLER`] so a walker that misreads a span as a counter sees a
//! negative value instead of a plausible zero.

use std::path::{Path, PathBuf};

/// Size of the uninterpreted file header.
pub const HEADER_SIZE: usize = 28;
/// Size of one texture block.
pub const TEXTURE_SIZE: usize = 47;
/// Byte used for every uninterpreted span.
pub const FILLER: u8 = 0xcd;

/// Track block counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackSpec {
	/// Vertex count.
	pub vertices: i32,
	/// Position array length.
	pub positions: i32,
	/// Polygon array length.
	pub polygons: i32,
	/// Virtual-road array length.
	pub vroad: i32,
	/// Extra-object reference array length.
	pub xobj: i32,
	/// Poly-object reference array length.
	pub polyobj: i32,
	/// Sound source array length.
	pub soundsrc: i32,
	/// Light source array length.
	pub lightsrc: i32,
}

impl TrackSpec {
	/// Append the encoded track block to `out`.
	pub fn encode(&self, out: &mut Vec<u8>) {
		filler(out, 12 + 12 * 4);
		put_i32(out, self.vertices);
		filler(out, 5 * 4);
		filler(out, span(self.vertices, 12 + 4));
		filler(out, 4 * 300);
		filler(out, 4);

		let arrays = [
			(self.positions, 8),
			(self.polygons, 8),
			(self.vroad, 12),
			(self.xobj, 20),
			(self.polyobj, 20),
			(self.soundsrc, 16),
			(self.lightsrc, 16),
		];
		for (count, _) in arrays {
			put_i32(out, count);
		}
		for (count, size) in arrays {
			filler(out, span(count, size));
		}
	}
}

/// One poly-object record inside an object-polygon block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolyObjSpec {
	/// Tag `1` followed by a polygon count and its polygons.
	Polygons(i32),
	/// Body-less tag, legal values are `3` and `4`.
	Marker(i32),
}

/// Object-polygon block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ObjPolySpec {
	/// Zero flag, no body.
	#[default]
	Empty,
	/// Non-zero flag followed by an object count and objects.
	Objects {
		/// Non-zero flag value.
		flag: i32,
		/// Poly-object records.
		objects: Vec<PolyObjSpec>,
	},
}

/// Polygon block: seven chunk counts and four object-polygon blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolygonBlockSpec {
	/// Polygon count per chunk.
	pub chunks: [i32; 7],
	/// Object-polygon blocks.
	pub obj_polys: [ObjPolySpec; 4],
}

impl PolygonBlockSpec {
	/// Append the encoded polygon block to `out`.
	pub fn encode(&self, out: &mut Vec<u8>) {
		for count in self.chunks {
			put_i32(out, count);
			if count > 0 {
				filler(out, 4);
				filler(out, span(count, 14));
			}
		}
		for obj_poly in &self.obj_polys {
			match obj_poly {
				ObjPolySpec::Empty => put_i32(out, 0),
				ObjPolySpec::Objects { flag, objects } => {
					put_i32(out, *flag);
					put_i32(out, len_i32(objects.len()));
					for object in objects {
						match object {
							PolyObjSpec::Polygons(count) => {
								put_i32(out, 1);
								put_i32(out, *count);
								filler(out, span(*count, 14));
							}
							PolyObjSpec::Marker(tag) => put_i32(out, *tag),
						}
					}
				}
			}
		}
	}
}

/// Extra-object type and its type-specific body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XObjKind {
	/// Tag `4`.
	Static,
	/// Tag `3` with an animation of `anim_len` frames.
	Animated {
		/// Animation length.
		anim_len: i16,
	},
	/// Arbitrary tag with no body, for rejection tests.
	Raw(i32),
}

/// One extra object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XObjSpec {
	/// Type and body.
	pub kind: XObjKind,
	/// Vertex count of the common tail.
	pub vertices: i32,
	/// Polygon count of the common tail.
	pub polygons: i32,
}

impl XObjSpec {
	/// Static object with an empty tail.
	pub fn static_empty() -> Self {
		Self {
			kind: XObjKind::Static,
			vertices: 0,
			polygons: 0,
		}
	}

	/// Append the encoded extra object to `out`.
	pub fn encode(&self, out: &mut Vec<u8>) {
		match self.kind {
			XObjKind::Static => {
				put_i32(out, 4);
				filler(out, 4 + 4);
				filler(out, 12 + 4);
			}
			XObjKind::Animated { anim_len } => {
				put_i32(out, 3);
				filler(out, 4 + 4);
				filler(out, 9 * 2 + 1 + 1);
				out.extend_from_slice(&anim_len.to_le_bytes());
				filler(out, 2);
				filler(out, span(i32::from(anim_len), 20));
			}
			XObjKind::Raw(tag) => {
				put_i32(out, tag);
				filler(out, 4 + 4);
			}
		}
		put_i32(out, self.vertices);
		filler(out, span(self.vertices, 12 + 4));
		put_i32(out, self.polygons);
		filler(out, span(self.polygons, 14));
	}
}

/// Whole track file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackFile {
	/// `N + 1` track blocks.
	pub tracks: Vec<TrackSpec>,
	/// `N + 1` polygon blocks.
	pub polygon_blocks: Vec<PolygonBlockSpec>,
	/// `4 * (N + 1) + 1` extra-object blocks.
	pub xobj_blocks: Vec<Vec<XObjSpec>>,
	/// Texture count `T`.
	pub textures: usize,
}

impl TrackFile {
	/// Smallest legal file for block count `n_blocks` with all counters zero.
	pub fn minimal(n_blocks: usize) -> Self {
		let blocks = n_blocks + 1;
		Self {
			tracks: vec![TrackSpec::default(); blocks],
			polygon_blocks: vec![PolygonBlockSpec::default(); blocks],
			xobj_blocks: vec![Vec::new(); 4 * blocks + 1],
			textures: 0,
		}
	}

	/// Declared block count `N`.
	pub fn block_count(&self) -> i32 {
		len_i32(self.tracks.len()) - 1
	}

	/// Number of nodes a walker records for this file.
	pub fn expected_node_count(&self) -> usize {
		let obj_polys = 4 * self.polygon_blocks.len();
		let xobj_data: usize = self.xobj_blocks.iter().map(Vec::len).sum();
		1 + self.tracks.len() + self.polygon_blocks.len() + obj_polys + self.xobj_blocks.len() + xobj_data + self.textures
	}

	/// Encode the file.
	pub fn encode(&self) -> Vec<u8> {
		let mut out = Vec::new();
		filler(&mut out, HEADER_SIZE);
		put_i32(&mut out, self.block_count());
		for track in &self.tracks {
			track.encode(&mut out);
		}
		for block in &self.polygon_blocks {
			block.encode(&mut out);
		}
		for block in &self.xobj_blocks {
			put_i32(&mut out, len_i32(block.len()));
			for xobj in block {
				xobj.encode(&mut out);
			}
		}
		put_i32(&mut out, len_i32(self.textures));
		filler(&mut out, self.textures * TEXTURE_SIZE);
		out
	}
}

/// Append a little-endian `i32`.
pub fn put_i32(out: &mut Vec<u8>, value: i32) {
	out.extend_from_slice(&value.to_le_bytes());
}

/// Overwrite a little-endian `i32` at `offset`.
pub fn patch_i32(bytes: &mut [u8], offset: usize, value: i32) {
	bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

fn filler(out: &mut Vec<u8>, n: usize) {
	out.resize(out.len() + n, FILLER);
}

fn span(count: i32, size: usize) -> usize {
	usize::try_from(count).unwrap_or(0) * size
}

fn len_i32(len: usize) -> i32 {
	i32::try_from(len).expect("test file element count fits i32")
}

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Write `bytes` to a scratch file under the target directory and return its path.
pub fn write_scratch(name: &str, bytes: &[u8]) -> PathBuf {
	let dir = target_dir().join("frdwalk-scratch");
	std::fs::create_dir_all(&dir).expect("scratch dir is creatable");
	let path = dir.join(name);
	std::fs::write(&path, bytes).expect("scratch file is writable");
	path
}
