#![allow(missing_docs)]

use frdwalk::frd::{RecordKind, RecordNode, walk_frd};
use frdwalk_testkit::{ObjPolySpec, PolyObjSpec, PolygonBlockSpec, TrackFile, TrackSpec, XObjKind, XObjSpec};
use proptest::collection::vec;
use proptest::prelude::*;

fn count() -> impl Strategy<Value = i32> {
	0_i32..4
}

fn track() -> impl Strategy<Value = TrackSpec> {
	(count(), count(), count(), count(), count(), count(), count(), count()).prop_map(
		|(vertices, positions, polygons, vroad, xobj, polyobj, soundsrc, lightsrc)| TrackSpec {
			vertices,
			positions,
			polygons,
			vroad,
			xobj,
			polyobj,
			soundsrc,
			lightsrc,
		},
	)
}

fn poly_obj() -> impl Strategy<Value = PolyObjSpec> {
	prop_oneof![count().prop_map(PolyObjSpec::Polygons), prop_oneof![Just(3), Just(4)].prop_map(PolyObjSpec::Marker)]
}

fn obj_poly() -> impl Strategy<Value = ObjPolySpec> {
	prop_oneof![
		Just(ObjPolySpec::Empty),
		(prop_oneof![1_i32..100, -100_i32..0], vec(poly_obj(), 0..3)).prop_map(|(flag, objects)| ObjPolySpec::Objects { flag, objects }),
	]
}

fn polygon_block() -> impl Strategy<Value = PolygonBlockSpec> {
	(
		prop::array::uniform7(count()),
		(obj_poly(), obj_poly(), obj_poly(), obj_poly()),
	)
		.prop_map(|(chunks, (a, b, c, d))| PolygonBlockSpec {
			chunks,
			obj_polys: [a, b, c, d],
		})
}

fn xobj() -> impl Strategy<Value = XObjSpec> {
	let kind = prop_oneof![Just(XObjKind::Static), (0_i16..4).prop_map(|anim_len| XObjKind::Animated { anim_len })];
	(kind, count(), count()).prop_map(|(kind, vertices, polygons)| XObjSpec { kind, vertices, polygons })
}

fn track_file() -> impl Strategy<Value = TrackFile> {
	(0_usize..3).prop_flat_map(|n_blocks| {
		let blocks = n_blocks + 1;
		(
			vec(track(), blocks),
			vec(polygon_block(), blocks),
			vec(vec(xobj(), 0..3), 4 * blocks + 1),
			0_usize..4,
		)
			.prop_map(|(tracks, polygon_blocks, xobj_blocks, textures)| TrackFile {
				tracks,
				polygon_blocks,
				xobj_blocks,
				textures,
			})
	})
}

fn allowed_parent(kind: RecordKind) -> Option<RecordKind> {
	match kind {
		RecordKind::File => None,
		RecordKind::TrkBlock | RecordKind::PolygonBlock | RecordKind::XObjBlock | RecordKind::TextureBlock => Some(RecordKind::File),
		RecordKind::ObjPolyBlock => Some(RecordKind::PolygonBlock),
		RecordKind::XObjData => Some(RecordKind::XObjBlock),
	}
}

fn assert_nesting(nodes: &[RecordNode]) -> Result<(), TestCaseError> {
	let mut stack: Vec<RecordNode> = Vec::new();
	for node in nodes {
		let depth = node.depth as usize;
		prop_assert!(depth <= stack.len(), "node {:?} skips a level", node);
		stack.truncate(depth);
		prop_assert_eq!(stack.last().map(|parent| parent.kind), allowed_parent(node.kind));
		stack.push(*node);
	}
	Ok(())
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	#[test]
	fn well_formed_files_are_consumed_exactly(file in track_file()) {
		let bytes = file.encode();
		let result = walk_frd(&bytes).expect("well-formed file walks");

		prop_assert_eq!(result.end_offset, bytes.len());
		prop_assert_eq!(result.buffer_len, bytes.len());
		prop_assert_eq!(result.tree.len(), file.expected_node_count());
		prop_assert_eq!(result.block_count as i32, file.block_count());
		prop_assert_eq!(result.texture_count as usize, file.textures);
	}

	#[test]
	fn depths_follow_call_structure(file in track_file()) {
		let result = walk_frd(&file.encode()).expect("well-formed file walks");
		assert_nesting(result.tree.nodes())?;
	}

	#[test]
	fn offsets_never_decrease(file in track_file()) {
		let result = walk_frd(&file.encode()).expect("well-formed file walks");
		let nodes = result.tree.nodes();
		prop_assert!(nodes.windows(2).all(|pair| pair[0].offset <= pair[1].offset));
	}

	#[test]
	fn walking_twice_yields_identical_trees(file in track_file()) {
		let bytes = file.encode();
		let first = walk_frd(&bytes).expect("first walk");
		let second = walk_frd(&bytes).expect("second walk");
		prop_assert_eq!(first, second);
	}

	#[test]
	fn any_truncation_is_rejected(file in track_file(), cut in 1_usize..64) {
		let mut bytes = file.encode();
		let cut = cut.min(bytes.len());
		bytes.truncate(bytes.len() - cut);
		prop_assert!(walk_frd(&bytes).is_err());
	}
}
