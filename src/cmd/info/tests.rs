use frdwalk_testkit::{TrackFile, write_scratch};

use crate::cmd::test_support::run_frdwalk_json;

#[test]
fn info_json_reports_declared_counts() {
	let mut file = TrackFile::minimal(2);
	file.textures = 4;
	let bytes = file.encode();
	let path = write_scratch("info_json.frd", &bytes);
	let path = path.to_string_lossy().into_owned();

	let json = run_frdwalk_json(&["info", &path, "--json"]);

	assert_eq!(json["size"], bytes.len());
	assert_eq!(json["block_count"], 2);
	assert_eq!(json["track_blocks"], 3);
	assert_eq!(json["texture_count"], 4);
	assert_eq!(json["nodes"], file.expected_node_count());
	assert_eq!(json["records"]["OBJPOLYBLOCK"], 12);
	assert_eq!(json["records"]["XOBJBLOCK"], 13);
	assert_eq!(json["records"]["XOBJDATA"], 0);
}
