use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use frdwalk_testkit::target_dir;

static FRDWALK_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn run_frdwalk(args: &[&str]) -> Output {
	Command::new(frdwalk_bin()).args(args).output().expect("frdwalk command executes")
}

pub(crate) fn run_frdwalk_json(args: &[&str]) -> serde_json::Value {
	let output = run_frdwalk(args);
	assert!(
		output.status.success(),
		"frdwalk command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn frdwalk_bin() -> &'static PathBuf {
	FRDWALK_BIN.get_or_init(resolve_frdwalk_bin)
}

fn resolve_frdwalk_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_frdwalk") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let mut bin = target_dir().join("debug");
	bin.push(if cfg!(windows) { "frdwalk.exe" } else { "frdwalk" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "frdwalk"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build frdwalk binary at {}", bin.display());

	bin
}
