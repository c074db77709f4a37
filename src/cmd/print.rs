use std::fmt::Write as _;

use frdwalk::frd::{RecordKind, RecordNode, WalkResult};

/// Render the walk as an indented listing followed by cursor and size lines.
pub fn render_tree(result: &WalkResult) -> String {
	let mut out = String::new();
	for node in &result.tree {
		out.push_str(&render_node(node));
		out.push('\n');
	}
	let _ = writeln!(out, "ofs: 0x{:08x} {}", result.end_offset, result.end_offset);
	let _ = writeln!(out, "bufsz: 0x{:08x} {} bytes", result.buffer_len, result.buffer_len);
	out
}

/// Render one node: depth dots, hex offset, kind, decimal offset, short hex offset.
pub fn render_node(node: &RecordNode) -> String {
	let dots = ".".repeat(node.depth as usize);
	format!("{dots} 0x{:08x} {} {:02} (0x{:X})", node.offset, node.kind.as_str(), node.offset, node.offset)
}

/// Render per-kind totals, one `KIND: count` line each, in file order.
pub fn render_summary(result: &WalkResult) -> String {
	let counts = result.kind_counts();
	let mut out = String::new();
	for kind in RecordKind::ALL {
		let _ = writeln!(out, "{}: {}", kind.as_str(), counts.get(&kind).copied().unwrap_or(0));
	}
	out
}
