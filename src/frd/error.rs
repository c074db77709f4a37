use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, FrdError>;

/// Errors produced while loading and walking FRD track files.
#[derive(Debug, Error)]
pub enum FrdError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON report serialization failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Buffer is too large for 32-bit record offsets.
	#[error("buffer of {len} bytes exceeds the 32-bit offset range")]
	BufferTooLarge {
		/// Buffer length in bytes.
		len: usize,
	},
	/// A read or skip would run past the end of the buffer.
	#[error("buffer underrun at offset {at}, need {need} bytes, remaining {rem}")]
	BufferUnderrun {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes, saturated when the span size overflows.
		need: u64,
		/// Bytes still available.
		rem: usize,
	},
	/// A counter that sizes a repetition or span was negative.
	#[error("{record} {field}: {count} at offset {at} (expected >= 0)")]
	InvalidCount {
		/// Record kind holding the counter.
		record: &'static str,
		/// Counter field name.
		field: &'static str,
		/// Byte offset of the counter field.
		at: usize,
		/// Parsed signed value.
		count: i64,
	},
	/// A type tag held a value outside its legal set.
	#[error("{record} type: {tag} at offset {at} (expected in {expected:?})")]
	InvalidTag {
		/// Record kind holding the tag.
		record: &'static str,
		/// Byte offset of the tag field.
		at: usize,
		/// Parsed tag value.
		tag: i32,
		/// Legal tag values for this record kind.
		expected: &'static [i32],
	},
	/// `Walker::run` was called on a walker that already ran.
	#[error("walker already ran (cursor at offset {pos})")]
	WalkerReused {
		/// Cursor offset left by the earlier run.
		pos: usize,
	},
	/// Walk does not end exactly at the buffer end.
	#[error("FILE: walk ends at offset {end} but buffer is {len} bytes")]
	LengthMismatch {
		/// Terminal cursor offset.
		end: usize,
		/// Buffer length.
		len: usize,
	},
}

impl FrdError {
	/// Byte offset at which the error was detected, when it has one.
	pub fn offset(&self) -> Option<usize> {
		match self {
			Self::Io(_) | Self::Json(_) | Self::BufferTooLarge { .. } => None,
			Self::BufferUnderrun { at, .. } | Self::InvalidCount { at, .. } | Self::InvalidTag { at, .. } => Some(*at),
			Self::WalkerReused { pos } => Some(*pos),
			Self::LengthMismatch { end, .. } => Some(*end),
		}
	}
}
