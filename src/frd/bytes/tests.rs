use crate::frd::FrdError;
use crate::frd::bytes::Cursor;

#[test]
fn peek_does_not_move_and_read_does() {
	let bytes = [0x78, 0x56, 0x34, 0x12, 0xfe, 0xff];
	let mut cursor = Cursor::new(&bytes);

	assert_eq!(cursor.peek_u32_le().expect("peek u32"), 0x1234_5678);
	assert_eq!(cursor.peek_u16_le().expect("peek u16"), 0x5678);
	assert_eq!(cursor.pos(), 0);

	assert_eq!(cursor.read_i32_le().expect("read i32"), 0x1234_5678);
	assert_eq!(cursor.pos(), 4);
	assert_eq!(cursor.peek_i16_le().expect("peek i16"), -2);
	assert_eq!(cursor.read_u16_le().expect("read u16"), 0xfffe);
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn read_past_end_is_underrun() {
	let bytes = [1, 2, 3];
	let mut cursor = Cursor::new(&bytes);

	let err = cursor.read_u32_le().expect_err("3 bytes cannot hold a u32");
	assert!(matches!(err, FrdError::BufferUnderrun { at: 0, need: 4, rem: 3 }));
	assert_eq!(cursor.pos(), 0);
}

#[test]
fn advance_is_bounds_checked() {
	let bytes = [0_u8; 8];
	let mut cursor = Cursor::new(&bytes);

	cursor.advance(8).expect("advance to end");
	assert_eq!(cursor.pos(), 8);

	let err = cursor.advance(1).expect_err("advance past end");
	assert!(matches!(err, FrdError::BufferUnderrun { at: 8, need: 1, rem: 0 }));
}

#[test]
fn skip_span_overflow_is_underrun() {
	let bytes = [0_u8; 4];
	let mut cursor = Cursor::new(&bytes);

	let err = cursor.skip_span(usize::MAX, 14).expect_err("overflowing span");
	assert!(matches!(err, FrdError::BufferUnderrun { need: u64::MAX, .. }));
}

#[test]
fn negative_count_reports_field_offset() {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&3_i32.to_le_bytes());
	bytes.extend_from_slice(&(-1_i32).to_le_bytes());
	let mut cursor = Cursor::new(&bytes);

	assert_eq!(cursor.read_count("TEST", "first").expect("positive count"), 3);
	let err = cursor.read_count("TEST", "second").expect_err("negative count");
	assert!(matches!(
		err,
		FrdError::InvalidCount {
			record: "TEST",
			field: "second",
			at: 4,
			count: -1
		}
	));
}

#[test]
fn negative_i16_count_is_rejected() {
	let bytes = (-20_i16).to_le_bytes();
	let mut cursor = Cursor::new(&bytes);

	let err = cursor.read_count_i16("TEST", "short").expect_err("negative count");
	assert!(matches!(err, FrdError::InvalidCount { at: 0, count: -20, .. }));
}
