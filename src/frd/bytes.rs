use crate::frd::{FrdError, Result};

/// Bounded little-endian cursor over an immutable byte slice.
///
/// `peek_*` reads leave the position untouched, `read_*` reads advance past the
/// value. The position only ever moves forward.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return total buffer length.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Whether the buffer is empty.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Move the position forward by `n` bytes.
	pub fn advance(&mut self, n: usize) -> Result<()> {
		self.ensure(n as u64)?;
		self.pos += n;
		Ok(())
	}

	/// Skip `count` elements of `elem_size` bytes each.
	pub fn skip_span(&mut self, count: usize, elem_size: usize) -> Result<()> {
		match count.checked_mul(elem_size) {
			Some(n) => self.advance(n),
			None => Err(FrdError::BufferUnderrun {
				at: self.pos,
				need: u64::MAX,
				rem: self.remaining(),
			}),
		}
	}

	/// Peek a little-endian `u32` at the current position.
	pub fn peek_u32_le(&self) -> Result<u32> {
		Ok(u32::from_le_bytes(self.peek_array()?))
	}

	/// Peek a little-endian `i32` at the current position.
	pub fn peek_i32_le(&self) -> Result<i32> {
		Ok(i32::from_le_bytes(self.peek_array()?))
	}

	/// Peek a little-endian `u16` at the current position.
	pub fn peek_u16_le(&self) -> Result<u16> {
		Ok(u16::from_le_bytes(self.peek_array()?))
	}

	/// Peek a little-endian `i16` at the current position.
	pub fn peek_i16_le(&self) -> Result<i16> {
		Ok(i16::from_le_bytes(self.peek_array()?))
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		let value = self.peek_u32_le()?;
		self.pos += 4;
		Ok(value)
	}

	/// Read a little-endian `i32`.
	pub fn read_i32_le(&mut self) -> Result<i32> {
		let value = self.peek_i32_le()?;
		self.pos += 4;
		Ok(value)
	}

	/// Read a little-endian `u16`.
	pub fn read_u16_le(&mut self) -> Result<u16> {
		let value = self.peek_u16_le()?;
		self.pos += 2;
		Ok(value)
	}

	/// Read a little-endian `i16`.
	pub fn read_i16_le(&mut self) -> Result<i16> {
		let value = self.peek_i16_le()?;
		self.pos += 2;
		Ok(value)
	}

	/// Read an `i32` counter that must be non-negative.
	pub fn read_count(&mut self, record: &'static str, field: &'static str) -> Result<usize> {
		let at = self.pos;
		let count = self.read_i32_le()?;
		usize::try_from(count).map_err(|_| FrdError::InvalidCount {
			record,
			field,
			at,
			count: i64::from(count),
		})
	}

	/// Read an `i16` counter that must be non-negative.
	pub fn read_count_i16(&mut self, record: &'static str, field: &'static str) -> Result<usize> {
		let at = self.pos;
		let count = self.read_i16_le()?;
		usize::try_from(count).map_err(|_| FrdError::InvalidCount {
			record,
			field,
			at,
			count: i64::from(count),
		})
	}

	fn peek_array<const N: usize>(&self) -> Result<[u8; N]> {
		self.ensure(N as u64)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(&self.bytes[self.pos..self.pos + N]);
		Ok(out)
	}

	fn ensure(&self, need: u64) -> Result<()> {
		if need > self.remaining() as u64 {
			return Err(FrdError::BufferUnderrun {
				at: self.pos,
				need,
				rem: self.remaining(),
			});
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests;
