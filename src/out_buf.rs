use std::fmt::{self, Debug, Formatter};

/// Destination for a bounded copy of a removed value.
///
/// At most `capacity - 1` bytes are copied and the copy is always followed by a
/// NUL within the buffer. Truncation is silent. A zero-capacity buffer has no
/// room even for the terminator, so it receives nothing.
pub struct OutBuf {
	buf: Box<[u8]>,
}

impl OutBuf {
	pub fn new(capacity: usize) -> Self {
		Self {
			buf: vec![0; capacity].into_boxed_slice(),
		}
	}

	pub fn capacity(&self) -> usize {
		self.buf.len()
	}

	pub(crate) fn copy_from(&mut self, value: &str) {
		let Some(max) = self.buf.len().checked_sub(1) else { return; };
		let len = value.len().min(max);
		self.buf[..len].copy_from_slice(&value.as_bytes()[..len]);
		self.buf[len] = 0;
	}

	/// The bytes up to (not including) the first NUL.
	pub fn as_bytes(&self) -> &[u8] {
		let end = self
			.buf
			.iter()
			.position(|&b| b == 0)
			.unwrap_or(self.buf.len());
		&self.buf[..end]
	}

	/// The whole buffer, terminator and any stale bytes after it included.
	pub fn raw(&self) -> &[u8] {
		&self.buf
	}

	/// Truncation may split a multi-byte character, in which case the tail is
	/// replaced.
	pub fn to_string_lossy(&self) -> String {
		String::from_utf8_lossy(self.as_bytes()).into_owned()
	}
}

impl Debug for OutBuf {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter
			.debug_struct("OutBuf")
			.field("capacity", &self.capacity())
			.field("contents", &self.to_string_lossy())
			.finish()
	}
}
