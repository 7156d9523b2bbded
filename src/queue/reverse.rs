use std::mem;

use super::Queue;

impl Queue {
	/// Reverses the queue in place by turning every link around.
	///
	/// No node is allocated or released.
	pub fn reverse(&mut self) {
		let mut prev = None;
		let mut cursor = self.head;
		while let Some(id) = cursor {
			cursor = mem::replace(&mut self.node_mut(id).next, prev);
			prev = Some(id);
		}
		self.tail = mem::replace(&mut self.head, prev);
		log::trace!("reversed {} nodes", self.len);
	}
}
