use std::collections::TryReserveError;
use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

use crate::error::QueueError;
use crate::out_buf::OutBuf;

mod reverse;
mod serialize;
mod sort;

type NodeId = usize;

#[derive(Debug)]
struct Node {
	value: String,
	next: Option<NodeId>,
}

/// A FIFO of owned strings, singly linked from head to tail.
///
/// `head` and `tail` are slot indices into `slots`, as is every `next` link.
/// A slot is `None` once its node has been removed; its index then waits in
/// `free` to be reused by the next insertion.
#[derive(Default)]
pub struct Queue {
	slots: Vec<Option<Node>>,
	free: Vec<NodeId>,
	head: Option<NodeId>,
	tail: Option<NodeId>,
	len: usize,
}

// Public API:

impl Queue {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn head(&self) -> Option<&str> {
		self.head.map(|id| self.node(id).value.as_str())
	}

	pub fn iter(&self) -> Iter<'_> {
		Iter {
			queue: self,
			next: self.head,
			remaining: self.len,
		}
	}

	/// Copies `value` into a new node in front of the current head.
	///
	/// # Errors
	///
	/// Fails with [`QueueError::Alloc`] if storage for the node or the copy could
	/// not be obtained. The queue is untouched in that case.
	pub fn insert_head(&mut self, value: &str) -> Result<(), QueueError> {
		let id = self.alloc_node(value)?;
		self.node_mut(id).next = self.head;
		self.head = Some(id);
		if self.tail.is_none() {
			self.tail = Some(id);
		}
		self.len += 1;
		Ok(())
	}

	/// Copies `value` into a new node after the current tail.
	///
	/// # Errors
	///
	/// Same as [`Queue::insert_head`].
	pub fn insert_tail(&mut self, value: &str) -> Result<(), QueueError> {
		let id = self.alloc_node(value)?;
		match self.tail {
			Some(tail) => self.node_mut(tail).next = Some(id),
			None => self.head = Some(id),
		}
		self.tail = Some(id);
		self.len += 1;
		Ok(())
	}

	/// Removes the head node, copying its value into `out` if one is given.
	///
	/// The copy is bounded by the capacity of `out`; see [`OutBuf`].
	///
	/// # Errors
	///
	/// Fails with [`QueueError::Empty`] if there is nothing to remove.
	pub fn remove_head(&mut self, out: Option<&mut OutBuf>) -> Result<(), QueueError> {
		let value = self.pop_head().ok_or_else(|| {
			log::debug!("remove from an empty queue");
			QueueError::Empty
		})?;
		if let Some(out) = out {
			out.copy_from(&value);
		}
		Ok(())
	}

	/// Removes the head node and hands its value to the caller.
	pub fn pop_head(&mut self) -> Option<String> {
		let id = self.head?;
		let node = self.release_node(id);
		self.head = node.next;
		if self.head.is_none() {
			self.tail = None;
		}
		self.len -= 1;
		Some(node.value)
	}
}

// Implementation:

impl Queue {
	fn node(&self, id: NodeId) -> &Node {
		self.slots[id].as_ref().expect("link to a released node")
	}

	fn node_mut(&mut self, id: NodeId) -> &mut Node {
		self.slots[id].as_mut().expect("link to a released node")
	}

	fn next(&self, id: NodeId) -> Option<NodeId> {
		self.node(id).next
	}

	/// Everything is reserved up front, so nothing is left behind if any step
	/// fails: the copy is dropped on return and the arena is unchanged.
	fn alloc_node(&mut self, value: &str) -> Result<NodeId, QueueError> {
		let mut copy = String::new();
		copy
			.try_reserve_exact(value.len())
			.map_err(|error| alloc_failed(error, value.len()))?;
		copy.push_str(value);
		let node = Node {
			value: copy,
			next: None,
		};

		if let Some(id) = self.free.pop() {
			self.slots[id] = Some(node);
			return Ok(id);
		}

		self
			.slots
			.try_reserve(1)
			.map_err(|error| alloc_failed(error, value.len()))?;
		// Keeps `release_node` from ever needing to grow `free`.
		let free_needed = self.slots.len() + 1 - self.free.len();
		self
			.free
			.try_reserve(free_needed)
			.map_err(|error| alloc_failed(error, value.len()))?;

		let id = self.slots.len();
		self.slots.push(Some(node));
		Ok(id)
	}

	fn release_node(&mut self, id: NodeId) -> Node {
		let node = self.slots[id].take().expect("released a node twice");
		self.free.push(id);
		node
	}

	/// Verifies every structural invariant, panicking on the first violation.
	#[cfg(test)]
	pub(crate) fn check(&self) {
		assert_eq!(self.len == 0, self.head.is_none(), "count/head mismatch");
		assert_eq!(self.head.is_none(), self.tail.is_none(), "head/tail mismatch");

		let mut seen = vec![false; self.slots.len()];
		let mut steps = 0;
		let mut cursor = self.head;
		let mut last = None;
		while let Some(id) = cursor {
			assert!(!seen[id], "node {id} reached twice");
			seen[id] = true;
			steps += 1;
			last = Some(id);
			cursor = self.next(id);
		}
		assert_eq!(steps, self.len, "chain length differs from count");
		assert_eq!(last, self.tail, "chain does not end at tail");

		let occupied = self.slots.iter().filter(|slot| slot.is_some()).count();
		assert_eq!(occupied, self.len, "occupied slots outside the chain");
		assert_eq!(
			self.free.len() + self.len,
			self.slots.len(),
			"free list out of step with slots"
		);
	}
}

fn alloc_failed(error: TryReserveError, len: usize) -> QueueError {
	log::warn!("allocation for a {len}-byte value failed: {error}");
	QueueError::Alloc(error)
}

impl Debug for Queue {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter.debug_list().entries(self.iter()).finish()
	}
}

/// Panics if storage cannot be obtained, like the std collections.
impl<'a> Extend<&'a str> for Queue {
	fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
		for value in iter {
			if let Err(error) = self.insert_tail(value) {
				panic!("extending queue: {error}");
			}
		}
	}
}

impl<'a> FromIterator<&'a str> for Queue {
	fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
		let mut queue = Self::new();
		queue.extend(iter);
		queue
	}
}

impl<'a> IntoIterator for &'a Queue {
	type Item = &'a str;
	type IntoIter = Iter<'a>;

	fn into_iter(self) -> Iter<'a> {
		self.iter()
	}
}

#[derive(Debug, Clone)]
pub struct Iter<'a> {
	queue: &'a Queue,
	next: Option<NodeId>,
	remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<&'a str> {
		let id = self.next?;
		let node = self.queue.node(id);
		self.next = node.next;
		self.remaining -= 1;
		Some(&node.value)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
