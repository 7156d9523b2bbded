use std::cmp::Ordering;

use super::{NodeId, Queue};

impl Queue {
	/// Sorts the queue into ascending byte-wise order. Equal values keep their
	/// relative order.
	pub fn sort(&mut self) {
		self.sort_by(str::cmp);
	}

	/// Stable merge sort over the chain, relinking the existing nodes.
	///
	/// Recursion depth is logarithmic in the length of the queue.
	pub fn sort_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&str, &str) -> Ordering,
	{
		let Some(head) = self.head else { return; };
		if self.len < 2 {
			return;
		}

		let (head, tail) = self.merge_sort(head, &mut compare);
		self.head = Some(head);
		self.tail = Some(tail);
		log::trace!("sorted {} nodes", self.len);
	}
}

/// A sorted chain, by its first and last node.
type Run = (NodeId, NodeId);

impl Queue {
	fn merge_sort<F>(&mut self, head: NodeId, compare: &mut F) -> Run
	where
		F: FnMut(&str, &str) -> Ordering,
	{
		let Some(middle) = self.split(head) else { return (head, head); };
		let (left, _) = self.merge_sort(head, compare);
		let (right, _) = self.merge_sort(middle, compare);
		self.merge(left, right, compare)
	}

	/// Cuts the chain starting at `head` after its first ceil(n/2) nodes and
	/// returns the start of the second half, or `None` for a single node.
	fn split(&mut self, head: NodeId) -> Option<NodeId> {
		let mut slow = head;
		let mut fast = self.next(head);
		while let Some(one) = fast {
			fast = self.next(one);
			if let Some(two) = fast {
				slow = self.next(slow)?;
				fast = self.next(two);
			}
		}
		self.node_mut(slow).next.take()
	}

	/// Ties go to `left`.
	fn merge<F>(&mut self, left: NodeId, right: NodeId, compare: &mut F) -> Run
	where
		F: FnMut(&str, &str) -> Ordering,
	{
		let mut left = Some(left);
		let mut right = Some(right);

		let head = self.take_lesser(&mut left, &mut right, compare);
		let mut tail = head;

		while left.is_some() && right.is_some() {
			let id = self.take_lesser(&mut left, &mut right, compare);
			self.node_mut(tail).next = Some(id);
			tail = id;
		}

		self.node_mut(tail).next = left.or(right);
		while let Some(next) = self.next(tail) {
			tail = next;
		}

		(head, tail)
	}

	/// Detaches the front node of whichever chain sorts first, leaving that
	/// chain starting at the following node. Both chains must be non-empty.
	fn take_lesser<F>(
		&mut self,
		left: &mut Option<NodeId>,
		right: &mut Option<NodeId>,
		compare: &mut F,
	) -> NodeId
	where
		F: FnMut(&str, &str) -> Ordering,
	{
		let (Some(l), Some(r)) = (*left, *right) else {
			unreachable!("merging from an exhausted chain");
		};
		let (side, id) = if compare(&self.node(l).value, &self.node(r).value) == Ordering::Greater {
			(right, r)
		} else {
			(left, l)
		};
		*side = self.node_mut(id).next.take();
		id
	}
}
