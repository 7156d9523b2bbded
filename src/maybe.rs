use crate::error::QueueError;
use crate::out_buf::OutBuf;
use crate::queue::Queue;

/// Queue operations on a queue that may not exist.
///
/// Mutations report [`QueueError::Missing`] when there is no queue; queries and
/// structural no-ops treat a missing queue like an empty one.
pub trait MaybeQueue {
	/// # Errors
	///
	/// See [`Queue::insert_head`].
	fn insert_head(&mut self, value: &str) -> Result<(), QueueError>;
	/// # Errors
	///
	/// See [`Queue::insert_tail`].
	fn insert_tail(&mut self, value: &str) -> Result<(), QueueError>;
	/// # Errors
	///
	/// See [`Queue::remove_head`].
	fn remove_head(&mut self, out: Option<&mut OutBuf>) -> Result<(), QueueError>;
	fn size(&self) -> usize;
	fn reverse(&mut self);
	fn sort(&mut self);
	/// Releases the queue and everything in it. The queue is gone afterwards.
	fn teardown(&mut self);
}

impl MaybeQueue for Option<Queue> {
	fn insert_head(&mut self, value: &str) -> Result<(), QueueError> {
		present(self)?.insert_head(value)
	}

	fn insert_tail(&mut self, value: &str) -> Result<(), QueueError> {
		present(self)?.insert_tail(value)
	}

	fn remove_head(&mut self, out: Option<&mut OutBuf>) -> Result<(), QueueError> {
		present(self)?.remove_head(out)
	}

	fn size(&self) -> usize {
		self.as_ref().map_or(0, Queue::len)
	}

	fn reverse(&mut self) {
		if let Some(queue) = self {
			queue.reverse();
		}
	}

	fn sort(&mut self) {
		if let Some(queue) = self {
			queue.sort();
		}
	}

	fn teardown(&mut self) {
		if let Some(queue) = self.take() {
			log::trace!("tearing down {} nodes", queue.len());
		}
	}
}

fn present(queue: &mut Option<Queue>) -> Result<&mut Queue, QueueError> {
	queue.as_mut().ok_or_else(|| {
		log::debug!("operation on a missing queue");
		QueueError::Missing
	})
}

#[cfg(test)]
mod test {
	use super::MaybeQueue;
	use crate::error::QueueError;
	use crate::out_buf::OutBuf;
	use crate::queue::Queue;

	#[test]
	fn missing_queue() {
		let mut queue: Option<Queue> = None;

		assert!(matches!(queue.insert_head("a"), Err(QueueError::Missing)));
		assert!(matches!(queue.insert_tail("a"), Err(QueueError::Missing)));
		let mut out = OutBuf::new(8);
		assert!(matches!(
			queue.remove_head(Some(&mut out)),
			Err(QueueError::Missing)
		));
		assert_eq!(out.as_bytes(), b"");
		assert_eq!(queue.size(), 0);
		queue.reverse();
		queue.sort();
		queue.teardown();
		assert!(queue.is_none());
	}

	#[test]
	fn present_queue() {
		let mut queue = Some(Queue::new());

		queue.insert_tail("b").unwrap();
		queue.insert_tail("a").unwrap();
		queue.insert_head("c").unwrap();
		assert_eq!(queue.size(), 3);

		queue.sort();
		queue.reverse();
		let mut out = OutBuf::new(8);
		queue.remove_head(Some(&mut out)).unwrap();
		assert_eq!(out.as_bytes(), b"c");
		assert_eq!(queue.size(), 2);

		queue.teardown();
		assert!(queue.is_none());
		assert_eq!(queue.size(), 0);
		// Tearing down twice is harmless.
		queue.teardown();
	}

	#[test]
	fn teardown_empty() {
		let mut queue = Some(Queue::new());
		queue.teardown();
		assert!(queue.is_none());
	}
}
