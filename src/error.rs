use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueueError {
	#[error("no queue")]
	Missing,
	#[error("queue is empty")]
	Empty,
	#[error("could not allocate storage for a new node")]
	Alloc(#[from] TryReserveError),
}
