#![deny(
	absolute_paths_not_starting_with_crate,
	keyword_idents,
	macro_use_extern_crate,
	meta_variable_misuse,
	missing_abi,
	non_ascii_idents,
	nonstandard_style,
	noop_method_call,
	rust_2018_idioms,
	unused_qualifications
)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

//! A singly-linked queue of owned strings.
//!
//! Nodes live in a slot arena owned by the [`Queue`]; every link, including the
//! cached last-node reference, is a slot index, so the arena is the one owner of
//! every node and teardown never has to ask who frees what.

pub use self::error::QueueError;
pub use self::maybe::MaybeQueue;
pub use self::out_buf::OutBuf;
pub use self::queue::{Iter, Queue};

mod error;
mod maybe;
mod out_buf;
mod queue;
