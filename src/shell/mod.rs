use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context as _;
use strqueue::{MaybeQueue, OutBuf, Queue, QueueError};
use thiserror::Error;

use self::command::{parse_count, parse_line, ArgError, Command, CommandFromStrError, Invocation};

mod command;

/// Capacity of the buffer `rh` removes into, terminator included.
const REMOVE_BUFFER_CAPACITY: usize = 1024;

#[derive(Debug, Clone, Copy)]
pub struct Options {
	/// Write each command line to the output before running it.
	pub echo: bool,
	/// Write a prompt to stderr before reading each line.
	pub prompt: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
	Continue,
	Quit,
}

#[derive(Debug, Error)]
enum CommandError {
	#[error(transparent)]
	Parse(#[from] CommandFromStrError),
	#[error(transparent)]
	Args(#[from] ArgError),
	#[error(transparent)]
	Queue(#[from] QueueError),
	#[error("removed {actual:?}, expected {expected:?}")]
	Removed { actual: String, expected: String },
	#[error("size is {actual}, expected {expected}")]
	Size { actual: usize, expected: usize },
	#[error(transparent)]
	Load(#[from] anyhow::Error),
	#[error("writing output")]
	Io(#[from] io::Error),
}

/// Line-oriented command interpreter over a queue that may or may not exist.
///
/// Command failures are written to the output and counted rather than
/// returned; only failing to write the output itself is fatal.
#[derive(Debug)]
pub struct Shell<W> {
	queue: Option<Queue>,
	out: W,
	options: Options,
	errors: usize,
	remove_buf: OutBuf,
}

impl<W: Write> Shell<W> {
	pub fn new(out: W, options: Options) -> Self {
		Self {
			queue: None,
			out,
			options,
			errors: 0,
			remove_buf: OutBuf::new(REMOVE_BUFFER_CAPACITY),
		}
	}

	pub fn errors(&self) -> usize {
		self.errors
	}

	#[cfg(test)]
	pub fn into_output(self) -> W {
		self.out
	}

	pub fn run<R: BufRead>(&mut self, input: R) -> anyhow::Result<()> {
		let mut lines = input.lines();
		loop {
			if self.options.prompt {
				eprint!("> ");
			}
			let Some(line) = lines.next() else { break; };
			let line = line.context("reading command")?;
			if self.run_line(&line).context("writing output")? == Flow::Quit {
				break;
			}
		}
		Ok(())
	}

	pub fn run_line(&mut self, line: &str) -> io::Result<Flow> {
		if self.options.echo {
			writeln!(self.out, "cmd> {line}")?;
		}

		match self.try_run_line(line) {
			Ok(flow) => Ok(flow),
			Err(CommandError::Io(error)) => Err(error),
			Err(error) => {
				self.errors += 1;
				log::debug!("command {line:?} failed: {error:?}");
				writeln!(self.out, "ERROR: {error:#}")?;
				Ok(Flow::Continue)
			}
		}
	}
}

impl<W: Write> Shell<W> {
	fn try_run_line(&mut self, line: &str) -> Result<Flow, CommandError> {
		let Some(invocation) = parse_line(line)? else { return Ok(Flow::Continue); };
		self.run_command(&invocation)
	}

	fn run_command(&mut self, invocation: &Invocation<'_>) -> Result<Flow, CommandError> {
		match invocation.command {
			Command::New => {
				invocation.arity(0, 0)?;
				self.queue.teardown();
				self.queue = Some(Queue::new());
			}
			Command::Free => {
				invocation.arity(0, 0)?;
				self.queue.teardown();
			}
			Command::InsertHead | Command::InsertTail => {
				let args = invocation.arity(1, 2)?;
				let value = args[0];
				let times = args.get(1).copied().map(parse_count).transpose()?.unwrap_or(1);
				for _ in 0..times {
					if invocation.command == Command::InsertHead {
						self.queue.insert_head(value)?;
					} else {
						self.queue.insert_tail(value)?;
					}
				}
			}
			Command::RemoveHead => {
				let args = invocation.arity(0, 1)?;
				self.queue.remove_head(Some(&mut self.remove_buf))?;
				let removed = self.remove_buf.to_string_lossy();
				writeln!(self.out, "Removed {removed} from queue")?;
				if let Some(&expected) = args.first() {
					if removed != expected {
						return Err(CommandError::Removed {
							actual: removed,
							expected: expected.into(),
						});
					}
				}
			}
			Command::RemoveHeadQuiet => {
				invocation.arity(0, 0)?;
				self.queue.remove_head(None)?;
			}
			Command::Reverse => {
				invocation.arity(0, 0)?;
				self.queue.reverse();
			}
			Command::Sort => {
				invocation.arity(0, 0)?;
				self.queue.sort();
			}
			Command::Size => {
				let args = invocation.arity(0, 1)?;
				let actual = self.queue.size();
				writeln!(self.out, "Queue size = {actual}")?;
				if let Some(&expected) = args.first() {
					let expected = parse_count(expected)?;
					if actual != expected {
						return Err(CommandError::Size { actual, expected });
					}
				}
			}
			Command::Show => {
				invocation.arity(0, 0)?;
				self.show()?;
			}
			Command::Dump => {
				invocation.arity(0, 0)?;
				serde_json::to_writer(&mut self.out, &self.queue).map_err(io::Error::from)?;
				writeln!(self.out)?;
			}
			Command::Load => {
				let args = invocation.arity(1, 1)?;
				let queue = load(Path::new(args[0]))?;
				self.queue.teardown();
				self.queue = Some(queue);
			}
			Command::Help => {
				invocation.arity(0, 0)?;
				for &command in Command::ALL {
					let synopsis = format!("{} {}", command.as_str(), command.usage());
					writeln!(self.out, "  {synopsis:<14} {}", command.help())?;
				}
			}
			Command::Quit => {
				invocation.arity(0, 0)?;
				return Ok(Flow::Quit);
			}
		}

		Ok(Flow::Continue)
	}

	fn show(&mut self) -> io::Result<()> {
		let Some(queue) = &self.queue else {
			return writeln!(self.out, "q = NULL");
		};
		write!(self.out, "q = [")?;
		for (i, value) in queue.iter().enumerate() {
			if i > 0 {
				write!(self.out, " ")?;
			}
			write!(self.out, "{value}")?;
		}
		writeln!(self.out, "]")
	}
}

fn load(path: &Path) -> anyhow::Result<Queue> {
	let raw = std::fs::read_to_string(path).with_context(|| format!("reading from {path:?}"))?;
	serde_json::from_str(&raw).with_context(|| format!("parsing JSON array from {path:?}"))
}
