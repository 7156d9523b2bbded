use std::num::ParseIntError;
use std::str::FromStr;

use paste::paste;
use thiserror::Error;

macro_rules! str_enum {
	(#[description = $descr:tt] $(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident = $variant_str:tt ($usage:tt, $help:tt)),* $(,)? }) => { paste! {
		$(#[$meta])* $vis enum $name {
			$($variant,)*
		}

		#[derive(Debug, Error)]
		#[error("unrecognized {} {0:?}", Self::DESCRIPTION)]
		pub struct [<$name FromStrError>](Box<str>);

		impl [<$name FromStrError>] {
			const DESCRIPTION: &str = $descr;
		}

		impl FromStr for $name {
			type Err = [<$name FromStrError>];

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Ok(match s {
					$($variant_str => Self::$variant,)*
					_ => return Err([<$name FromStrError>](s.into())),
				})
			}
		}

		impl $name {
			pub const ALL: &[Self] = &[$(Self::$variant,)*];

			pub fn as_str(self) -> &'static str {
				match self {
					$(Self::$variant => $variant_str,)*
				}
			}

			/// Arguments, in `<required> [optional]` notation.
			pub fn usage(self) -> &'static str {
				match self {
					$(Self::$variant => $usage,)*
				}
			}

			pub fn help(self) -> &'static str {
				match self {
					$(Self::$variant => $help,)*
				}
			}
		}
	} }
}

str_enum! {
#[description = "command"]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
	New = "new" ("", "create an empty queue, replacing any existing one"),
	Free = "free" ("", "tear down the queue"),
	InsertHead = "ih" ("<str> [n]", "insert <str> at the head, n times"),
	InsertTail = "it" ("<str> [n]", "insert <str> at the tail, n times"),
	RemoveHead = "rh" ("[expected]", "remove from the head and print the value"),
	RemoveHeadQuiet = "rhq" ("", "remove from the head without copying the value"),
	Reverse = "reverse" ("", "reverse the queue in place"),
	Sort = "sort" ("", "sort the queue in ascending order"),
	Size = "size" ("[expected]", "print the number of values"),
	Show = "show" ("", "print the queue"),
	Dump = "dump" ("", "print the queue as JSON"),
	Load = "load" ("<path>", "replace the queue with a JSON array from <path>"),
	Help = "help" ("", "list commands"),
	Quit = "quit" ("", "stop reading commands"),
}
}

/// One parsed command line.
#[derive(Debug)]
pub struct Invocation<'a> {
	pub command: Command,
	pub args: Vec<&'a str>,
}

#[derive(Debug, Error)]
pub enum ArgError {
	#[error("usage: {} {}", .0.as_str(), .0.usage())]
	Arity(Command),
	#[error("invalid count {0:?}")]
	Count(Box<str>, #[source] ParseIntError),
}

/// Splits off everything after `#`, then the command word. Blank lines give
/// `None`.
pub fn parse_line(line: &str) -> Result<Option<Invocation<'_>>, CommandFromStrError> {
	let line = line.split_once('#').map_or(line, |(before, _comment)| before);
	let mut words = line.split_whitespace();
	let Some(first) = words.next() else { return Ok(None); };
	let command = first.parse()?;
	Ok(Some(Invocation {
		command,
		args: words.collect(),
	}))
}

impl<'a> Invocation<'a> {
	/// Checks that between `min` and `max` arguments were given.
	pub fn arity(&self, min: usize, max: usize) -> Result<&[&'a str], ArgError> {
		if (min..=max).contains(&self.args.len()) {
			Ok(&self.args)
		} else {
			Err(ArgError::Arity(self.command))
		}
	}
}

pub fn parse_count(raw: &str) -> Result<usize, ArgError> {
	raw.parse().map_err(|error| ArgError::Count(raw.into(), error))
}
