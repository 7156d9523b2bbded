use std::path::PathBuf;

use argh::FromArgs;

/// Drive a string queue with commands read from stdin or a script.
#[derive(FromArgs, Debug)]
pub struct Args {
	/// read commands from this file instead of stdin
	#[argh(option, short = 'f')]
	pub file: Option<PathBuf>,
	/// log specification, such as `debug` or `strqueue=trace`
	#[argh(option, short = 'l', default = r#""warn".into()"#)]
	pub log_level: String,
	/// echo each command before running it
	#[argh(switch, short = 'e')]
	pub echo: bool,
}

pub fn load() -> Args {
	argh::from_env()
}
