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

use std::fs::File;
use std::io::{self, BufReader, IsTerminal as _};
use std::process::ExitCode;

use anyhow::Context as _;
use flexi_logger::Logger;

use crate::args::Args;
use crate::shell::{Options, Shell};

mod args;
mod shell;

fn run(args: &Args) -> anyhow::Result<usize> {
	let _logger = Logger::try_with_str(&args.log_level)
		.with_context(|| format!("parsing log specification {:?}", args.log_level))?
		.start()
		.context("starting logger")?;

	let options = Options {
		echo: args.echo,
		prompt: args.file.is_none() && io::stdin().is_terminal(),
	};
	let mut shell = Shell::new(io::stdout().lock(), options);

	if let Some(path) = &args.file {
		let file = File::open(path).with_context(|| format!("opening {path:?}"))?;
		shell.run(BufReader::new(file))?;
	} else {
		shell.run(io::stdin().lock())?;
	}

	Ok(shell.errors())
}

fn main() -> ExitCode {
	let args = args::load();

	match run(&args) {
		Ok(0) => ExitCode::SUCCESS,
		Ok(errors) => {
			eprintln!("{errors} command(s) failed");
			ExitCode::FAILURE
		}
		Err(error) => {
			eprintln!("error: {error:?}");
			ExitCode::FAILURE
		}
	}
}
