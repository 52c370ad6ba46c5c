//! `solvent` binary.
//!
//! Loads a configuration file, parses it into a factory builder, binds it to
//! the reference executor and prints the result.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use solvent_config::builtins::supported_types;
use solvent_config::{BuiltinType, Registry, load_file, parse_with};
use solvent_core::ReferenceExecutor;
use strum::IntoEnumIterator;
use tracing::info;

use crate::cli::{Cli, Command, ParseArgs};

fn main() -> Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	match cli.command {
		Command::Parse(args) => run_parse(&args),
		Command::Types => {
			list_types();
			Ok(())
		}
	}
}

fn run_parse(args: &ParseArgs) -> Result<()> {
	let kind = args.kind()?;
	let types = args.types()?;
	let node = load_file(&args.file).with_context(|| format!("loading {}", args.file.display()))?;
	info!(file = %args.file.display(), %kind, %types, "parsing configuration");

	let builder = parse_with(kind, &node, &Registry::new(), &types, &args.options())
		.with_context(|| format!("parsing {}", args.file.display()))?;
	println!("{builder:#?}");

	let exec = ReferenceExecutor::create();
	let factory = builder.on(&exec);
	println!("bound {} ({}) on {}", factory.info(), factory.family(), exec.name());
	Ok(())
}

fn list_types() {
	for ty in BuiltinType::iter() {
		let types = supported_types(ty);
		let mut value_types: Vec<_> = types.iter().map(|types| types.value_type()).collect();
		value_types.dedup();
		let mut index_types: Vec<_> = types.iter().map(|types| types.index_type()).collect();
		index_types.sort();
		index_types.dedup();

		let join = |names: Vec<String>| names.join(", ");
		println!(
			"{:<28} {:<16} value: {}; index: {}",
			ty.name(),
			ty.family().to_string(),
			join(value_types.iter().map(ToString::to_string).collect()),
			join(index_types.iter().map(ToString::to_string).collect()),
		);
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("SOLVENT_LOG")
		.or_else(|_| EnvFilter::try_from_default_env())
		.unwrap_or_else(|_| {
			if verbose {
				EnvFilter::new("solvent_config=debug,solvent_core=trace,info")
			} else {
				EnvFilter::new("warn")
			}
		});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}
