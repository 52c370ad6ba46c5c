//! Command-line interface definitions.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use solvent_config::{Kind, ParseOptions, Strictness, TypeDescriptor};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "solvent", version)]
#[command(about = "Build solver, preconditioner and stopping-criterion factories from configuration files")]
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Parse a JSON or TOML configuration and bind it to the reference executor
	Parse(ParseArgs),
	/// List built-in types with their family and supported instantiations
	Types,
}

#[derive(clap::Args, Debug)]
pub struct ParseArgs {
	/// Configuration file (.json or .toml)
	pub file: PathBuf,

	/// Family (LinOpFactory, CriterionFactory) or built-in type name to build
	#[arg(long, default_value = "LinOpFactory")]
	pub kind: String,

	/// Value type inherited by the root node
	#[arg(long, value_name = "TYPE", default_value = "float64")]
	pub value_type: String,

	/// Index type inherited by the root node
	#[arg(long, value_name = "TYPE", default_value = "int32")]
	pub index_type: String,

	/// Ignore unknown fields instead of rejecting them
	#[arg(long)]
	pub lenient: bool,
}

impl ParseArgs {
	pub fn kind(&self) -> Result<Kind> {
		Kind::lookup(&self.kind).ok_or_else(|| anyhow!("unknown kind '{}'", self.kind))
	}

	pub fn types(&self) -> Result<TypeDescriptor> {
		TypeDescriptor::from_names(&self.value_type, &self.index_type).context("invalid root type descriptor")
	}

	pub fn options(&self) -> ParseOptions {
		ParseOptions {
			strictness: if self.lenient {
				Strictness::Lenient
			} else {
				Strictness::Strict
			},
		}
	}
}
