//! Reading configuration trees from JSON and TOML.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::pnode::Pnode;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error("failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[cfg(feature = "json")]
	#[error("invalid JSON: {0}")]
	Json(#[from] serde_json::Error),
	#[cfg(feature = "toml")]
	#[error("invalid TOML: {0}")]
	Toml(#[from] toml::de::Error),
	#[error("unsupported configuration format for {0}; expected a .json or .toml file")]
	UnsupportedFormat(PathBuf),
}

impl Pnode {
	#[cfg(feature = "json")]
	pub fn from_json_str(input: &str) -> Result<Self, LoadError> {
		Ok(serde_json::from_str(input)?)
	}

	#[cfg(feature = "toml")]
	pub fn from_toml_str(input: &str) -> Result<Self, LoadError> {
		Ok(toml::from_str(input)?)
	}
}

/// Loads a tree from `path`, choosing the format by extension.
pub fn load_file(path: impl AsRef<Path>) -> Result<Pnode, LoadError> {
	let path = path.as_ref();
	let extension = path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);
	let read = || {
		std::fs::read_to_string(path).map_err(|source| LoadError::Io {
			path: path.to_path_buf(),
			source,
		})
	};

	match extension.as_deref() {
		#[cfg(feature = "json")]
		Some("json") => Pnode::from_json_str(&read()?),
		#[cfg(feature = "toml")]
		Some("toml") => Pnode::from_toml_str(&read()?),
		_ => Err(LoadError::UnsupportedFormat(path.to_path_buf())),
	}
}
