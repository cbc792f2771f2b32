use std::{io, path::{Path, PathBuf}};
use thiserror::Error;

use super::IrgenError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FileIOError {
	#[error("could not write `{}`: {reason}", .path.display())]
	Write {
		path: PathBuf,
		kind: io::ErrorKind,
		reason: String,
	},
	#[error("could not read `{}`: {reason}", .path.display())]
	Read {
		path: PathBuf,
		kind: io::ErrorKind,
		reason: String,
	},
}

impl FileIOError {
	pub(crate) fn write(path: &Path, e: io::Error) -> Self {
		Self::Write { path: path.to_path_buf(), kind: e.kind(), reason: e.to_string() }
	}

	pub(crate) fn read(path: &Path, e: io::Error) -> Self {
		Self::Read { path: path.to_path_buf(), kind: e.kind(), reason: e.to_string() }
	}

	pub fn kind(&self) -> io::ErrorKind {
		match self {
			Self::Write { kind, .. } | Self::Read { kind, .. } => *kind,
		}
	}
}

impl IrgenError for FileIOError {}

pub type FileIOResult<O = ()> = Result<O, FileIOError>;
