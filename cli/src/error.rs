use std::{fmt, path::PathBuf};

use irgen::error::{FileIOError, TableError};

#[derive(Debug, Clone, PartialEq)]
pub enum CLIError {
	Generator(irgen::Error),
	Stale(PathBuf),
}

impl fmt::Display for CLIError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CLIError::Generator(e) => fmt::Display::fmt(e, f),
			CLIError::Stale(path) => write!(f, "{} is out of date; rerun irgen", path.display()),
		}
	}
}

impl From<irgen::Error> for CLIError {
	fn from(e: irgen::Error) -> Self {
		CLIError::Generator(e)
	}
}

impl From<TableError> for CLIError {
	fn from(e: TableError) -> Self {
		CLIError::Generator(e.into())
	}
}

impl From<FileIOError> for CLIError {
	fn from(e: FileIOError) -> Self {
		CLIError::Generator(e.into())
	}
}

pub type CLIResult<O=()> = Result<O, CLIError>;
