use thiserror::Error;

pub mod emit;
pub mod fileio;
pub mod table;

pub use emit::{EmitError, EmitResult};
pub use fileio::{FileIOError, FileIOResult};
pub use table::{TableError, TableResult};

/// Marker for every error the generator can report.
pub trait IrgenError: std::error::Error {}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
	#[error(transparent)]
	Table(#[from] TableError),
	#[error(transparent)]
	Emit(#[from] EmitError),
	#[error(transparent)]
	FileIO(#[from] FileIOError),
}

impl IrgenError for Error {}

pub type IrgenResult<O = ()> = Result<O, Error>;
