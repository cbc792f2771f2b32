use thiserror::Error;

use super::IrgenError;
use crate::table::Code;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
	#[error("mnemonic `{mnemonic}` is declared twice (codes {first} and {second})")]
	DuplicateMnemonic {
		mnemonic: String,
		first: Code,
		second: Code,
	},
	#[error("no opcode has code {0}")]
	UnknownOpcode(Code),
	#[error("no opcode is named `{0}`")]
	UnknownMnemonic(String),
}

impl IrgenError for TableError {}

pub type TableResult<O = ()> = Result<O, TableError>;
