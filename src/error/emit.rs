use thiserror::Error;

use super::IrgenError;
use crate::table::Code;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
	#[error("mnemonic `{0}` cannot be written as a bare identifier")]
	InvalidIdentifier(String),
	#[error("variant `{variant}` would be generated for both code {first} and code {second}")]
	DuplicateVariant {
		variant: String,
		first: Code,
		second: Code,
	},
	#[error("unknown target `{0}` (expected one of: js, rust, json)")]
	UnknownTarget(String),
	#[error("could not serialize the table: {0}")]
	Serialize(String),
}

impl IrgenError for EmitError {}

pub type EmitResult<O = ()> = Result<O, EmitError>;
