use serde::Serialize;

use super::Emitter;
use crate::{
    error::emit::*,
    table::{Code, Mnemonic, OpcodeTable},
};

/// `{"opcodes": [{"mnemonic", "code", "name"}, ...]}`, pretty printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JsonEmitter;

#[derive(Serialize)]
struct Artifact<'a> {
    opcodes: Vec<Row<'a>>,
}

#[derive(Serialize)]
struct Row<'a> {
    mnemonic: &'a Mnemonic,
    code: Code,
    name: String,
}

impl Emitter for JsonEmitter {
    fn render(&self, table: &OpcodeTable) -> EmitResult<String> {
        let artifact = Artifact {
            opcodes: table
                .iter()
                .map(|entry| Row {
                    mnemonic: &entry.mnemonic,
                    code: entry.code,
                    name: entry.mnemonic.upper(),
                })
                .collect(),
        };
        let mut out = serde_json::to_string_pretty(&artifact)
            .map_err(|e| EmitError::Serialize(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }
}
