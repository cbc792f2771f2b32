use super::Emitter;
use crate::{
    config::{DEFAULT_FN_NAME, DEFAULT_MAP_NAME},
    error::emit::*,
    table::OpcodeTable,
};

/// CommonJS module with a frozen `name -> code` object and a `code -> NAME`
/// switch.
///
/// The switch is keyed on the integer literal, so a repeated mnemonic still
/// has one case per code even though the object keeps only the later one.
/// There is no `default` case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsEmitter {
    pub map_name: String,
    pub fn_name: String,
}

impl Default for JsEmitter {
    fn default() -> Self {
        Self {
            map_name: DEFAULT_MAP_NAME.into(),
            fn_name: DEFAULT_FN_NAME.into(),
        }
    }
}

impl Emitter for JsEmitter {
    fn render(&self, table: &OpcodeTable) -> EmitResult<String> {
        if let Some(entry) = table.iter().find(|e| !e.mnemonic.is_bare_word()) {
            return Err(EmitError::InvalidIdentifier(entry.mnemonic.to_string()));
        }

        let mut out = format!("const {} = Object.freeze({{\n", self.map_name);
        for entry in table {
            out += &format!("\t{}: {},\n", entry.mnemonic, entry.code);
        }
        out += "});\n\n";

        out += &format!("function {}(op) {{\n\tswitch(op) {{\n", self.fn_name);
        for entry in table {
            out += &format!("\tcase {}: return '{}';\n", entry.code, entry.mnemonic.upper());
        }
        out += "\t}\n}\n\n";

        out += &format!("module.exports = {{{}, {}}};\n", self.map_name, self.fn_name);
        Ok(out)
    }
}
