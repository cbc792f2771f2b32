use std::collections::HashMap;

use super::Emitter;
use crate::{error::emit::*, table::OpcodeTable};

/// `#[repr(u32)]` enum with explicit discriminants, a checked `from_code`
/// and a `name` accessor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RustEmitter {
    pub enum_name: String,
}

impl Default for RustEmitter {
    fn default() -> Self {
        Self {
            enum_name: "Opcode".into(),
        }
    }
}

/// Keywords a CamelCase variant can collide with.
const RESERVED_VARIANTS: &[&str] = &["Self"];

/// CamelCase variant for a mnemonic: `close_if_body` becomes `CloseIfBody`
/// and `pop_` becomes `Pop`.
pub fn variant_name(mnemonic: &str) -> String {
    mnemonic
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

impl RustEmitter {
    fn variants(&self, table: &OpcodeTable) -> EmitResult<Vec<String>> {
        let mut seen = HashMap::new();
        let mut variants = Vec::with_capacity(table.len());
        for entry in table {
            let variant = variant_name(entry.mnemonic.as_str());
            let starts_well = variant.chars().next().map_or(false, char::is_alphabetic);
            if !starts_well || RESERVED_VARIANTS.contains(&variant.as_str()) {
                return Err(EmitError::InvalidIdentifier(entry.mnemonic.to_string()));
            }
            if let Some(first) = seen.insert(variant.clone(), entry.code) {
                return Err(EmitError::DuplicateVariant {
                    variant,
                    first,
                    second: entry.code,
                });
            }
            variants.push(variant);
        }
        Ok(variants)
    }
}

impl Emitter for RustEmitter {
    fn render(&self, table: &OpcodeTable) -> EmitResult<String> {
        let variants = self.variants(table)?;
        let rows = || table.iter().zip(variants.iter());

        let mut out = String::from("// Generated by irgen. Do not edit.\n\n");
        // A zero-variant enum cannot have a repr.
        if !table.is_empty() {
            out += "#[repr(u32)]\n";
        }
        out += "#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]\n";
        out += &format!("pub enum {} {{\n", self.enum_name);
        for (entry, variant) in rows() {
            out += &format!("    {} = {},\n", variant, entry.code);
        }
        out += "}\n\n";

        out += &format!("impl {} {{\n", self.enum_name);
        out += "    pub fn from_code(code: u32) -> Option<Self> {\n";
        out += "        match code {\n";
        for (entry, variant) in rows() {
            out += &format!("            {} => Some(Self::{}),\n", entry.code, variant);
        }
        out += "            _ => None,\n";
        out += "        }\n";
        out += "    }\n\n";

        out += "    pub fn name(self) -> &'static str {\n";
        out += "        match self {\n";
        for (entry, variant) in rows() {
            out += &format!("            Self::{} => \"{}\",\n", variant, entry.mnemonic.upper());
        }
        out += "        }\n";
        out += "    }\n";
        out += "}\n";
        Ok(out)
    }
}
