//! Rendering of an [OpcodeTable] into source text.
//!
//! Every target derives both directions of the mapping from the same
//! table, so the forward and reverse halves of an artifact cannot drift.

use std::{fmt, str::FromStr};

use crate::{config::Config, error::emit::*, table::OpcodeTable};

mod js;
mod json;
mod rust;

pub use js::JsEmitter;
pub use json::JsonEmitter;
pub use rust::{variant_name, RustEmitter};

pub trait Emitter {
    fn render(&self, table: &OpcodeTable) -> EmitResult<String>;
}

/// Language of the generated artifact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Target {
    /// CommonJS module exporting a frozen map and a reverse function.
    #[default]
    Js,
    /// Native enumeration with a name accessor.
    Rust,
    /// Plain data for other tooling.
    Json,
}

impl Target {
    /// Targets that key their output on the mnemonic itself cannot carry a
    /// repeated one.
    pub fn requires_unique(self) -> bool {
        matches!(self, Target::Rust)
    }

    pub fn emitter(self, config: &Config) -> Box<dyn Emitter> {
        match self {
            Target::Js => Box::new(JsEmitter {
                map_name: config.map_name.clone(),
                fn_name: config.fn_name.clone(),
            }),
            Target::Rust => Box::new(RustEmitter::default()),
            Target::Json => Box::new(JsonEmitter),
        }
    }
}

impl FromStr for Target {
    type Err = EmitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "js" | "javascript" => Ok(Target::Js),
            "rs" | "rust" => Ok(Target::Rust),
            "json" => Ok(Target::Json),
            _ => Err(EmitError::UnknownTarget(s.to_string())),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Target::Js => "js",
            Target::Rust => "rust",
            Target::Json => "json",
        })
    }
}

/// Render `table` with the emitter `config` selects.
pub fn render(table: &OpcodeTable, config: &Config) -> EmitResult<String> {
    config.target.emitter(config).render(table)
}
