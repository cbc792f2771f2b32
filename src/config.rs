use std::path::{Path, PathBuf};

use crate::{
    emitter::Target,
    error::{fileio::FileIOResult, table::TableResult},
    fileio,
    table::OpcodeTable,
    scanner, warn,
};

/// Instruction set of the meep IR. Order is significant: it fixes the codes.
pub const DEFAULT_MNEMONICS: &str = "
  pop_ push_ inc dec
  add sub equals
  set_var get_var
  inc_n false_ true_
  load_byte print start_if close_if_body
  end_if start_else end_else start_loop end_loop
  popn cmp_less cmp_greater load_string make_bus
  index_var mutate_bus
";

/// Where the artifact lands when no output is given.
pub const DEFAULT_OUTPUT: &str = "src/meep/ir.js";

pub const DEFAULT_MAP_NAME: &str = "IR";
pub const DEFAULT_FN_NAME: &str = "irToString";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Whitespace separated mnemonics.
    pub source: String,
    pub output: PathBuf,
    pub target: Target,
    /// Reject repeated mnemonics instead of letting the later one shadow.
    pub strict: bool,
    /// Name of the frozen mapping in the JS artifact.
    pub map_name: String,
    /// Name of the reverse function in the JS artifact.
    pub fn_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_MNEMONICS.into(),
            output: DEFAULT_OUTPUT.into(),
            target: Target::default(),
            strict: false,
            map_name: DEFAULT_MAP_NAME.into(),
            fn_name: DEFAULT_FN_NAME.into(),
        }
    }
}

impl Config {
    /// Read the mnemonic listing from `path` instead of the embedded one.
    pub fn with_input_file(mut self, path: impl AsRef<Path>) -> FileIOResult<Self> {
        self.source = fileio::read_source(path)?;
        Ok(self)
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Whether duplicates are rejected, either by request or because the
    /// target cannot express them.
    pub fn is_strict(&self) -> bool {
        self.strict || self.target.requires_unique()
    }

    /// Extract and number the configured mnemonics.
    pub fn assign(&self) -> TableResult<OpcodeTable> {
        let mnemonics = scanner::extract(&self.source);
        if self.is_strict() {
            return OpcodeTable::assign_strict(mnemonics);
        }

        let table = OpcodeTable::assign(mnemonics);
        for (mnemonic, first, second) in table.duplicates() {
            warn!(
                "`{}` is declared at codes {} and {}; lookups by name resolve to {}",
                mnemonic, first, second, second
            );
        }
        Ok(table)
    }
}
