use std::{collections::HashMap, fmt, slice::Iter};

use lazy_static::lazy_static;
use serde::Serialize;

use crate::{config::DEFAULT_MNEMONICS, error::table::*, scanner};

/// Numeric discriminant of an opcode.
pub type Code = u32;

/// Symbolic name of an opcode, as written in the listing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Mnemonic(String);

impl Mnemonic {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name reported by the reverse mapping.
    pub fn upper(&self) -> String {
        self.0.to_uppercase()
    }

    /// Usable unquoted as a key or identifier in generated code.
    pub fn is_bare_word(&self) -> bool {
        match self.0.chars().next() {
            Some(c) => !c.is_numeric(),
            None => false,
        }
    }
}

impl From<&str> for Mnemonic {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for Mnemonic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub mnemonic: Mnemonic,
    pub code: Code,
}

/// Opcodes in declaration order. The code of every entry is its position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpcodeTable {
    entries: Vec<Entry>,
}

lazy_static! {
    /// The instruction set embedded in [DEFAULT_MNEMONICS].
    pub static ref DEFAULT_TABLE: OpcodeTable = OpcodeTable::from_source(DEFAULT_MNEMONICS);
}

impl OpcodeTable {
    /// Number the mnemonics `0..N` in the order given.
    ///
    /// A repeated mnemonic gets a fresh code like any other entry. Looking it
    /// up by name afterwards yields the later code; see [OpcodeTable::code_for].
    pub fn assign<I>(mnemonics: I) -> Self
    where
        I: IntoIterator<Item = Mnemonic>,
    {
        let entries = mnemonics
            .into_iter()
            .enumerate()
            .map(|(position, mnemonic)| Entry {
                mnemonic,
                code: position as Code,
            })
            .collect();
        Self { entries }
    }

    /// Like [OpcodeTable::assign], but a repeated mnemonic is an error.
    pub fn assign_strict<I>(mnemonics: I) -> TableResult<Self>
    where
        I: IntoIterator<Item = Mnemonic>,
    {
        let table = Self::assign(mnemonics);
        match table.duplicates().into_iter().next() {
            Some((mnemonic, first, second)) => Err(TableError::DuplicateMnemonic {
                mnemonic: mnemonic.to_string(),
                first,
                second,
            }),
            None => Ok(table),
        }
    }

    pub fn from_source(source: &str) -> Self {
        Self::assign(scanner::extract(source))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Code a name-keyed mapping resolves `name` to. The last occurrence wins.
    pub fn code_for(&self, name: &str) -> Option<Code> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.mnemonic.as_str() == name)
            .map(|entry| entry.code)
    }

    /// Upper-cased mnemonic for `code`.
    pub fn mnemonic_for(&self, code: Code) -> TableResult<String> {
        self.entries
            .get(code as usize)
            .map(|entry| entry.mnemonic.upper())
            .ok_or(TableError::UnknownOpcode(code))
    }

    /// The forward mapping as a consumer of the artifact sees it.
    pub fn by_name(&self) -> HashMap<String, Code> {
        self.entries
            .iter()
            .map(|entry| (entry.mnemonic.to_string(), entry.code))
            .collect()
    }

    /// Every repeat as `(mnemonic, earlier code, later code)`, ordered by the
    /// later code. A mnemonic seen three times is reported twice.
    pub fn duplicates(&self) -> Vec<(Mnemonic, Code, Code)> {
        let mut seen: HashMap<&str, Code> = HashMap::new();
        let mut duplicates = vec![];
        for entry in &self.entries {
            if let Some(earlier) = seen.insert(entry.mnemonic.as_str(), entry.code) {
                duplicates.push((entry.mnemonic.clone(), earlier, entry.code));
            }
        }
        duplicates
    }
}

impl<'a> IntoIterator for &'a OpcodeTable {
    type Item = &'a Entry;
    type IntoIter = Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
