/*
    The default meep instruction set as a native enum.

    Discriminants are positions in `DEFAULT_MNEMONICS`, and names are read
    back from `DEFAULT_TABLE`, so the listing stays the single source of
    truth. The tests below keep the variant list in step with it.
*/
use std::str::FromStr;

use lazy_static::lazy_static;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::{
    error::table::*,
    table::{Code, Mnemonic, DEFAULT_TABLE},
};

lazy_static! {
    static ref NAMES: Vec<String> = DEFAULT_TABLE.iter().map(|e| e.mnemonic.upper()).collect();
}

#[allow(unused)]
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum Opcode {
    Pop,         // 0  POP_
    Push,        // 1  PUSH_
    Inc,         // 2  INC
    Dec,         // 3  DEC
    Add,         // 4  ADD
    Sub,         // 5  SUB
    Equals,      // 6  EQUALS
    SetVar,      // 7  SET_VAR
    GetVar,      // 8  GET_VAR
    IncN,        // 9  INC_N
    False,       // 10 FALSE_
    True,        // 11 TRUE_
    LoadByte,    // 12 LOAD_BYTE
    Print,       // 13 PRINT
    StartIf,     // 14 START_IF
    CloseIfBody, // 15 CLOSE_IF_BODY
    EndIf,       // 16 END_IF
    StartElse,   // 17 START_ELSE
    EndElse,     // 18 END_ELSE
    StartLoop,   // 19 START_LOOP
    EndLoop,     // 20 END_LOOP
    Popn,        // 21 POPN
    CmpLess,     // 22 CMP_LESS
    CmpGreater,  // 23 CMP_GREATER
    LoadString,  // 24 LOAD_STRING
    MakeBus,     // 25 MAKE_BUS
    IndexVar,    // 26 INDEX_VAR
    MutateBus,   // 27 MUTATE_BUS
}

impl Opcode {
    pub const COUNT: usize = Opcode::MutateBus as usize + 1;

    pub fn code(self) -> Code {
        self as Code
    }

    pub fn from_code(code: Code) -> Option<Self> {
        Self::from_u32(code)
    }

    /// Mnemonic as declared, e.g. `pop_`.
    pub fn mnemonic(self) -> &'static Mnemonic {
        &DEFAULT_TABLE.entries()[self as usize].mnemonic
    }

    /// Upper-cased mnemonic, e.g. `POP_`.
    pub fn name(self) -> &'static str {
        &NAMES[self as usize]
    }

    pub fn all() -> impl Iterator<Item = Opcode> {
        (0..Self::COUNT as Code).filter_map(Self::from_code)
    }
}

impl TryFrom<Code> for Opcode {
    type Error = TableError;

    fn try_from(code: Code) -> TableResult<Self> {
        Self::from_code(code).ok_or(TableError::UnknownOpcode(code))
    }
}

impl FromStr for Opcode {
    type Err = TableError;

    fn from_str(s: &str) -> TableResult<Self> {
        DEFAULT_TABLE
            .code_for(s)
            .and_then(Self::from_code)
            .ok_or_else(|| TableError::UnknownMnemonic(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::variant_name;

    #[test]
    fn in_step_with_listing() {
        assert_eq!(Opcode::COUNT, DEFAULT_TABLE.len());
        assert_eq!(Opcode::all().count(), DEFAULT_TABLE.len());
        for (op, entry) in Opcode::all().zip(DEFAULT_TABLE.iter()) {
            assert_eq!(op.code(), entry.code);
            assert_eq!(format!("{:?}", op), variant_name(entry.mnemonic.as_str()));
        }
    }

    #[test]
    fn round_trip() {
        for op in Opcode::all() {
            let name = op.mnemonic().as_str();
            assert_eq!(name.parse::<Opcode>(), Ok(op));
            assert_eq!(Opcode::try_from(op.code()), Ok(op));
            assert_eq!(op.name(), name.to_ascii_uppercase());
        }
    }

    #[test]
    fn names() {
        assert_eq!(Opcode::Pop.name(), "POP_");
        assert_eq!(Opcode::CloseIfBody.name(), "CLOSE_IF_BODY");
        assert_eq!(Opcode::MutateBus.mnemonic().as_str(), "mutate_bus");
        assert_eq!(Opcode::from_code(6), Some(Opcode::Equals));
    }

    #[test]
    fn out_of_range() {
        assert_eq!(Opcode::from_code(28), None);
        assert_eq!(Opcode::try_from(99), Err(TableError::UnknownOpcode(99)));
        assert_eq!(
            "mul".parse::<Opcode>(),
            Err(TableError::UnknownMnemonic("mul".into()))
        );
    }
}
