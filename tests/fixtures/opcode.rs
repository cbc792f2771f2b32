// Generated by irgen. Do not edit.

#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    Pop = 0,
    Push = 1,
    Inc = 2,
    Dec = 3,
    Add = 4,
    Sub = 5,
    Equals = 6,
    SetVar = 7,
    GetVar = 8,
    IncN = 9,
    False = 10,
    True = 11,
    LoadByte = 12,
    Print = 13,
    StartIf = 14,
    CloseIfBody = 15,
    EndIf = 16,
    StartElse = 17,
    EndElse = 18,
    StartLoop = 19,
    EndLoop = 20,
    Popn = 21,
    CmpLess = 22,
    CmpGreater = 23,
    LoadString = 24,
    MakeBus = 25,
    IndexVar = 26,
    MutateBus = 27,
}

impl Opcode {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Pop),
            1 => Some(Self::Push),
            2 => Some(Self::Inc),
            3 => Some(Self::Dec),
            4 => Some(Self::Add),
            5 => Some(Self::Sub),
            6 => Some(Self::Equals),
            7 => Some(Self::SetVar),
            8 => Some(Self::GetVar),
            9 => Some(Self::IncN),
            10 => Some(Self::False),
            11 => Some(Self::True),
            12 => Some(Self::LoadByte),
            13 => Some(Self::Print),
            14 => Some(Self::StartIf),
            15 => Some(Self::CloseIfBody),
            16 => Some(Self::EndIf),
            17 => Some(Self::StartElse),
            18 => Some(Self::EndElse),
            19 => Some(Self::StartLoop),
            20 => Some(Self::EndLoop),
            21 => Some(Self::Popn),
            22 => Some(Self::CmpLess),
            23 => Some(Self::CmpGreater),
            24 => Some(Self::LoadString),
            25 => Some(Self::MakeBus),
            26 => Some(Self::IndexVar),
            27 => Some(Self::MutateBus),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Pop => "POP_",
            Self::Push => "PUSH_",
            Self::Inc => "INC",
            Self::Dec => "DEC",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Equals => "EQUALS",
            Self::SetVar => "SET_VAR",
            Self::GetVar => "GET_VAR",
            Self::IncN => "INC_N",
            Self::False => "FALSE_",
            Self::True => "TRUE_",
            Self::LoadByte => "LOAD_BYTE",
            Self::Print => "PRINT",
            Self::StartIf => "START_IF",
            Self::CloseIfBody => "CLOSE_IF_BODY",
            Self::EndIf => "END_IF",
            Self::StartElse => "START_ELSE",
            Self::EndElse => "END_ELSE",
            Self::StartLoop => "START_LOOP",
            Self::EndLoop => "END_LOOP",
            Self::Popn => "POPN",
            Self::CmpLess => "CMP_LESS",
            Self::CmpGreater => "CMP_GREATER",
            Self::LoadString => "LOAD_STRING",
            Self::MakeBus => "MAKE_BUS",
            Self::IndexVar => "INDEX_VAR",
            Self::MutateBus => "MUTATE_BUS",
        }
    }
}
