use irgen::{generate, Config, Target, DEFAULT_TABLE};

mod generated {
    include!("fixtures/opcode.rs");
}

use generated::Opcode;

#[test]
fn fixture_is_current() {
    let text = generate(&Config::default().with_target(Target::Rust))
        .unwrap()
        .text;
    assert_eq!(text, include_str!("fixtures/opcode.rs"));
}

#[test]
fn generated_enum_round_trips() {
    for entry in DEFAULT_TABLE.iter() {
        let op = Opcode::from_code(entry.code).unwrap();
        assert_eq!(op as u32, entry.code);
        assert_eq!(op.name(), entry.mnemonic.upper());
    }
    assert_eq!(Opcode::from_code(DEFAULT_TABLE.len() as u32), None);
}

#[test]
fn generated_enum_agrees_with_native_enum() {
    for op in irgen::Opcode::all() {
        let generated = Opcode::from_code(op.code()).unwrap();
        assert_eq!(generated.name(), op.name());
        assert_eq!(format!("{:?}", generated), format!("{:?}", op));
    }
}
