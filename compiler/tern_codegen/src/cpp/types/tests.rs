use pretty_assertions::assert_eq;
use tern_ir::{Enum, Program, PtrModifier, Type};

use super::{render_declaration, render_type};
use crate::test_helpers::add_class;

fn spell(program: &Program, ty: &Type, promote: bool) -> String {
    render_type(program, ty, promote).unwrap_or_else(|err| panic!("{err}"))
}

#[test]
fn scalars() {
    let program = Program::new();
    assert_eq!(spell(&program, &Type::Void, false), "void");
    assert_eq!(spell(&program, &Type::Bool, false), "bool");
    assert_eq!(spell(&program, &Type::Float, false), "float");
    assert_eq!(spell(&program, &Type::FloatInt, false), "double");
    assert_eq!(spell(&program, &Type::STRING_VIEW, false), "std::string_view");
    assert_eq!(spell(&program, &Type::STRING_OWNED, false), "std::string");
}

#[test]
fn integers_respect_promotion() {
    let program = Program::new();
    assert_eq!(spell(&program, &Type::U8, false), "uint8_t");
    assert_eq!(spell(&program, &Type::U8, true), "int32_t");
    assert_eq!(spell(&program, &Type::I16, false), "int16_t");
    assert_eq!(spell(&program, &Type::I64, true), "int64_t");
}

#[test]
fn arrays() {
    let program = Program::new();
    assert_eq!(
        spell(&program, &Type::array_ptr(PtrModifier::None, Type::U8), true),
        "uint8_t const *"
    );
    assert_eq!(
        spell(&program, &Type::array_ptr(PtrModifier::Mut, Type::I32), true),
        "int32_t *"
    );
    assert_eq!(
        spell(&program, &Type::array_ptr(PtrModifier::Shared, Type::I16), true),
        "std::shared_ptr<int16_t[]>"
    );
    assert_eq!(
        spell(&program, &Type::array_storage(Type::U8, 16), true),
        "std::array<uint8_t, 16>"
    );
}

#[test]
fn classes_and_enums() {
    let mut program = Program::new();
    let node = add_class(&mut program, "Node");
    let color = program.add_enum(Enum {
        name: "Color".to_string(),
        members: Vec::new(),
    });
    assert_eq!(
        spell(&program, &Type::class_ptr(PtrModifier::None, node), false),
        "const Node *"
    );
    assert_eq!(
        spell(&program, &Type::class_ptr(PtrModifier::Mut, node), false),
        "Node *"
    );
    assert_eq!(
        spell(&program, &Type::class_ptr(PtrModifier::Shared, node), false),
        "std::shared_ptr<Node>"
    );
    assert_eq!(spell(&program, &Type::Class(node), false), "Node");
    assert_eq!(spell(&program, &Type::Enum(color), false), "Color");
}

#[test]
fn null_has_no_spelling() {
    let program = Program::new();
    assert!(render_type(&program, &Type::Null, false).is_err());
}

#[test]
fn declarations() {
    let mut program = Program::new();
    let node = add_class(&mut program, "Node");
    assert_eq!(
        render_declaration(&program, &Type::U8, "b"),
        Ok("int32_t b".to_string())
    );
    assert_eq!(
        render_declaration(&program, &Type::class_ptr(PtrModifier::Mut, node), "next"),
        Ok("Node *next".to_string())
    );
}
