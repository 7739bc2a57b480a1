use pretty_assertions::assert_eq;
use tern_ir::{BinaryOp, ExprId, ExprKind, LibraryMethod, Program, PtrModifier, Type};

use super::{emit_assign_right, emit_coerced};
use crate::context::CodegenContext;
use crate::precedence::Precedence;
use crate::test_helpers::{
    add_class, alloc, binary, double, index, int, library_call, local, math, string,
};

fn coerce(program: &Program, target: &Type, id: ExprId) -> String {
    let ctx = CodegenContext::new(program);
    emit_coerced(&ctx, target, id, Precedence::Statement).unwrap_or_else(|err| panic!("{err}"))
}

fn assign_right(program: &Program, left: ExprId, right: ExprId) -> String {
    let ctx = CodegenContext::new(program);
    emit_assign_right(&ctx, left, right).unwrap_or_else(|err| panic!("{err}"))
}

#[test]
fn class_value_to_borrowed_pointer_takes_address() {
    let mut program = Program::new();
    let class = add_class(&mut program, "Item");
    let item = local(&mut program, "item", Type::Class(class));
    assert_eq!(
        coerce(&program, &Type::class_ptr(PtrModifier::None, class), item),
        "&item"
    );
    assert_eq!(
        coerce(&program, &Type::class_ptr(PtrModifier::Mut, class), item),
        "&item"
    );
}

#[test]
fn shared_pointer_to_borrowed_pointer_uses_get() {
    let mut program = Program::new();
    let class = add_class(&mut program, "Item");
    let shared = local(
        &mut program,
        "item",
        Type::class_ptr(PtrModifier::Shared, class),
    );
    assert_eq!(
        coerce(&program, &Type::class_ptr(PtrModifier::None, class), shared),
        "item.get()"
    );
    // A shared target keeps the shared pointer.
    assert_eq!(
        coerce(&program, &Type::class_ptr(PtrModifier::Shared, class), shared),
        "item"
    );
}

#[test]
fn arrays_decay_to_raw_pointers() {
    let mut program = Program::new();
    let storage = local(&mut program, "buffer", Type::array_storage(Type::U8, 8));
    let shared = local(
        &mut program,
        "data",
        Type::array_ptr(PtrModifier::Shared, Type::U8),
    );
    let raw = local(&mut program, "p", Type::array_ptr(PtrModifier::Mut, Type::U8));
    let target = Type::array_ptr(PtrModifier::None, Type::U8);
    assert_eq!(coerce(&program, &target, storage), "buffer.data()");
    assert_eq!(coerce(&program, &target, shared), "data.get()");
    assert_eq!(coerce(&program, &target, raw), "p");
}

#[test]
fn wide_integer_narrows_with_cast() {
    let mut program = Program::new();
    let wide = local(&mut program, "total", Type::I64);
    let mask = int(&mut program, 0xff, Type::I64);
    let masked = binary(&mut program, BinaryOp::BitAnd, wide, mask, Type::I64);
    assert_eq!(
        coerce(&program, &Type::I32, wide),
        "static_cast<int32_t>(total)"
    );
    assert_eq!(coerce(&program, &Type::U8, masked), "static_cast<uint8_t>(total)");
    assert_eq!(
        coerce(&program, &Type::I16, masked),
        "static_cast<int16_t>(total & 255)"
    );
    assert_eq!(coerce(&program, &Type::I64, wide), "total");
}

#[test]
fn float_targets() {
    let mut program = Program::new();
    let literal = double(&mut program, 1.5);
    let value = local(&mut program, "ratio", Type::Double);
    assert_eq!(coerce(&program, &Type::Float, literal), "1.5f");
    assert_eq!(
        coerce(&program, &Type::Float, value),
        "static_cast<float>(ratio)"
    );
    assert_eq!(coerce(&program, &Type::Double, value), "ratio");
}

#[test]
fn truncation_casts_its_argument() {
    let mut program = Program::new();
    let m = math(&mut program);
    let x = local(&mut program, "x", Type::Double);
    let truncated = library_call(
        &mut program,
        m,
        LibraryMethod::Math("Truncate".to_string()),
        vec![x],
        Type::FloatInt,
    );
    let floored = library_call(
        &mut program,
        m,
        LibraryMethod::Math("Floor".to_string()),
        vec![x],
        Type::FloatInt,
    );
    assert_eq!(
        coerce(&program, &Type::I32, truncated),
        "static_cast<int32_t>(x)"
    );
    assert_eq!(
        coerce(&program, &Type::I32, floored),
        "static_cast<int32_t>(std::floor(x))"
    );
}

#[test]
fn select_coerces_both_branches() {
    let mut program = Program::new();
    let flag = local(&mut program, "flag", Type::Bool);
    let a = double(&mut program, 1.0);
    let b = double(&mut program, 2.5);
    let select = alloc(
        &mut program,
        ExprKind::Select {
            cond: flag,
            then: a,
            otherwise: b,
        },
        Type::Double,
    );
    assert_eq!(coerce(&program, &Type::Float, select), "flag ? 1.0f : 2.5f");
    let ctx = CodegenContext::new(&program);
    assert_eq!(
        emit_coerced(&ctx, &Type::Float, select, Precedence::Add),
        Ok("(flag ? 1.0f : 2.5f)".to_string())
    );
}

#[test]
fn indexed_store_narrows_promoted_values() {
    let mut program = Program::new();
    let bytes = local(
        &mut program,
        "bytes",
        Type::array_ptr(PtrModifier::Mut, Type::U8),
    );
    let i = local(&mut program, "i", Type::I32);
    let slot = index(&mut program, bytes, i);
    let value = local(&mut program, "value", Type::U8);
    let one = int(&mut program, 1, Type::I32);
    let sum = binary(&mut program, BinaryOp::Add, value, one, Type::I32);
    let literal = int(&mut program, 200, Type::U8);

    // Arithmetic on bytes is promoted to int32_t.
    assert_eq!(
        assign_right(&program, slot, sum),
        "static_cast<uint8_t>(value + 1)"
    );
    // A bare named byte is also read at its promoted width.
    assert_eq!(
        assign_right(&program, slot, value),
        "static_cast<uint8_t>(value)"
    );
    // Literals keep their declared width.
    assert_eq!(assign_right(&program, slot, literal), "200");
}

#[test]
fn signed_byte_copy_needs_no_cast() {
    let mut program = Program::new();
    let ty = Type::array_ptr(PtrModifier::Mut, Type::I8);
    let dst = local(&mut program, "dst", ty.clone());
    let src = local(&mut program, "src", ty);
    let i = local(&mut program, "i", Type::I32);
    let to = index(&mut program, dst, i);
    let from = index(&mut program, src, i);
    assert_eq!(assign_right(&program, to, from), "src[i]");
}

#[test]
fn plain_assignment_uses_general_coercion() {
    let mut program = Program::new();
    let target = local(&mut program, "n", Type::I32);
    let wide = local(&mut program, "wide", Type::I64);
    let text = string(&mut program, "x");
    let s = local(&mut program, "s", Type::STRING_OWNED);
    assert_eq!(
        assign_right(&program, target, wide),
        "static_cast<int32_t>(wide)"
    );
    assert_eq!(assign_right(&program, s, text), "\"x\"");
}
