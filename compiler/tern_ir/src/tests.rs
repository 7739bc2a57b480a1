use pretty_assertions::assert_eq;

use crate::{
    Class, ClassCallKind, Expr, ExprKind, Literal, Program, PtrModifier, StringKind, Type,
};

fn hierarchy() -> (Program, [crate::ClassId; 3]) {
    let mut program = Program::new();
    let base = program.add_class(Class::new("Base", ClassCallKind::Abstract));
    let mut middle = Class::new("Middle", ClassCallKind::Normal);
    middle.parent = Some(base);
    let middle = program.add_class(middle);
    let other = program.add_class(Class::new("Other", ClassCallKind::Normal));
    (program, [base, middle, other])
}

#[test]
fn derived_class_is_same_or_derived() {
    let (program, [base, middle, other]) = hierarchy();
    assert!(program.is_same_or_derived(middle, base));
    assert!(program.is_same_or_derived(base, base));
    assert!(!program.is_same_or_derived(base, middle));
    assert!(!program.is_same_or_derived(other, base));
}

#[test]
fn class_ptr_assignability_ignores_modifiers() {
    let (program, [base, middle, other]) = hierarchy();
    let target = Type::class_ptr(PtrModifier::None, base);
    let shared = Type::class_ptr(PtrModifier::Shared, middle);
    assert!(target.is_assignable_class_ptr(&shared, &program));
    assert!(target.is_assignable_class_ptr(&Type::Class(middle), &program));
    assert!(target.is_assignable_class_ptr(&Type::Null, &program));
    assert!(!target.is_assignable_class_ptr(&Type::class_ptr(PtrModifier::Mut, other), &program));
    assert!(!Type::Class(base).is_assignable_class_ptr(&Type::Class(base), &program));
}

#[test]
fn base_class_strips_arrays_but_not_class_pointers() {
    let (_, [base, middle, _]) = hierarchy();
    assert_eq!(Type::Class(base).base_class(), Some(base));
    assert_eq!(
        Type::array_storage(Type::array_storage(Type::Class(middle), 2), 4).base_class(),
        Some(middle)
    );
    assert_eq!(Type::class_ptr(PtrModifier::Shared, base).base_class(), None);
    assert_eq!(
        Type::array_ptr(PtrModifier::Shared, Type::Class(base)).base_class(),
        Some(base)
    );
    assert_eq!(
        Type::array_ptr(PtrModifier::None, Type::class_ptr(PtrModifier::Shared, base))
            .base_class(),
        None
    );
    assert_eq!(Type::String(StringKind::Owned).base_class(), None);
}

#[test]
fn arena_ids_are_sequential() {
    let mut program = Program::new();
    let a = program.alloc(Expr::new(ExprKind::Literal(Literal::Int(1)), Type::I32));
    let b = program.alloc(Expr::new(ExprKind::Literal(Literal::Int(2)), Type::I32));
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(program.expr(b).as_literal(), Some(&Literal::Int(2)));
    assert_eq!(program.exprs.len(), 2);
}

#[test]
fn default_value_literals() {
    assert!(Literal::Null.is_default_value());
    assert!(Literal::Bool(false).is_default_value());
    assert!(Literal::Int(0).is_default_value());
    assert!(Literal::Double(0.0).is_default_value());
    assert!(!Literal::Int(3).is_default_value());
    assert!(!Literal::String(String::new()).is_default_value());
}
