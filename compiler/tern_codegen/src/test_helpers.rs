//! Shared test utilities for building IR.
//!
//! Factory functions used across the type, coercion, expression, class and
//! program tests. Only compiled in test builds.

use tern_ir::{
    BinaryOp, Class, ClassCallKind, ClassId, Expr, ExprId, ExprKind, Field, LibraryMethod,
    Literal, Method, MethodCallKind, MethodRef, Program, Stmt, Symbol, Type, Visibility,
};

use crate::context::CodegenContext;
use crate::cpp::expr::emit_expr;
use crate::precedence::Precedence;

/// Allocate an expression.
pub(crate) fn alloc(program: &mut Program, kind: ExprKind, ty: Type) -> ExprId {
    program.alloc(Expr::new(kind, ty))
}

pub(crate) fn int(program: &mut Program, value: i64, ty: Type) -> ExprId {
    alloc(program, ExprKind::Literal(Literal::Int(value)), ty)
}

pub(crate) fn double(program: &mut Program, value: f64) -> ExprId {
    alloc(program, ExprKind::Literal(Literal::Double(value)), Type::Double)
}

pub(crate) fn string(program: &mut Program, value: &str) -> ExprId {
    alloc(
        program,
        ExprKind::Literal(Literal::String(value.to_string())),
        Type::STRING_VIEW,
    )
}

pub(crate) fn null(program: &mut Program) -> ExprId {
    alloc(program, ExprKind::Literal(Literal::Null), Type::Null)
}

/// Reference to a local variable or parameter.
pub(crate) fn local(program: &mut Program, name: &str, ty: Type) -> ExprId {
    alloc(program, ExprKind::Symbol(Symbol::Local(name.to_string())), ty)
}

pub(crate) fn binary(
    program: &mut Program,
    op: BinaryOp,
    left: ExprId,
    right: ExprId,
    ty: Type,
) -> ExprId {
    alloc(program, ExprKind::Binary { op, left, right }, ty)
}

/// `array[index]`, typed by the array's element type.
pub(crate) fn index(program: &mut Program, array: ExprId, index: ExprId) -> ExprId {
    let array_ty = &program.expr(array).ty;
    let ty = match array_ty {
        Type::String(_) => Type::I32,
        other => other.element_type().cloned().unwrap_or(Type::Void),
    };
    binary(program, BinaryOp::Index, array, index, ty)
}

pub(crate) fn library_call(
    program: &mut Program,
    object: ExprId,
    method: LibraryMethod,
    args: Vec<ExprId>,
    ty: Type,
) -> ExprId {
    alloc(
        program,
        ExprKind::Call {
            object,
            method: MethodRef::Library(method),
            args,
        },
        ty,
    )
}

/// Reference to the math namespace.
pub(crate) fn math(program: &mut Program) -> ExprId {
    alloc(program, ExprKind::Symbol(Symbol::Math), Type::Void)
}

/// A public, non-mutating method.
pub(crate) fn method(
    name: &str,
    call_kind: MethodCallKind,
    return_type: Type,
    body: Option<Stmt>,
) -> Method {
    Method {
        name: name.to_string(),
        visibility: Visibility::Public,
        call_kind,
        is_mutator: false,
        return_type,
        params: Vec::new(),
        body,
    }
}

pub(crate) fn field(name: &str, visibility: Visibility, ty: Type) -> Field {
    Field {
        name: name.to_string(),
        visibility,
        ty,
        value: None,
    }
}

/// Add an empty normal class.
pub(crate) fn add_class(program: &mut Program, name: &str) -> ClassId {
    program.add_class(Class::new(name, ClassCallKind::Normal))
}

/// Render `id` in statement context.
pub(crate) fn render(program: &Program, id: ExprId) -> String {
    render_at(program, id, Precedence::Statement)
}

/// Render `id` inside a context of precedence `parent`.
pub(crate) fn render_at(program: &Program, id: ExprId, parent: Precedence) -> String {
    let ctx = CodegenContext::new(program);
    emit_expr(&ctx, id, parent).unwrap_or_else(|err| panic!("render failed: {err}"))
}
