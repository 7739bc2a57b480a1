//! Coercion of an expression to a required type.
//!
//! Ordered rules, first match wins:
//!
//! 1. Borrowed class pointer from a class value: take its address.
//! 2. Borrowed class pointer from a shared pointer: `.get()`.
//! 3. Borrowed array pointer: array decay (`.data()` for storage, `.get()`
//!    for shared arrays, raw pointers unchanged).
//! 4. Otherwise the shared numeric rules of [`numeric_coercion`].

use tern_ir::{ExprId, ExprKind, PtrModifier, Type};

use crate::c_family::{
    indexed_store, numeric_coercion, static_cast_operand, IndexedStore, NumericCoercion,
};
use crate::context::CodegenContext;
use crate::cpp::expr::emit_expr;
use crate::cpp::types::render_type;
use crate::precedence::{parenthesize, Precedence};
use crate::CodegenError;

/// Render `id` converted to `target`.
pub fn emit_coerced(
    ctx: &CodegenContext<'_>,
    target: &Type,
    id: ExprId,
    parent: Precedence,
) -> Result<String, CodegenError> {
    let expr = ctx.expr(id);
    match target {
        Type::ClassPtr { modifier, .. } if *modifier != PtrModifier::Shared => match &expr.ty {
            Type::Class(_) => {
                return Ok(format!("&{}", emit_expr(ctx, id, Precedence::Primary)?));
            }
            Type::ClassPtr {
                modifier: PtrModifier::Shared,
                ..
            } => return Ok(format!("{}.get()", emit_expr(ctx, id, Precedence::Primary)?)),
            _ => {}
        },
        Type::ArrayPtr { modifier, .. } if *modifier != PtrModifier::Shared => {
            return emit_array_ptr(ctx, id, parent);
        }
        _ => {}
    }

    if let ExprKind::Select {
        cond,
        then,
        otherwise,
    } = &expr.kind
    {
        return emit_select(ctx, target, *cond, *then, *otherwise, parent);
    }

    match numeric_coercion(ctx.program, target, id) {
        NumericCoercion::None => emit_expr(ctx, id, parent),
        NumericCoercion::FloatSuffix => {
            Ok(format!("{}f", emit_expr(ctx, id, Precedence::Primary)?))
        }
        NumericCoercion::Cast(operand) => {
            tracing::trace!(ty = ?target, "numeric cast");
            emit_static_cast(ctx, target, operand)
        }
    }
}

/// `cond ? then : otherwise` with both branches coerced to `target`.
pub fn emit_select(
    ctx: &CodegenContext<'_>,
    target: &Type,
    cond: ExprId,
    then: ExprId,
    otherwise: ExprId,
    parent: Precedence,
) -> Result<String, CodegenError> {
    let text = format!(
        "{} ? {} : {}",
        emit_expr(ctx, cond, Precedence::CondOr)?,
        emit_coerced(ctx, target, then, Precedence::Select)?,
        emit_coerced(ctx, target, otherwise, Precedence::Select)?
    );
    Ok(parenthesize(text, Precedence::Select, parent))
}

/// Render `id` as a raw pointer to its first element.
pub fn emit_array_ptr(
    ctx: &CodegenContext<'_>,
    id: ExprId,
    parent: Precedence,
) -> Result<String, CodegenError> {
    match &ctx.expr(id).ty {
        Type::ArrayStorage { .. } => {
            Ok(format!("{}.data()", emit_expr(ctx, id, Precedence::Primary)?))
        }
        Type::ArrayPtr {
            modifier: PtrModifier::Shared,
            ..
        } => Ok(format!("{}.get()", emit_expr(ctx, id, Precedence::Primary)?)),
        _ => emit_expr(ctx, id, parent),
    }
}

/// `static_cast<target>(id)`, eliding a redundant full-width mask.
pub fn emit_static_cast(
    ctx: &CodegenContext<'_>,
    target: &Type,
    id: ExprId,
) -> Result<String, CodegenError> {
    let operand = static_cast_operand(ctx.program, target, id);
    Ok(format!(
        "static_cast<{}>({})",
        render_type(ctx.program, target, false)?,
        emit_expr(ctx, operand, Precedence::Argument)?
    ))
}

/// Right-hand side of `left = right`.
///
/// Stores into array or string element slots narrow explicitly when the
/// promoted value is wider than the element.
pub fn emit_assign_right(
    ctx: &CodegenContext<'_>,
    left: ExprId,
    right: ExprId,
) -> Result<String, CodegenError> {
    let left_expr = ctx.expr(left);
    if left_expr.is_indexing() {
        match indexed_store(ctx.program, &left_expr.ty, right)? {
            IndexedStore::Plain => return emit_expr(ctx, right, Precedence::Assign),
            IndexedStore::Cast => {
                tracing::trace!(element = ?left_expr.ty, "narrowing indexed store");
                return emit_static_cast(ctx, &left_expr.ty, right);
            }
            IndexedStore::Coerce => {}
        }
    }
    emit_coerced(ctx, &left_expr.ty, right, Precedence::Argument)
}

#[cfg(test)]
mod tests;
