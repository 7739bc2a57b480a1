//! Expression Code Generation
//!
//! Renders IR expressions as C++ expression text. Every call receives the
//! precedence of its syntactic context and parenthesizes only when the
//! expression's own operator binds looser.

use tern_ir::{
    BinaryOp, ExprId, ExprKind, Literal, PostfixOp, PtrModifier, Symbol, Type, UnaryOp,
};

use crate::c_family::{camel_case, char_literal, one_ascii_char, string_literal};
use crate::context::CodegenContext;
use crate::cpp::calls::emit_call;
use crate::cpp::coerce::{emit_assign_right, emit_coerced, emit_select};
use crate::cpp::resources::resource_name;
use crate::cpp::types::render_type;
use crate::precedence::{parenthesize, Precedence};
use crate::CodegenError;

/// Generate C++ code for an expression in a context of precedence `parent`.
pub fn emit_expr(
    ctx: &CodegenContext<'_>,
    id: ExprId,
    parent: Precedence,
) -> Result<String, CodegenError> {
    let expr = ctx.expr(id);

    match &expr.kind {
        ExprKind::Literal(literal) => emit_literal(literal),
        ExprKind::Symbol(symbol) => emit_symbol(ctx, symbol),
        ExprKind::Member { object, member } => emit_member(ctx, *object, member),
        ExprKind::Unary { op, operand } => {
            let prefix = match op {
                UnaryOp::Neg => "-",
                UnaryOp::Not => "!",
                UnaryOp::BitNot => "~",
                UnaryOp::PreIncrement => "++",
                UnaryOp::PreDecrement => "--",
            };
            let operand = emit_expr(ctx, *operand, Precedence::Primary)?;
            // `- -x` must not collapse into `--x`.
            if (prefix.starts_with('-') && operand.starts_with('-'))
                || (prefix.starts_with('+') && operand.starts_with('+'))
            {
                Ok(format!("{prefix}({operand})"))
            } else {
                Ok(format!("{prefix}{operand}"))
            }
        }
        ExprKind::Postfix { op, operand } => {
            let suffix = match op {
                PostfixOp::Increment => "++",
                PostfixOp::Decrement => "--",
            };
            Ok(format!(
                "{}{suffix}",
                emit_expr(ctx, *operand, Precedence::Primary)?
            ))
        }
        ExprKind::Binary { op, left, right } => emit_binary(ctx, *op, *left, *right, parent),
        ExprKind::Select {
            cond,
            then,
            otherwise,
        } => emit_select(ctx, &expr.ty, *cond, *then, *otherwise, parent),
        ExprKind::Call {
            object,
            method,
            args,
        } => emit_call(ctx, *object, method, args, parent),
        ExprKind::New(class) => Ok(format!(
            "std::make_shared<{}>()",
            ctx.program.class(*class).name
        )),
        ExprKind::NewArray { element, length } => Ok(format!(
            "std::make_shared<{}[]>({})",
            render_type(ctx.program, element, false)?,
            emit_expr(ctx, *length, Precedence::Argument)?
        )),
        ExprKind::Aggregate(items) => emit_aggregate(ctx, &expr.ty, items),
        ExprKind::Resource(name) => Ok(resource_name(name, true)),
    }
}

/// Render a literal.
fn emit_literal(literal: &Literal) -> Result<String, CodegenError> {
    Ok(match literal {
        Literal::Null => "nullptr".to_string(),
        Literal::Bool(value) => value.to_string(),
        Literal::Int(value) if i32::try_from(*value).is_ok() => value.to_string(),
        Literal::Int(value) => format!("{value}LL"),
        Literal::Double(value) if value.is_finite() => {
            // Debug formatting always keeps a decimal point or exponent.
            format!("{value:?}")
        }
        Literal::Double(value) => {
            return Err(CodegenError::unsupported(format!(
                "non-finite floating-point literal {value}"
            )))
        }
        Literal::String(value) => string_literal(value),
    })
}

/// Render a bare symbol reference.
///
/// Fields render through the receiver pointer.
fn emit_symbol(ctx: &CodegenContext<'_>, symbol: &Symbol) -> Result<String, CodegenError> {
    Ok(match symbol {
        Symbol::This => "this".to_string(),
        Symbol::Local(name) => name.clone(),
        Symbol::Field { name, .. } => format!("this->{}", camel_case(name)),
        Symbol::Const { name, .. } => camel_case(name),
        Symbol::EnumValue { enumeration, name } => format!(
            "{}::{}",
            ctx.program.enumeration(*enumeration).name,
            camel_case(name)
        ),
        Symbol::Class(class) => ctx.program.class(*class).name.clone(),
        Symbol::Enum(enumeration) => ctx.program.enumeration(*enumeration).name.clone(),
        Symbol::Math | Symbol::Utf8Encoding | Symbol::StringLength => {
            return Err(CodegenError::unsupported(format!(
                "library symbol {symbol:?} outside a call or member access"
            )))
        }
    })
}

/// Member-access operator for `object.member`.
///
/// Compile-time constants use scope resolution, class pointers use `->`,
/// everything else `.`.
fn member_op(ctx: &CodegenContext<'_>, object: ExprId, member: &Symbol) -> &'static str {
    if matches!(member, Symbol::Const { .. } | Symbol::EnumValue { .. }) {
        "::"
    } else if ctx.expr(object).ty.is_class_ptr() {
        "->"
    } else {
        "."
    }
}

fn emit_member(
    ctx: &CodegenContext<'_>,
    object: ExprId,
    member: &Symbol,
) -> Result<String, CodegenError> {
    let name = match member {
        Symbol::StringLength => {
            return Ok(format!(
                "{}.length()",
                emit_expr(ctx, object, Precedence::Primary)?
            ))
        }
        Symbol::Field { name, .. }
        | Symbol::Const { name, .. }
        | Symbol::EnumValue { name, .. } => camel_case(name),
        Symbol::This
        | Symbol::Local(_)
        | Symbol::Class(_)
        | Symbol::Enum(_)
        | Symbol::Math
        | Symbol::Utf8Encoding => {
            return Err(CodegenError::unsupported(format!(
                "member access to {member:?}"
            )))
        }
    };
    Ok(format!(
        "{}{}{name}",
        emit_expr(ctx, object, Precedence::Primary)?,
        member_op(ctx, object, member)
    ))
}

/// Precedence and spelling of an arithmetic, bitwise or logical operator.
fn operator(op: BinaryOp) -> Option<(Precedence, &'static str)> {
    Some(match op {
        BinaryOp::Mul => (Precedence::Mul, " * "),
        BinaryOp::Div => (Precedence::Mul, " / "),
        BinaryOp::Mod => (Precedence::Mul, " % "),
        BinaryOp::Add => (Precedence::Add, " + "),
        BinaryOp::Sub => (Precedence::Add, " - "),
        BinaryOp::Shl => (Precedence::Shift, " << "),
        BinaryOp::Shr => (Precedence::Shift, " >> "),
        BinaryOp::BitAnd => (Precedence::And, " & "),
        BinaryOp::BitXor => (Precedence::Xor, " ^ "),
        BinaryOp::BitOr => (Precedence::Or, " | "),
        BinaryOp::And => (Precedence::CondAnd, " && "),
        BinaryOp::Or => (Precedence::CondOr, " || "),
        BinaryOp::AddAssign => (Precedence::Assign, " += "),
        BinaryOp::SubAssign => (Precedence::Assign, " -= "),
        BinaryOp::MulAssign => (Precedence::Assign, " *= "),
        BinaryOp::DivAssign => (Precedence::Assign, " /= "),
        BinaryOp::ModAssign => (Precedence::Assign, " %= "),
        BinaryOp::ShlAssign => (Precedence::Assign, " <<= "),
        BinaryOp::ShrAssign => (Precedence::Assign, " >>= "),
        BinaryOp::AndAssign => (Precedence::Assign, " &= "),
        BinaryOp::OrAssign => (Precedence::Assign, " |= "),
        BinaryOp::XorAssign => (Precedence::Assign, " ^= "),
        BinaryOp::Lt
        | BinaryOp::LtEq
        | BinaryOp::Gt
        | BinaryOp::GtEq
        | BinaryOp::Eq
        | BinaryOp::NotEq
        | BinaryOp::Index
        | BinaryOp::Assign => return None,
    })
}

fn emit_binary(
    ctx: &CodegenContext<'_>,
    op: BinaryOp,
    left: ExprId,
    right: ExprId,
    parent: Precedence,
) -> Result<String, CodegenError> {
    match op {
        BinaryOp::Index => Ok(format!(
            "{}[{}]",
            emit_expr(ctx, left, Precedence::Primary)?,
            emit_expr(ctx, right, Precedence::Statement)?
        )),
        BinaryOp::Assign => {
            let text = format!(
                "{} = {}",
                emit_expr(ctx, left, Precedence::Assign)?,
                emit_assign_right(ctx, left, right)?
            );
            Ok(parenthesize(text, Precedence::Assign, parent))
        }
        BinaryOp::Eq => emit_equality(ctx, left, right, false, parent),
        BinaryOp::NotEq => emit_equality(ctx, left, right, true, parent),
        BinaryOp::Lt => emit_comparison(ctx, left, right, Precedence::Rel, " < ", parent),
        BinaryOp::LtEq => emit_comparison(ctx, left, right, Precedence::Rel, " <= ", parent),
        BinaryOp::Gt => emit_comparison(ctx, left, right, Precedence::Rel, " > ", parent),
        BinaryOp::GtEq => emit_comparison(ctx, left, right, Precedence::Rel, " >= ", parent),
        _ => {
            let Some((prec, spelling)) = operator(op) else {
                return Err(CodegenError::unsupported(format!("binary operator {op:?}")));
            };
            let text = if op.is_assign() {
                // Right-associative: `a += b = c` needs no parentheses.
                format!(
                    "{}{spelling}{}",
                    emit_expr(ctx, left, prec)?,
                    emit_expr(ctx, right, Precedence::Argument)?
                )
            } else {
                format!(
                    "{}{spelling}{}",
                    emit_expr(ctx, left, prec)?,
                    emit_expr(ctx, right, prec.tighter())?
                )
            };
            Ok(parenthesize(text, prec, parent))
        }
    }
}

/// `==` / `!=`, unifying mixed-ownership class pointers.
///
/// When one side's class-pointer type accepts the other side's type, both
/// operands are converted to that pointer type in its borrowed form, so a
/// shared pointer is compared through its raw pointer.
fn emit_equality(
    ctx: &CodegenContext<'_>,
    left: ExprId,
    right: ExprId,
    not: bool,
    parent: Precedence,
) -> Result<String, CodegenError> {
    let spelling = if not { " != " } else { " == " };
    let left_ty = &ctx.expr(left).ty;
    let right_ty = &ctx.expr(right).ty;
    let common = if left_ty.is_assignable_class_ptr(right_ty, ctx.program) {
        Some(left_ty)
    } else if right_ty.is_assignable_class_ptr(left_ty, ctx.program) {
        Some(right_ty)
    } else {
        None
    };

    let Some(Type::ClassPtr { class, .. }) = common else {
        return emit_comparison(ctx, left, right, Precedence::Equality, spelling, parent);
    };
    let borrowed = Type::class_ptr(PtrModifier::None, *class);
    let text = format!(
        "{}{spelling}{}",
        emit_coerced(ctx, &borrowed, left, Precedence::Equality)?,
        emit_coerced(ctx, &borrowed, right, Precedence::Rel)?
    );
    Ok(parenthesize(text, Precedence::Equality, parent))
}

/// Relational or equality comparison.
///
/// A character taken by indexing a string compared against a one-character
/// literal renders as a character-literal comparison.
fn emit_comparison(
    ctx: &CodegenContext<'_>,
    left: ExprId,
    right: ExprId,
    prec: Precedence,
    spelling: &str,
    parent: Precedence,
) -> Result<String, CodegenError> {
    let right_text = match single_char_operand(ctx, left, right) {
        Some(c) => char_literal(c),
        None => emit_expr(ctx, right, prec.tighter())?,
    };
    let text = format!("{}{spelling}{right_text}", emit_expr(ctx, left, prec)?);
    Ok(parenthesize(text, prec, parent))
}

/// The character to compare against when `left` indexes a string and
/// `right` is a one-character ASCII literal.
fn single_char_operand(ctx: &CodegenContext<'_>, left: ExprId, right: ExprId) -> Option<char> {
    let ExprKind::Binary {
        op: BinaryOp::Index,
        left: string,
        ..
    } = &ctx.expr(left).kind
    else {
        return None;
    };
    if !ctx.expr(*string).ty.is_string() {
        return None;
    }
    one_ascii_char(ctx.expr(right))
}

/// `{ a, b, c }` with each item coerced to the element type.
fn emit_aggregate(
    ctx: &CodegenContext<'_>,
    ty: &Type,
    items: &[ExprId],
) -> Result<String, CodegenError> {
    let Some(element) = ty.element_type() else {
        return Err(CodegenError::unsupported(format!(
            "aggregate initializer of non-array type {ty:?}"
        )));
    };
    let items = items
        .iter()
        .map(|&item| emit_coerced(ctx, element, item, Precedence::Argument))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("{{ {} }}", items.join(", ")))
}
