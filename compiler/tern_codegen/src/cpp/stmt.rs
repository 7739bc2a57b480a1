//! Statement Code Generation
//!
//! Writes C++ statements into the context's output. Control statements keep
//! the opening brace on the header line (`if (x) {`); a non-block body goes
//! on its own indented line.

use tern_ir::{Case, ConstDecl, ExprId, Stmt, StringKind, Type};

use crate::context::CodegenContext;
use crate::cpp::coerce::emit_coerced;
use crate::cpp::expr::emit_expr;
use crate::cpp::types::render_declaration;
use crate::precedence::Precedence;
use crate::CodegenError;

/// Emit a sequence of statements.
pub fn emit_stmts(ctx: &mut CodegenContext<'_>, stmts: &[Stmt]) -> Result<(), CodegenError> {
    for stmt in stmts {
        emit_stmt(ctx, stmt)?;
    }
    Ok(())
}

/// Emit a single statement.
pub fn emit_stmt(ctx: &mut CodegenContext<'_>, stmt: &Stmt) -> Result<(), CodegenError> {
    match stmt {
        Stmt::Block(stmts) => {
            ctx.open_block();
            emit_stmts(ctx, stmts)?;
            ctx.close_block();
        }
        Stmt::Var(decl) => {
            let text = var_declaration(ctx, &decl.name, &decl.ty, decl.value)?;
            ctx.writeln(&format!("{text};"));
        }
        Stmt::Const(decl) => emit_local_const(ctx, decl)?,
        Stmt::Expr(id) => {
            let text = emit_expr(ctx, *id, Precedence::Statement)?;
            ctx.writeln(&format!("{text};"));
        }
        Stmt::Return(None) => ctx.writeln("return;"),
        Stmt::Return(Some(id)) => {
            let text = emit_return_value(ctx, *id)?;
            ctx.writeln(&format!("return {text};"));
        }
        Stmt::If {
            cond,
            then,
            otherwise,
        } => {
            ctx.write_indent();
            emit_if(ctx, *cond, then, otherwise.as_deref())?;
        }
        Stmt::While { cond, body } => {
            let cond = emit_expr(ctx, *cond, Precedence::Statement)?;
            ctx.write_indent();
            ctx.write(&format!("while ({cond})"));
            emit_child(ctx, body)?;
            finish_child(ctx, body);
        }
        Stmt::DoWhile { body, cond } => {
            ctx.write_indent();
            ctx.write("do");
            emit_child(ctx, body)?;
            let cond = emit_expr(ctx, *cond, Precedence::Statement)?;
            if is_block(body) {
                ctx.write(&format!(" while ({cond});"));
                ctx.newline();
            } else {
                ctx.writeln(&format!("while ({cond});"));
            }
        }
        Stmt::For {
            init,
            cond,
            advance,
            body,
        } => {
            let init = match init.as_deref() {
                None => String::new(),
                Some(Stmt::Var(decl)) => var_declaration(ctx, &decl.name, &decl.ty, decl.value)?,
                Some(Stmt::Expr(id)) => emit_expr(ctx, *id, Precedence::Statement)?,
                Some(other) => {
                    return Err(CodegenError::unsupported(format!(
                        "for-loop initializer {other:?}"
                    )))
                }
            };
            let cond = match cond {
                Some(cond) => format!(" {}", emit_expr(ctx, *cond, Precedence::Statement)?),
                None => String::new(),
            };
            let advance = match advance {
                Some(advance) => format!(" {}", emit_expr(ctx, *advance, Precedence::Statement)?),
                None => String::new(),
            };
            ctx.write_indent();
            ctx.write(&format!("for ({init};{cond};{advance})"));
            emit_child(ctx, body)?;
            finish_child(ctx, body);
        }
        Stmt::Break => ctx.writeln("break;"),
        Stmt::Continue => ctx.writeln("continue;"),
        Stmt::Switch {
            value,
            cases,
            default,
        } => emit_switch(ctx, *value, cases, default.as_deref())?,
        Stmt::Throw(_) => ctx.writeln("throw std::exception();"),
    }
    Ok(())
}

fn is_block(stmt: &Stmt) -> bool {
    matches!(stmt, Stmt::Block(_))
}

/// Emit the body of a control statement whose header is already on the
/// current line.
///
/// A block body leaves its closing brace unterminated so `else` / `while`
/// can follow on the same line; see [`finish_child`].
fn emit_child(ctx: &mut CodegenContext<'_>, stmt: &Stmt) -> Result<(), CodegenError> {
    if let Stmt::Block(stmts) = stmt {
        ctx.write(" {");
        ctx.newline();
        ctx.indent();
        emit_stmts(ctx, stmts)?;
        ctx.dedent();
        ctx.write_indent();
        ctx.write("}");
    } else {
        ctx.newline();
        ctx.indent();
        emit_stmt(ctx, stmt)?;
        ctx.dedent();
    }
    Ok(())
}

/// Terminate the line left open by a block child.
fn finish_child(ctx: &mut CodegenContext<'_>, stmt: &Stmt) {
    if is_block(stmt) {
        ctx.newline();
    }
}

/// `if` chain, starting at the current position on the line.
fn emit_if(
    ctx: &mut CodegenContext<'_>,
    cond: ExprId,
    then: &Stmt,
    otherwise: Option<&Stmt>,
) -> Result<(), CodegenError> {
    let cond = emit_expr(ctx, cond, Precedence::Statement)?;
    ctx.write(&format!("if ({cond})"));
    emit_child(ctx, then)?;
    let Some(otherwise) = otherwise else {
        finish_child(ctx, then);
        return Ok(());
    };
    if is_block(then) {
        ctx.write(" else");
    } else {
        ctx.write_indent();
        ctx.write("else");
    }
    match otherwise {
        Stmt::If {
            cond,
            then,
            otherwise,
        } => {
            ctx.write(" ");
            emit_if(ctx, *cond, then, otherwise.as_deref())
        }
        other => {
            emit_child(ctx, other)?;
            finish_child(ctx, other);
            Ok(())
        }
    }
}

fn emit_switch(
    ctx: &mut CodegenContext<'_>,
    value: ExprId,
    cases: &[Case],
    default: Option<&[Stmt]>,
) -> Result<(), CodegenError> {
    let value = emit_expr(ctx, value, Precedence::Statement)?;
    ctx.writeln(&format!("switch ({value}) {{"));
    for case in cases {
        for &label in &case.values {
            let label = emit_expr(ctx, label, Precedence::Statement)?;
            ctx.writeln(&format!("case {label}:"));
        }
        emit_case_body(ctx, &case.body)?;
    }
    if let Some(body) = default {
        ctx.writeln("default:");
        emit_case_body(ctx, body)?;
    }
    ctx.writeln("}");
    Ok(())
}

/// Statements of one case group. Everything from the first local variable
/// on is wrapped in a block so the variable's scope ends with the case.
fn emit_case_body(ctx: &mut CodegenContext<'_>, stmts: &[Stmt]) -> Result<(), CodegenError> {
    ctx.indent();
    let mut block = false;
    for stmt in stmts {
        if !block && matches!(stmt, Stmt::Var(_)) {
            ctx.open_block();
            block = true;
        }
        emit_stmt(ctx, stmt)?;
    }
    if block {
        ctx.close_block();
    }
    ctx.dedent();
    Ok(())
}

/// `return` operand, converted to the enclosing method's return type.
fn emit_return_value(ctx: &CodegenContext<'_>, id: ExprId) -> Result<String, CodegenError> {
    match ctx.current_method() {
        Some(method) => emit_coerced(ctx, &method.return_type, id, Precedence::Statement),
        None => emit_expr(ctx, id, Precedence::Statement),
    }
}

/// Scalar constants are folded into their uses upstream; only array
/// constants need storage.
fn emit_local_const(ctx: &mut CodegenContext<'_>, decl: &ConstDecl) -> Result<(), CodegenError> {
    if !matches!(decl.ty, Type::ArrayStorage { .. }) {
        return Ok(());
    }
    let text = const_declaration(ctx, &decl.name, &decl.ty, decl.value)?;
    ctx.writeln(&text);
    Ok(())
}

/// `static constexpr T name = value;`
pub fn const_declaration(
    ctx: &CodegenContext<'_>,
    name: &str,
    ty: &Type,
    value: ExprId,
) -> Result<String, CodegenError> {
    Ok(format!(
        "static constexpr {} = {};",
        render_declaration(ctx.program, ty, name)?,
        emit_expr(ctx, value, Precedence::Statement)?
    ))
}

/// Declaration of a variable or field with its initializer, without the
/// trailing `;`.
///
/// - Inline arrays take ` {}` for a default-value literal and no initializer
///   otherwise; anything else is rejected.
/// - Owned strings are brace-initialized.
/// - Everything else is ` = value`, converted to the declared type.
pub fn var_declaration(
    ctx: &CodegenContext<'_>,
    name: &str,
    ty: &Type,
    value: Option<ExprId>,
) -> Result<String, CodegenError> {
    let declaration = render_declaration(ctx.program, ty, name)?;
    let init = match (ty, value) {
        (Type::ArrayStorage { .. }, None) => String::new(),
        (Type::ArrayStorage { .. }, Some(value)) => match ctx.expr(value).as_literal() {
            Some(literal) if literal.is_default_value() => " {}".to_string(),
            _ => {
                return Err(CodegenError::UnsupportedArrayInit {
                    name: name.to_string(),
                })
            }
        },
        (_, None) => String::new(),
        (Type::String(StringKind::Owned), Some(value)) => {
            format!("{{{}}}", emit_coerced(ctx, ty, value, Precedence::Statement)?)
        }
        (_, Some(value)) => format!(
            " = {}",
            emit_coerced(ctx, ty, value, Precedence::Statement)?
        ),
    };
    Ok(format!("{declaration}{init}"))
}

#[cfg(test)]
mod tests;
