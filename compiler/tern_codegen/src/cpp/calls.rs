//! Call lowering.
//!
//! Standard-library calls map onto C++ library idioms:
//!
//! | Call | C++ |
//! |---|---|
//! | `Math.Name(x)` | `std::name(x)` (`Ceiling` → `std::ceil`, `Truncate` → `std::trunc`) |
//! | `s.Contains(t)` | `s.find(t) != std::string::npos` |
//! | `s.IndexOf(t)` / `s.LastIndexOf(t)` | `static_cast<int32_t>(s.find(t))` / `rfind` |
//! | `s.StartsWith(t)` / `EndsWith` / `Substring` | `starts_with` / `ends_with` / `substr` |
//! | `a.CopyTo(ao, b, bo, n)` | `std::copy_n(a + ao, n, b + bo)` |
//! | `UTF8.GetString(b, o, n)` | `std::string_view(reinterpret_cast<const char *>(b + o), n)` |
//!
//! Offsets, counts and lengths are coerced to `int32_t`, string arguments to
//! views, and math arguments to `double`.
//!
//! User methods render with `::` (static), `->` (class-pointer receiver) or
//! `.`, and camelCase names.

use tern_ir::{ExprId, LibraryMethod, Literal, MethodCallKind, MethodRef, Type};

use crate::c_family::camel_case;
use crate::context::CodegenContext;
use crate::cpp::coerce::{emit_array_ptr, emit_coerced};
use crate::cpp::expr::emit_expr;
use crate::precedence::{parenthesize, Precedence};
use crate::CodegenError;

/// Render a call of `method` on `object`.
pub fn emit_call(
    ctx: &CodegenContext<'_>,
    object: ExprId,
    method: &MethodRef,
    args: &[ExprId],
    parent: Precedence,
) -> Result<String, CodegenError> {
    match method {
        MethodRef::Library(method) => emit_library_call(ctx, object, method, args, parent),
        MethodRef::User { class, index } => {
            let method = ctx.program.method(*class, *index);
            let op = if method.call_kind == MethodCallKind::Static {
                "::"
            } else if ctx.expr(object).ty.is_class_ptr() {
                "->"
            } else {
                "."
            };
            Ok(format!(
                "{}{op}{}({})",
                emit_expr(ctx, object, Precedence::Primary)?,
                camel_case(&method.name),
                emit_args(ctx, method.params.iter().map(|param| &param.ty), args)?
            ))
        }
    }
}

fn emit_library_call(
    ctx: &CodegenContext<'_>,
    object: ExprId,
    method: &LibraryMethod,
    args: &[ExprId],
    parent: Precedence,
) -> Result<String, CodegenError> {
    match method {
        LibraryMethod::Math(name) => {
            let function = match name.as_str() {
                "Ceiling" => "ceil".to_string(),
                "Truncate" => "trunc".to_string(),
                _ => name.to_lowercase(),
            };
            let args = emit_args(ctx, std::iter::repeat(&Type::Double), args)?;
            Ok(format!("std::{function}({args})"))
        }
        LibraryMethod::StringContains => {
            let text = format!(
                "{} != std::string::npos",
                emit_string_method(ctx, object, "find", &[Type::STRING_VIEW], args)?
            );
            Ok(parenthesize(text, Precedence::Equality, parent))
        }
        LibraryMethod::StringIndexOf => Ok(format!(
            "static_cast<int32_t>({})",
            emit_string_method(ctx, object, "find", &[Type::STRING_VIEW], args)?
        )),
        LibraryMethod::StringLastIndexOf => Ok(format!(
            "static_cast<int32_t>({})",
            emit_string_method(ctx, object, "rfind", &[Type::STRING_VIEW], args)?
        )),
        LibraryMethod::StringStartsWith => {
            emit_string_method(ctx, object, "starts_with", &[Type::STRING_VIEW], args)
        }
        LibraryMethod::StringEndsWith => {
            emit_string_method(ctx, object, "ends_with", &[Type::STRING_VIEW], args)
        }
        LibraryMethod::StringSubstring => {
            emit_string_method(ctx, object, "substr", &[Type::I32, Type::I32], args)
        }
        LibraryMethod::ArrayCopyTo => {
            let [source_offset, destination, destination_offset, count] = args else {
                return Err(arity("CopyTo", 4, args.len()));
            };
            Ok(format!(
                "std::copy_n({}, {}, {})",
                emit_array_ptr_add(ctx, object, *source_offset)?,
                emit_coerced(ctx, &Type::I32, *count, Precedence::Argument)?,
                emit_array_ptr_add(ctx, *destination, *destination_offset)?
            ))
        }
        LibraryMethod::Utf8GetString => {
            let [bytes, offset, length] = args else {
                return Err(arity("GetString", 3, args.len()));
            };
            Ok(format!(
                "std::string_view(reinterpret_cast<const char *>({}), {})",
                emit_array_ptr_add(ctx, *bytes, *offset)?,
                emit_coerced(ctx, &Type::I32, *length, Precedence::Argument)?
            ))
        }
        LibraryMethod::Other(name) => Err(CodegenError::unsupported(format!(
            "library method {name}"
        ))),
    }
}

fn arity(name: &str, expected: usize, found: usize) -> CodegenError {
    CodegenError::unsupported(format!(
        "{name} with {found} arguments (expected {expected})"
    ))
}

/// `object.name(args)`, marking a string-literal receiver as a view.
fn emit_string_method(
    ctx: &CodegenContext<'_>,
    object: ExprId,
    name: &str,
    params: &[Type],
    args: &[ExprId],
) -> Result<String, CodegenError> {
    let suffix = match ctx.expr(object).as_literal() {
        Some(Literal::String(_)) => "sv",
        _ => "",
    };
    Ok(format!(
        "{}{suffix}.{name}({})",
        emit_expr(ctx, object, Precedence::Primary)?,
        emit_args(ctx, params, args)?
    ))
}

/// Raw pointer to `array` advanced by the `int32_t` `offset`; a literal zero
/// offset is omitted.
fn emit_array_ptr_add(
    ctx: &CodegenContext<'_>,
    array: ExprId,
    offset: ExprId,
) -> Result<String, CodegenError> {
    if let Some(Literal::Int(0)) = ctx.expr(offset).as_literal() {
        return emit_array_ptr(ctx, array, Precedence::Argument);
    }
    Ok(format!(
        "{} + {}",
        emit_array_ptr(ctx, array, Precedence::Add)?,
        emit_coerced(ctx, &Type::I32, offset, Precedence::Mul)?
    ))
}

/// Comma-separated arguments, each coerced to its parameter type when one is
/// known.
fn emit_args<'t>(
    ctx: &CodegenContext<'_>,
    params: impl IntoIterator<Item = &'t Type>,
    args: &[ExprId],
) -> Result<String, CodegenError> {
    let mut params = params.into_iter();
    let args = args
        .iter()
        .map(|&arg| match params.next() {
            Some(ty) => emit_coerced(ctx, ty, arg, Precedence::Argument),
            None => emit_expr(ctx, arg, Precedence::Argument),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(args.join(", "))
}
