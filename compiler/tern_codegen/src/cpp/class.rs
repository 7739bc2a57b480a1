//! Class Layout
//!
//! Class declarations for the header and out-of-line member definitions for
//! the source file.
//!
//! Members are grouped into visibility sections in the fixed order public,
//! protected, internal (rendered `public`), private. Each section lists the
//! constructor (if it belongs there), array constants, fields, then methods.

use tern_ir::{
    Class, ClassCallKind, ClassId, Const, Method, MethodCallKind, Stmt, Type, Visibility,
};

use crate::c_family::camel_case;
use crate::context::CodegenContext;
use crate::cpp::stmt::{const_declaration, emit_stmt, emit_stmts, var_declaration};
use crate::cpp::types::render_declaration;
use crate::CodegenError;

/// Visibility sections in emission order, with their C++ keyword.
const SECTIONS: [(Visibility, &str); 4] = [
    (Visibility::Public, "public"),
    (Visibility::Protected, "protected"),
    (Visibility::Internal, "public"),
    (Visibility::Private, "private"),
];

/// Section holding the class's constructor.
///
/// Static classes are never instantiated, abstract classes only through a
/// derived class.
fn constructor_visibility(class: &Class) -> Visibility {
    match class.call_kind {
        ClassCallKind::Static => Visibility::Private,
        ClassCallKind::Abstract => Visibility::Protected,
        ClassCallKind::Normal | ClassCallKind::Sealed => Visibility::Public,
    }
}

/// Write the declaration of class `id`.
pub fn write_class_declaration(
    ctx: &mut CodegenContext<'_>,
    id: ClassId,
) -> Result<(), CodegenError> {
    let program = ctx.program;
    let class = program.class(id);
    tracing::debug!(class = %class.name, "declaring class");

    let mut header = format!("class {}", class.name);
    if class.call_kind == ClassCallKind::Sealed {
        header.push_str(" final");
    }
    if let Some(parent) = class.parent {
        header.push_str(" : public ");
        header.push_str(&program.class(parent).name);
    }

    ctx.newline();
    ctx.writeln(&header);
    ctx.writeln("{");
    for (visibility, keyword) in SECTIONS {
        write_section(ctx, class, visibility, keyword)?;
    }
    ctx.writeln("};");
    Ok(())
}

fn write_section(
    ctx: &mut CodegenContext<'_>,
    class: &Class,
    visibility: Visibility,
    keyword: &str,
) -> Result<(), CodegenError> {
    let constructor = constructor_visibility(class) == visibility;
    let has_members = array_consts(class, visibility).next().is_some()
        || class.fields.iter().any(|f| f.visibility == visibility)
        || class.methods.iter().any(|m| m.visibility == visibility);
    if !constructor && !has_members {
        return Ok(());
    }

    ctx.writeln(&format!("{keyword}:"));
    ctx.indent();

    if constructor {
        let suffix = if class.call_kind == ClassCallKind::Static {
            " = delete"
        } else if class.constructor.is_none() {
            " = default"
        } else {
            ""
        };
        ctx.writeln(&format!("{}(){suffix};", class.name));
    }

    for konst in array_consts(class, visibility) {
        let text = const_declaration(ctx, &camel_case(&konst.name), &konst.ty, konst.value)?;
        ctx.writeln(&text);
    }

    for field in class.fields.iter().filter(|f| f.visibility == visibility) {
        let text = var_declaration(ctx, &camel_case(&field.name), &field.ty, field.value)?;
        ctx.writeln(&format!("{text};"));
    }

    for method in class.methods.iter().filter(|m| m.visibility == visibility) {
        let prefix = match method.call_kind {
            MethodCallKind::Static => "static ",
            MethodCallKind::Abstract | MethodCallKind::Virtual => "virtual ",
            MethodCallKind::Normal | MethodCallKind::Override | MethodCallKind::Sealed => "",
        };
        let suffix = match method.call_kind {
            MethodCallKind::Abstract => " = 0",
            MethodCallKind::Override => " override",
            MethodCallKind::Sealed => " final",
            MethodCallKind::Static | MethodCallKind::Normal | MethodCallKind::Virtual => "",
        };
        let signature = signature(ctx, method, &camel_case(&method.name))?;
        ctx.writeln(&format!("{prefix}{signature}{suffix};"));
    }

    ctx.dedent();
    Ok(())
}

/// Constants needing storage. Scalar constants are folded into their uses.
fn array_consts(class: &Class, visibility: Visibility) -> impl Iterator<Item = &Const> + '_ {
    class
        .consts
        .iter()
        .filter(move |c| c.visibility == visibility && matches!(c.ty, Type::ArrayStorage { .. }))
}

/// Return type, `name`, parameters, and the trailing `const` of a method
/// that does not modify its object.
fn signature(
    ctx: &CodegenContext<'_>,
    method: &Method,
    name: &str,
) -> Result<String, CodegenError> {
    let params = method
        .params
        .iter()
        .map(|param| render_declaration(ctx.program, &param.ty, &param.name))
        .collect::<Result<Vec<_>, _>>()?;
    let constness = if method.call_kind != MethodCallKind::Static && !method.is_mutator {
        " const"
    } else {
        ""
    };
    Ok(format!(
        "{}({}){constness}",
        render_declaration(ctx.program, &method.return_type, name)?,
        params.join(", ")
    ))
}

/// Write the out-of-line constructor and method definitions of class `id`.
///
/// Abstract methods have no definition.
pub fn write_class_definitions(
    ctx: &mut CodegenContext<'_>,
    id: ClassId,
) -> Result<(), CodegenError> {
    let program = ctx.program;
    let class = program.class(id);

    if let Some(body) = &class.constructor {
        ctx.newline();
        ctx.writeln(&format!("{0}::{0}()", class.name));
        ctx.open_block();
        emit_stmts(ctx, body)?;
        ctx.close_block();
    }

    for method in &class.methods {
        if method.call_kind == MethodCallKind::Abstract {
            continue;
        }
        let Some(body) = &method.body else {
            return Err(CodegenError::unsupported(format!(
                "method {}.{} without a body",
                class.name, method.name
            )));
        };
        let name = format!("{}::{}", class.name, camel_case(&method.name));
        let signature = signature(ctx, method, &name)?;
        ctx.newline();
        ctx.writeln(&signature);

        ctx.enter_method(method);
        let result = write_body(ctx, body);
        ctx.leave_method();
        result?;
    }
    Ok(())
}

/// Method body as a brace block; a single-statement body is wrapped.
fn write_body(ctx: &mut CodegenContext<'_>, body: &Stmt) -> Result<(), CodegenError> {
    ctx.open_block();
    match body {
        Stmt::Block(stmts) => emit_stmts(ctx, stmts)?,
        stmt => emit_stmt(ctx, stmt)?,
    }
    ctx.close_block();
    Ok(())
}
