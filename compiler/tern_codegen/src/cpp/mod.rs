//! C++ Code Generation
//!
//! Renders a resolved [`Program`] as a C++ header and source file.
//!
//! # Architecture
//!
//! ```text
//! Program
//!    ↓
//! class_order       (parents and stored classes first; fails on cycles)
//!    ↓
//! header            (enums, forward declarations, class declarations)
//!    ↓
//! source            (constructor and method definitions, resource tables)
//!    ↓
//! GeneratedSources  (files are written only once both artifacts rendered)
//! ```

pub(crate) mod calls;
pub(crate) mod class;
pub(crate) mod coerce;
pub(crate) mod expr;
pub(crate) mod order;
pub(crate) mod resources;
pub(crate) mod stmt;
pub(crate) mod types;

use std::path::PathBuf;

use tern_ir::{Enum, Program};

use crate::c_family::camel_case;
use crate::context::CodegenContext;
use crate::precedence::Precedence;
use crate::{CodegenError, CodegenOptions};

use self::class::{write_class_declaration, write_class_definitions};
use self::expr::emit_expr;
use self::order::class_order;
use self::resources::write_resources;

/// Standard headers the declarations need.
const HEADER_INCLUDES: [&str; 4] = ["array", "memory", "string", "string_view"];

/// Standard headers the definitions need on top of the declarations.
const SOURCE_INCLUDES: [&str; 2] = ["algorithm", "cmath"];

/// The two rendered artifacts of one generation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedSources {
    pub header_path: PathBuf,
    pub header: String,
    pub source_path: PathBuf,
    pub source: String,
}

impl GeneratedSources {
    /// Write both files.
    pub fn write(&self) -> std::io::Result<()> {
        std::fs::write(&self.header_path, &self.header)?;
        tracing::debug!(
            path = %self.header_path.display(),
            bytes = self.header.len(),
            "wrote header"
        );
        std::fs::write(&self.source_path, &self.source)?;
        tracing::debug!(
            path = %self.source_path.display(),
            bytes = self.source.len(),
            "wrote source"
        );
        Ok(())
    }
}

/// C++ backend.
///
/// Holds only options; every call to [`CppCodegen::generate`] starts from a
/// fresh context.
#[derive(Clone, Debug, Default)]
pub struct CppCodegen {
    options: CodegenOptions,
}

impl CppCodegen {
    pub fn new(options: CodegenOptions) -> Self {
        CppCodegen { options }
    }

    pub fn options(&self) -> &CodegenOptions {
        &self.options
    }

    /// Render `program`.
    ///
    /// Stops at the first error; nothing is returned for a failed pass.
    pub fn generate(&self, program: &Program) -> Result<GeneratedSources, CodegenError> {
        tracing::debug!(
            classes = program.classes.len(),
            enums = program.enums.len(),
            resources = program.resources.len(),
            "generating C++"
        );
        let header = self.header(program)?;
        let source = self.source(program)?;
        tracing::debug!(
            header_bytes = header.len(),
            source_bytes = source.len(),
            "generated C++"
        );
        Ok(GeneratedSources {
            header_path: self.options.header_file(),
            header,
            source_path: self.options.output_file.clone(),
            source,
        })
    }

    fn header(&self, program: &Program) -> Result<String, CodegenError> {
        let order = class_order(program)?;
        let mut ctx = CodegenContext::new(program);
        ctx.writeln("#pragma once");
        for include in HEADER_INCLUDES {
            ctx.writeln(&format!("#include <{include}>"));
        }
        self.open_namespace(&mut ctx);
        for enumeration in &program.enums {
            write_enum(&mut ctx, enumeration)?;
        }
        if !program.classes.is_empty() {
            ctx.newline();
        }
        for class in &program.classes {
            ctx.writeln(&format!("class {};", class.name));
        }
        for id in order {
            write_class_declaration(&mut ctx, id)?;
        }
        self.close_namespace(&mut ctx);
        Ok(ctx.take_output())
    }

    fn source(&self, program: &Program) -> Result<String, CodegenError> {
        let mut ctx = CodegenContext::new(program);
        for include in SOURCE_INCLUDES {
            ctx.writeln(&format!("#include <{include}>"));
        }
        ctx.writeln(&format!("#include \"{}\"", self.options.header_include_name()));
        ctx.writeln("using namespace std::string_view_literals;");
        write_resources(&mut ctx, &program.resources, false);
        self.open_namespace(&mut ctx);
        for id in program.class_ids() {
            write_class_definitions(&mut ctx, id)?;
        }
        self.close_namespace(&mut ctx);
        write_resources(&mut ctx, &program.resources, true);
        Ok(ctx.take_output())
    }

    fn open_namespace(&self, ctx: &mut CodegenContext<'_>) {
        if let Some(namespace) = &self.options.namespace {
            ctx.newline();
            ctx.writeln(&format!("namespace {namespace}"));
            ctx.writeln("{");
        }
    }

    fn close_namespace(&self, ctx: &mut CodegenContext<'_>) {
        if self.options.namespace.is_some() {
            ctx.writeln("}");
        }
    }
}

/// `enum class` with camelCase members and their explicit values.
fn write_enum(ctx: &mut CodegenContext<'_>, enumeration: &Enum) -> Result<(), CodegenError> {
    ctx.newline();
    ctx.writeln(&format!("enum class {}", enumeration.name));
    ctx.open_block();
    let last = enumeration.members.len().saturating_sub(1);
    for (i, member) in enumeration.members.iter().enumerate() {
        let mut line = camel_case(&member.name);
        if let Some(value) = member.value {
            line.push_str(" = ");
            line.push_str(&emit_expr(ctx, value, Precedence::Statement)?);
        }
        if i != last {
            line.push(',');
        }
        ctx.writeln(&line);
    }
    ctx.dedent();
    ctx.writeln("};");
    Ok(())
}
