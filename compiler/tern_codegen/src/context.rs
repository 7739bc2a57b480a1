//! Code generation context and state.
//!
//! The `CodegenContext` holds the program being rendered, the output buffer,
//! and the current-method context used to coerce `return` values.

use tern_ir::{Expr, ExprId, Method, Program};

/// Code generation context.
///
/// Created per output artifact; the whole generation pass shares the same
/// immutable `Program`.
pub struct CodegenContext<'a> {
    /// The program being rendered.
    pub program: &'a Program,
    /// Method whose body is being rendered, if any.
    current_method: Option<&'a Method>,
    /// Current indentation level.
    indent: usize,
    /// Generated code output.
    output: String,
}

impl<'a> CodegenContext<'a> {
    /// Create a new codegen context.
    pub fn new(program: &'a Program) -> Self {
        Self {
            program,
            current_method: None,
            indent: 0,
            output: String::with_capacity(4096),
        }
    }

    /// Get an expression by id.
    #[inline]
    pub fn expr(&self, id: ExprId) -> &'a Expr {
        self.program.expr(id)
    }

    /// Method whose body is being rendered.
    #[inline]
    pub fn current_method(&self) -> Option<&'a Method> {
        self.current_method
    }

    /// Enter a method body. Cleared again by [`Self::leave_method`].
    pub fn enter_method(&mut self, method: &'a Method) {
        debug_assert!(self.current_method.is_none(), "nested method bodies");
        self.current_method = Some(method);
    }

    pub fn leave_method(&mut self) {
        self.current_method = None;
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write indentation to output.
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push('\t');
        }
    }

    /// Write a string to output.
    pub fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Write a line to output (with indentation and newline).
    pub fn writeln(&mut self, s: &str) {
        self.write_indent();
        self.output.push_str(s);
        self.output.push('\n');
    }

    /// Write a newline.
    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    /// Write `{` and indent.
    pub fn open_block(&mut self) {
        self.writeln("{");
        self.indent();
    }

    /// Dedent and write `}`.
    pub fn close_block(&mut self) {
        self.dedent();
        self.writeln("}");
    }

    /// Take the generated output.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}
