//! Tern IR - Resolved Intermediate Representation
//!
//! The fully type-resolved, statically checked program tree that every Tern
//! target backend consumes:
//! - Types with explicit ownership modifiers
//! - Classes with fields, constants and methods
//! - Statements, and expressions stored flat in an arena
//!
//! # Design Philosophy
//!
//! - **Resolved Everything**: every expression carries its `Type`; backends
//!   perform no inference.
//! - **Flatten Everything**: no `Box<Expr>`; expressions are `ExprId(u32)`
//!   indices into the program's `ExprArena`.
//! - **Immutable Input**: backends borrow a `Program` and never mutate it.

mod class;
mod expr;
mod index;
mod program;
mod stmt;
mod types;

pub use class::{
    Class, ClassCallKind, Const, Enum, EnumMember, Field, Method, MethodCallKind, Param,
    Visibility,
};
pub use expr::{
    BinaryOp, Expr, ExprArena, ExprKind, LibraryMethod, Literal, MethodRef, PostfixOp, Symbol,
    UnaryOp,
};
pub use index::{ClassId, EnumId, ExprId};
pub use program::Program;
pub use stmt::{Case, ConstDecl, Stmt, VarDecl};
pub use types::{IntWidth, IntegerType, PtrModifier, StringKind, Type};

#[cfg(test)]
mod tests;
