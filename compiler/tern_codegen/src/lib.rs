//! Tern Codegen - C/C++ Backend
//!
//! Renders a resolved Tern [`Program`](tern_ir::Program) as a pair of C++
//! artifacts: a header declaring every enum and class, and a source file
//! defining constructors, methods and embedded resources.
//!
//! # Architecture
//!
//! ```text
//!   c_family     (integer kinds, narrowing, numeric coercion, literals)
//!        ↓
//!   cpp          (type spelling, coercion, expressions, calls, statements,
//!                 class order and layout, resources)
//!        ↓
//!   CppCodegen   (one pass per program → GeneratedSources)
//! ```
//!
//! # Design Philosophy
//!
//! - **Fail Loud**: any IR shape without a mapping is a [`CodegenError`];
//!   nothing plausible-but-wrong is emitted.
//! - **All or Nothing**: output is staged in memory and only written after
//!   both artifacts rendered.
//! - **Minimal Parentheses**: every expression is rendered against the
//!   precedence of its context.

pub mod c_family;
mod context;
mod cpp;
mod error;
mod options;
mod precedence;

#[cfg(test)]
mod test_helpers;

pub use context::CodegenContext;
pub use cpp::{CppCodegen, GeneratedSources};
pub use error::CodegenError;
pub use options::CodegenOptions;
pub use precedence::Precedence;
