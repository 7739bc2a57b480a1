//! Expressions.
//!
//! Expressions are stored flat in an [`ExprArena`] and referenced by
//! [`ExprId`]. Each node carries its resolved [`Type`]; backends never infer
//! types.

use crate::{ClassId, EnumId, ExprId, Type};

/// A literal value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
}

impl Literal {
    /// Whether this literal is the default value of its type
    /// (`null`, `false`, `0` or `0.0`).
    pub fn is_default_value(&self) -> bool {
        match self {
            Literal::Null | Literal::Bool(false) | Literal::Int(0) => true,
            Literal::Double(value) => *value == 0.0,
            Literal::Bool(true) | Literal::Int(_) | Literal::String(_) => false,
        }
    }
}

/// What a name refers to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    /// Receiver of the method being rendered.
    This,
    /// Local variable or parameter.
    Local(String),
    /// Instance field.
    Field { class: ClassId, name: String },
    /// Compile-time class constant.
    Const { class: ClassId, name: String },
    /// Enumeration member.
    EnumValue { enumeration: EnumId, name: String },
    /// A class used as a qualifier (static member access).
    Class(ClassId),
    /// An enum used as a qualifier.
    Enum(EnumId),
    /// The math library namespace.
    Math,
    /// The UTF-8 encoding library object.
    Utf8Encoding,
    /// Length property of a string.
    StringLength,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    Neg,
    Not,
    BitNot,
    PreIncrement,
    PreDecrement,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PostfixOp {
    Increment,
    Decrement,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    Shl,
    Shr,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,
    BitAnd,
    BitXor,
    BitOr,
    And,
    Or,
    /// `left[right]`
    Index,
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    ShlAssign,
    ShrAssign,
    AndAssign,
    OrAssign,
    XorAssign,
}

impl BinaryOp {
    /// Whether this is `=` or a compound assignment.
    pub fn is_assign(self) -> bool {
        matches!(
            self,
            BinaryOp::Assign
                | BinaryOp::AddAssign
                | BinaryOp::SubAssign
                | BinaryOp::MulAssign
                | BinaryOp::DivAssign
                | BinaryOp::ModAssign
                | BinaryOp::ShlAssign
                | BinaryOp::ShrAssign
                | BinaryOp::AndAssign
                | BinaryOp::OrAssign
                | BinaryOp::XorAssign
        )
    }
}

/// A standard-library method.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LibraryMethod {
    /// Function in the math namespace, by its source name (`Sqrt`, `Ceiling`, `Truncate`, ...).
    Math(String),
    StringContains,
    StringIndexOf,
    StringLastIndexOf,
    StringStartsWith,
    StringEndsWith,
    StringSubstring,
    /// `src.CopyTo(srcOffset, dst, dstOffset, count)`
    ArrayCopyTo,
    /// `UTF8.GetString(bytes, offset, length)`
    Utf8GetString,
    /// Any other library method, by name.
    Other(String),
}

impl LibraryMethod {
    /// Whether this is math truncation toward zero.
    pub fn is_math_truncate(&self) -> bool {
        matches!(self, LibraryMethod::Math(name) if name == "Truncate")
    }
}

/// The method invoked by a call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MethodRef {
    /// Method `index` of `class.methods`.
    User { class: ClassId, index: u32 },
    Library(LibraryMethod),
}

/// Expression kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    Literal(Literal),
    Symbol(Symbol),
    /// `object.member`
    Member { object: ExprId, member: Symbol },
    Unary { op: UnaryOp, operand: ExprId },
    Postfix { op: PostfixOp, operand: ExprId },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// `cond ? then : otherwise`
    Select {
        cond: ExprId,
        then: ExprId,
        otherwise: ExprId,
    },
    Call {
        object: ExprId,
        method: MethodRef,
        args: Vec<ExprId>,
    },
    /// Object construction.
    New(ClassId),
    /// Dynamic array allocation.
    NewArray { element: Type, length: ExprId },
    /// `{ a, b, c }` for array storage.
    Aggregate(Vec<ExprId>),
    /// Reference to an embedded resource, by logical name.
    Resource(String),
}

/// An expression with its resolved type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expr {
    pub kind: ExprKind,
    pub ty: Type,
}

impl Expr {
    pub fn new(kind: ExprKind, ty: Type) -> Self {
        Expr { kind, ty }
    }

    /// The literal, if this is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match &self.kind {
            ExprKind::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// Whether this is `a[i]`.
    pub fn is_indexing(&self) -> bool {
        matches!(
            self.kind,
            ExprKind::Binary {
                op: BinaryOp::Index,
                ..
            }
        )
    }
}

/// Flat storage for expressions.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression, returning its id.
    pub fn alloc(&mut self, expr: Expr) -> ExprId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "arena never exceeds u32::MAX expressions"
        )]
        let index = self.exprs.len() as u32;
        self.exprs.push(expr);
        ExprId::new(index)
    }

    /// Get an expression by id.
    ///
    /// # Panics
    /// Panics if `id` was not allocated in this arena.
    #[inline]
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}
