//! Statements.
//!
//! Statement trees are small and owned directly; the expressions they hold
//! are ids into the program's arena.

use crate::{ExprId, Type};

/// A local variable declaration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarDecl {
    pub name: String,
    pub ty: Type,
    pub value: Option<ExprId>,
}

/// A local compile-time constant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstDecl {
    pub name: String,
    pub ty: Type,
    pub value: ExprId,
}

/// One `case` group of a `switch`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Case {
    pub values: Vec<ExprId>,
    pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stmt {
    Block(Vec<Stmt>),
    Var(VarDecl),
    Const(ConstDecl),
    Expr(ExprId),
    Return(Option<ExprId>),
    If {
        cond: ExprId,
        then: Box<Stmt>,
        otherwise: Option<Box<Stmt>>,
    },
    While {
        cond: ExprId,
        body: Box<Stmt>,
    },
    DoWhile {
        body: Box<Stmt>,
        cond: ExprId,
    },
    For {
        init: Option<Box<Stmt>>,
        cond: Option<ExprId>,
        advance: Option<ExprId>,
        body: Box<Stmt>,
    },
    Break,
    Continue,
    Switch {
        value: ExprId,
        cases: Vec<Case>,
        default: Option<Vec<Stmt>>,
    },
    Throw(ExprId),
}
