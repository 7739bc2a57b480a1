//! Classes, their members, and enums.

use crate::{ClassId, ExprId, Stmt, Type};

/// Member visibility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    Public,
    Protected,
    /// Visible within the translation unit.
    Internal,
    Private,
}

/// How a class may be instantiated and extended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassCallKind {
    Normal,
    /// Utility class with only static members; never instantiated.
    Static,
    Abstract,
    /// Cannot be derived from.
    Sealed,
}

/// Dispatch kind of a method.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MethodCallKind {
    Static,
    Normal,
    Abstract,
    Virtual,
    Override,
    Sealed,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Param {
    pub name: String,
    pub ty: Type,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    pub name: String,
    pub visibility: Visibility,
    pub ty: Type,
    pub value: Option<ExprId>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Const {
    pub name: String,
    pub visibility: Visibility,
    pub ty: Type,
    pub value: ExprId,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Method {
    pub name: String,
    pub visibility: Visibility,
    pub call_kind: MethodCallKind,
    /// Whether the method may modify `this`.
    pub is_mutator: bool,
    pub return_type: Type,
    pub params: Vec<Param>,
    /// `None` only for abstract methods.
    pub body: Option<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Class {
    pub name: String,
    pub parent: Option<ClassId>,
    pub call_kind: ClassCallKind,
    /// User-supplied constructor body.
    pub constructor: Option<Vec<Stmt>>,
    pub consts: Vec<Const>,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
}

impl Class {
    /// An empty class with no parent.
    pub fn new(name: impl Into<String>, call_kind: ClassCallKind) -> Self {
        Class {
            name: name.into(),
            parent: None,
            call_kind,
            constructor: None,
            consts: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumMember {
    pub name: String,
    /// Explicit value, if given in the source.
    pub value: Option<ExprId>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enum {
    pub name: String,
    pub members: Vec<EnumMember>,
}
