//! Resolved types.
//!
//! Every expression in the IR carries one of these. The type system is
//! deliberately small: sized integers, two floating-point widths, strings
//! (borrowed view or owned storage), arrays (pointer or inline storage), class
//! pointers with an ownership modifier, class values and enums.

use crate::{ClassId, EnumId, Program};

/// Bit width of an integer type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    /// Number of bits.
    pub const fn bits(self) -> u32 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        }
    }
}

/// A sized integer type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegerType {
    pub width: IntWidth,
    pub signed: bool,
}

impl IntegerType {
    pub const I8: IntegerType = IntegerType::new(IntWidth::W8, true);
    pub const U8: IntegerType = IntegerType::new(IntWidth::W8, false);
    pub const I16: IntegerType = IntegerType::new(IntWidth::W16, true);
    pub const U16: IntegerType = IntegerType::new(IntWidth::W16, false);
    pub const I32: IntegerType = IntegerType::new(IntWidth::W32, true);
    pub const U32: IntegerType = IntegerType::new(IntWidth::W32, false);
    pub const I64: IntegerType = IntegerType::new(IntWidth::W64, true);
    pub const U64: IntegerType = IntegerType::new(IntWidth::W64, false);

    pub const fn new(width: IntWidth, signed: bool) -> Self {
        IntegerType { width, signed }
    }
}

/// Ownership modifier on array and class pointers.
///
/// `None` and `Mut` observe memory owned elsewhere; the IR guarantees the
/// lifetime. `Shared` is reference-counted and may be held by many owners.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PtrModifier {
    /// Read-only borrow.
    None,
    /// Mutable borrow.
    Mut,
    /// Reference-counted ownership.
    Shared,
}

/// String representation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StringKind {
    /// Non-owning slice over bytes owned elsewhere.
    View,
    /// Owned value with copy/move semantics.
    Owned,
}

/// A fully resolved type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    Void,
    Bool,
    Integer(IntegerType),
    /// Single precision.
    Float,
    /// Double precision.
    Double,
    /// Double-precision value known to hold an integer, e.g. the result of
    /// math truncation.
    FloatInt,
    String(StringKind),
    ArrayPtr {
        modifier: PtrModifier,
        element: Box<Type>,
    },
    ArrayStorage {
        element: Box<Type>,
        length: u32,
    },
    ClassPtr {
        modifier: PtrModifier,
        class: ClassId,
    },
    /// Class stored by value.
    Class(ClassId),
    Enum(EnumId),
    /// Type of the `null` literal.
    Null,
}

impl Type {
    pub const I8: Type = Type::Integer(IntegerType::I8);
    pub const U8: Type = Type::Integer(IntegerType::U8);
    pub const I16: Type = Type::Integer(IntegerType::I16);
    pub const U16: Type = Type::Integer(IntegerType::U16);
    pub const I32: Type = Type::Integer(IntegerType::I32);
    pub const I64: Type = Type::Integer(IntegerType::I64);
    pub const STRING_VIEW: Type = Type::String(StringKind::View);
    pub const STRING_OWNED: Type = Type::String(StringKind::Owned);

    /// Pointer to an array of `element`.
    pub fn array_ptr(modifier: PtrModifier, element: Type) -> Type {
        Type::ArrayPtr {
            modifier,
            element: Box::new(element),
        }
    }

    /// Inline array of `length` elements.
    pub fn array_storage(element: Type, length: u32) -> Type {
        Type::ArrayStorage {
            element: Box::new(element),
            length,
        }
    }

    /// Pointer to an instance of `class`.
    pub fn class_ptr(modifier: PtrModifier, class: ClassId) -> Type {
        Type::ClassPtr { modifier, class }
    }

    #[inline]
    pub fn as_integer(&self) -> Option<IntegerType> {
        match self {
            Type::Integer(int) => Some(*int),
            _ => None,
        }
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Type::String(_))
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Type::ArrayPtr { .. } | Type::ArrayStorage { .. })
    }

    #[inline]
    pub fn is_class_ptr(&self) -> bool {
        matches!(self, Type::ClassPtr { .. })
    }

    /// Element type of an array, if this is one.
    pub fn element_type(&self) -> Option<&Type> {
        match self {
            Type::ArrayPtr { element, .. } | Type::ArrayStorage { element, .. } => Some(element),
            _ => None,
        }
    }

    /// The class whose full definition this type needs.
    ///
    /// Strips arrays (inline storage and array pointers) down to their
    /// element. Class pointers never require the pointee to be defined
    /// first, so they yield `None`.
    pub fn base_class(&self) -> Option<ClassId> {
        match self {
            Type::Class(class) => Some(*class),
            Type::ArrayStorage { element, .. } | Type::ArrayPtr { element, .. } => {
                element.base_class()
            }
            _ => None,
        }
    }

    /// Whether this class-pointer type accepts a value of type `other`,
    /// ignoring ownership modifiers.
    ///
    /// Accepts `null`, and class pointers or class values whose class is the
    /// pointee class or derives from it. Returns `false` if `self` is not a
    /// class pointer.
    pub fn is_assignable_class_ptr(&self, other: &Type, program: &Program) -> bool {
        let Type::ClassPtr { class: target, .. } = self else {
            return false;
        };
        match other {
            Type::Null => true,
            Type::ClassPtr { class, .. } | Type::Class(class) => {
                program.is_same_or_derived(*class, *target)
            }
            _ => false,
        }
    }
}
