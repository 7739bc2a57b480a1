//! The whole resolved program.

use rustc_hash::FxHashMap;

use crate::{Class, ClassId, Enum, EnumId, Expr, ExprArena, ExprId, Method};

/// A resolved program: classes, enums, the expression arena, and embedded
/// resources keyed by logical name.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub classes: Vec<Class>,
    pub enums: Vec<Enum>,
    pub exprs: ExprArena,
    pub resources: FxHashMap<String, Vec<u8>>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class, returning its id.
    pub fn add_class(&mut self, class: Class) -> ClassId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "programs never exceed u32::MAX classes"
        )]
        let id = ClassId::new(self.classes.len() as u32);
        self.classes.push(class);
        id
    }

    /// Add an enum, returning its id.
    pub fn add_enum(&mut self, enumeration: Enum) -> EnumId {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "programs never exceed u32::MAX enums"
        )]
        let id = EnumId::new(self.enums.len() as u32);
        self.enums.push(enumeration);
        id
    }

    /// Allocate an expression in the program's arena.
    pub fn alloc(&mut self, expr: Expr) -> ExprId {
        self.exprs.alloc(expr)
    }

    #[inline]
    pub fn class(&self, id: ClassId) -> &Class {
        &self.classes[id.index()]
    }

    #[inline]
    pub fn enumeration(&self, id: EnumId) -> &Enum {
        &self.enums[id.index()]
    }

    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        self.exprs.get(id)
    }

    /// Method `index` of `class`.
    #[inline]
    pub fn method(&self, class: ClassId, index: u32) -> &Method {
        &self.class(class).methods[index as usize]
    }

    /// Iterate over class ids in declaration order.
    pub fn class_ids(&self) -> impl Iterator<Item = ClassId> + '_ {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "class ids were created from u32"
        )]
        let count = self.classes.len() as u32;
        (0..count).map(ClassId::new)
    }

    /// Whether `derived` is `base` or inherits from it, transitively.
    pub fn is_same_or_derived(&self, derived: ClassId, base: ClassId) -> bool {
        let mut current = Some(derived);
        // Bounded by the class count so a malformed parent cycle cannot spin.
        for _ in 0..=self.classes.len() {
            match current {
                Some(id) if id == base => return true,
                Some(id) => current = self.class(id).parent,
                None => return false,
            }
        }
        false
    }
}
