//! Index newtypes into the program's arenas.
//!
//! - `ClassId(u32)` into `Program::classes`
//! - `EnumId(u32)` into `Program::enums`
//! - `ExprId(u32)` into the program's `ExprArena`
//!
//! Using indices instead of references keeps the IR immutable and lets side
//! tables (such as per-class emission state) be plain vectors.

use std::fmt;

macro_rules! define_index {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create a new index.
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// Get the index into the owning arena.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            /// Get the raw u32 value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

define_index!(
    /// Index of a class in `Program::classes`.
    ClassId
);

define_index!(
    /// Index of an enum in `Program::enums`.
    EnumId
);

define_index!(
    /// Index of an expression in the program's `ExprArena`.
    ExprId
);
