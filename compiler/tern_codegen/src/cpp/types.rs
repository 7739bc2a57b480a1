//! C++ type spelling.
//!
//! Maps IR types to C++ type text:
//!
//! | IR type | C++ |
//! |---|---|
//! | integer | `int8_t` … `int64_t` (promoted when asked) |
//! | string view / owned | `std::string_view` / `std::string` |
//! | array pointer `none` / `mut` / `shared` | `T const *` / `T *` / `std::shared_ptr<T[]>` |
//! | array storage | `std::array<T, N>` |
//! | class pointer `none` / `mut` / `shared` | `const C *` / `C *` / `std::shared_ptr<C>` |

use tern_ir::{Program, PtrModifier, StringKind, Type};

use crate::c_family::IntKind;
use crate::CodegenError;

/// Spell `ty`. With `promote`, narrow integers render at their promoted
/// arithmetic width.
pub fn render_type(program: &Program, ty: &Type, promote: bool) -> Result<String, CodegenError> {
    Ok(match ty {
        Type::Void => "void".to_string(),
        Type::Bool => "bool".to_string(),
        Type::Integer(int) => IntKind::of(*int, promote)?.spelling().to_string(),
        Type::Float => "float".to_string(),
        Type::Double | Type::FloatInt => "double".to_string(),
        Type::String(StringKind::View) => "std::string_view".to_string(),
        Type::String(StringKind::Owned) => "std::string".to_string(),
        Type::ArrayPtr { modifier, element } => {
            let element = render_type(program, element, false)?;
            match modifier {
                PtrModifier::None => format!("{element} const *"),
                PtrModifier::Mut => format!("{element} *"),
                PtrModifier::Shared => format!("std::shared_ptr<{element}[]>"),
            }
        }
        Type::ArrayStorage { element, length } => {
            format!("std::array<{}, {length}>", render_type(program, element, false)?)
        }
        Type::ClassPtr { modifier, class } => {
            let name = &program.class(*class).name;
            match modifier {
                PtrModifier::None => format!("const {name} *"),
                PtrModifier::Mut => format!("{name} *"),
                PtrModifier::Shared => format!("std::shared_ptr<{name}>"),
            }
        }
        Type::Class(class) => program.class(*class).name.clone(),
        Type::Enum(enumeration) => program.enumeration(*enumeration).name.clone(),
        Type::Null => return Err(CodegenError::unsupported("type of null has no spelling")),
    })
}

/// Spell a declaration of `name` with type `ty`.
///
/// Named values are always declared at their promoted width.
pub fn render_declaration(
    program: &Program,
    ty: &Type,
    name: &str,
) -> Result<String, CodegenError> {
    let ty = render_type(program, ty, true)?;
    // Pointer spellings end in `*`; no space before the name.
    if ty.ends_with('*') {
        Ok(format!("{ty}{name}"))
    } else {
        Ok(format!("{ty} {name}"))
    }
}

#[cfg(test)]
mod tests;
