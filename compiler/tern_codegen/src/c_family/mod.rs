//! Rendering policy shared by the C-family targets.
//!
//! Integer kinds and promotion, the narrower-than relation, numeric coercion
//! decisions, and character literal helpers. Everything here decides *what*
//! to emit; the target modules decide how it is spelled.

use tern_ir::{
    BinaryOp, Expr, ExprId, ExprKind, IntWidth, IntegerType, Literal, MethodRef, Program, Type,
};

use crate::CodegenError;

/// The six sized integer kinds a C-family target can spell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    I64,
}

impl IntKind {
    pub const ALL: [IntKind; 6] = [
        IntKind::I8,
        IntKind::U8,
        IntKind::I16,
        IntKind::U16,
        IntKind::I32,
        IntKind::I64,
    ];

    /// Kind of `int`, promoted to the default arithmetic width when `promote`.
    ///
    /// Unsigned 32- and 64-bit integers have no kind.
    pub fn of(int: IntegerType, promote: bool) -> Result<IntKind, CodegenError> {
        let kind = match (int.width, int.signed) {
            (IntWidth::W8, true) => IntKind::I8,
            (IntWidth::W8, false) => IntKind::U8,
            (IntWidth::W16, true) => IntKind::I16,
            (IntWidth::W16, false) => IntKind::U16,
            (IntWidth::W32, true) => IntKind::I32,
            (IntWidth::W64, true) => IntKind::I64,
            (width @ (IntWidth::W32 | IntWidth::W64), false) => {
                return Err(CodegenError::unsupported(format!(
                    "unsigned {}-bit integer",
                    width.bits()
                )))
            }
        };
        Ok(if promote { kind.promoted() } else { kind })
    }

    /// Kind after integer promotion: anything narrower than 32 bits widens
    /// to `I32`.
    pub fn promoted(self) -> IntKind {
        match self {
            IntKind::I8 | IntKind::U8 | IntKind::I16 | IntKind::U16 => IntKind::I32,
            IntKind::I32 | IntKind::I64 => self,
        }
    }

    /// Fixed-width spelling.
    pub fn spelling(self) -> &'static str {
        match self {
            IntKind::I8 => "int8_t",
            IntKind::U8 => "uint8_t",
            IntKind::I16 => "int16_t",
            IntKind::U16 => "uint16_t",
            IntKind::I32 => "int32_t",
            IntKind::I64 => "int64_t",
        }
    }

    /// All-ones mask covering this kind's width, if a mask can be elided
    /// when casting to it.
    fn full_mask(self) -> Option<i64> {
        match self {
            IntKind::I8 | IntKind::U8 => Some(0xff),
            IntKind::I16 | IntKind::U16 => Some(0xffff),
            IntKind::I32 => Some(0xffff_ffff),
            IntKind::I64 => None,
        }
    }
}

/// Kind of an integer-typed value, `None` for non-integer types.
pub fn int_kind(ty: &Type, promote: bool) -> Result<Option<IntKind>, CodegenError> {
    ty.as_integer()
        .map(|int| IntKind::of(int, promote))
        .transpose()
}

/// Whether storing a `right` value into a `left` slot loses range.
///
/// 8-bit kinds are narrower than every 16/32/64-bit kind and than the other
/// 8-bit signedness; 16-bit kinds are narrower than 32/64-bit and the other
/// 16-bit signedness; 32-bit is narrower than 64-bit only.
pub fn is_narrower(left: IntKind, right: IntKind) -> bool {
    match left {
        IntKind::I8 => right != IntKind::I8,
        IntKind::U8 => right != IntKind::U8,
        IntKind::I16 => matches!(right, IntKind::U16 | IntKind::I32 | IntKind::I64),
        IntKind::U16 => matches!(right, IntKind::I16 | IntKind::I32 | IntKind::I64),
        IntKind::I32 => right == IntKind::I64,
        IntKind::I64 => false,
    }
}

/// How a value must be adjusted to fit a numeric target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NumericCoercion {
    /// Render the expression as is.
    None,
    /// Render the literal with a single-precision suffix.
    FloatSuffix,
    /// Cast this expression (possibly one of its sub-expressions) to
    /// the target type.
    Cast(ExprId),
}

/// Numeric coercion of `id` to `target`.
pub fn numeric_coercion(program: &Program, target: &Type, id: ExprId) -> NumericCoercion {
    let expr = program.expr(id);
    match (target, &expr.ty) {
        (Type::Integer(int), Type::Integer(source))
            if *source == IntegerType::I64 && *int != IntegerType::I64 =>
        {
            NumericCoercion::Cast(id)
        }
        (Type::Float, Type::Double) => {
            if expr.as_literal().is_some() {
                NumericCoercion::FloatSuffix
            } else {
                NumericCoercion::Cast(id)
            }
        }
        (Type::Integer(_), Type::FloatInt) => match &expr.kind {
            ExprKind::Call {
                method: MethodRef::Library(method),
                args,
                ..
            } if method.is_math_truncate() && args.len() == 1 => NumericCoercion::Cast(args[0]),
            _ => NumericCoercion::Cast(id),
        },
        _ => NumericCoercion::None,
    }
}

/// How the right-hand side of an assignment into an indexed slot renders.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IndexedStore {
    /// Render bare; the store truncates correctly.
    Plain,
    /// Narrowing cast to the element type.
    Cast,
    /// Fall back to general coercion.
    Coerce,
}

/// Decide how `right` is stored into an element slot of type `element`.
///
/// The right-hand side is taken at its promoted width unless it is a
/// literal, an indexing expression, or an assignment, which keep their
/// declared width.
pub fn indexed_store(
    program: &Program,
    element: &Type,
    right: ExprId,
) -> Result<IndexedStore, CodegenError> {
    let right = program.expr(right);
    let promote = match &right.kind {
        ExprKind::Literal(_) => false,
        ExprKind::Binary { op, .. } => !(*op == BinaryOp::Index || op.is_assign()),
        _ => true,
    };
    let (Some(left_kind), Some(right_kind)) =
        (int_kind(element, false)?, int_kind(&right.ty, promote)?)
    else {
        return Ok(IndexedStore::Coerce);
    };
    if left_kind == IntKind::I8 && right_kind == IntKind::I8 {
        return Ok(IndexedStore::Plain);
    }
    if is_narrower(left_kind, right_kind) {
        Ok(IndexedStore::Cast)
    } else {
        Ok(IndexedStore::Coerce)
    }
}

/// The operand actually cast when casting `id` to `target`.
///
/// `x & MASK` cast to a kind whose full width `MASK` covers renders as a
/// cast of `x` alone.
pub fn static_cast_operand(program: &Program, target: &Type, id: ExprId) -> ExprId {
    let ExprKind::Binary {
        op: BinaryOp::BitAnd,
        left,
        right,
    } = &program.expr(id).kind
    else {
        return id;
    };
    let Some(Literal::Int(mask)) = program.expr(*right).as_literal() else {
        return id;
    };
    let Ok(Some(kind)) = int_kind(target, false) else {
        return id;
    };
    match kind.full_mask() {
        Some(full) if mask & full == full => *left,
        _ => id,
    }
}

/// Whether `c` can be spelled as a plain character literal: printable ASCII
/// or one of the named escapes.
pub fn is_ascii_char(c: i64) -> bool {
    (0x20..=0x7e).contains(&c) || matches!(c, 0x07 | 0x08 | 0x0c | 0x0a | 0x0d | 0x09 | 0x0b)
}

/// The character of a one-character literal that [`is_ascii_char`] accepts.
///
/// Accepts one-character string literals and integer character codes.
pub fn one_ascii_char(expr: &Expr) -> Option<char> {
    match expr.as_literal()? {
        Literal::String(s) => {
            let mut chars = s.chars();
            let c = chars.next()?;
            (chars.next().is_none() && is_ascii_char(i64::from(u32::from(c)))).then_some(c)
        }
        Literal::Int(code) if is_ascii_char(*code) => {
            u32::try_from(*code).ok().and_then(char::from_u32)
        }
        _ => None,
    }
}

/// Append `c` to a C literal delimited by `quote`, escaping it if needed.
///
/// Control characters without a named escape use a full three-digit octal
/// escape, so a following digit is never read as part of it.
fn push_escaped(out: &mut String, c: char, quote: char) {
    let named = match c {
        '\u{7}' => "\\a",
        '\u{8}' => "\\b",
        '\u{c}' => "\\f",
        '\n' => "\\n",
        '\r' => "\\r",
        '\t' => "\\t",
        '\u{b}' => "\\v",
        '\\' => "\\\\",
        c if c == quote => {
            out.push('\\');
            out.push(c);
            return;
        }
        c if c.is_ascii_control() => {
            out.push_str(&format!("\\{:03o}", u32::from(c)));
            return;
        }
        c => {
            out.push(c);
            return;
        }
    };
    out.push_str(named);
}

/// `c` as a C character literal.
pub fn char_literal(c: char) -> String {
    let mut out = String::with_capacity(6);
    out.push('\'');
    push_escaped(&mut out, c, '\'');
    out.push('\'');
    out
}

/// `s` as a C string literal.
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        push_escaped(&mut out, c, '"');
    }
    out.push('"');
    out
}

/// Convert a member name to the target's camelCase convention.
pub fn camel_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Replace every character that cannot appear in an identifier with `_`.
pub fn sanitize_identifier(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
