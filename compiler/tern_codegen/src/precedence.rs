//! Operator precedence for minimal parenthesization.
//!
//! Each rendering call receives the precedence of its syntactic context
//! (`parent`). An operator whose own precedence is lower than `parent` gets
//! parentheses; everything else renders bare.

/// Precedence levels of C-family operators, lowest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// Full statement or initializer; never parenthesized.
    Statement,
    /// Function argument or comma-separated item.
    Argument,
    Assign,
    /// `?:`
    Select,
    CondOr,
    CondAnd,
    Or,
    Xor,
    And,
    Equality,
    Rel,
    Shift,
    Add,
    Mul,
    /// Postfix, member access, call, indexing, unary.
    Primary,
}

impl Precedence {
    /// Whether an operator at `self` needs parentheses inside `parent`.
    #[inline]
    pub fn needs_parens(self, parent: Precedence) -> bool {
        parent > self
    }

    /// The next tighter level, used for the right operand of a
    /// left-associative operator.
    pub fn tighter(self) -> Precedence {
        match self {
            Precedence::Statement => Precedence::Argument,
            Precedence::Argument => Precedence::Assign,
            Precedence::Assign => Precedence::Select,
            Precedence::Select => Precedence::CondOr,
            Precedence::CondOr => Precedence::CondAnd,
            Precedence::CondAnd => Precedence::Or,
            Precedence::Or => Precedence::Xor,
            Precedence::Xor => Precedence::And,
            Precedence::And => Precedence::Equality,
            Precedence::Equality => Precedence::Rel,
            Precedence::Rel => Precedence::Shift,
            Precedence::Shift => Precedence::Add,
            Precedence::Add => Precedence::Mul,
            Precedence::Mul | Precedence::Primary => Precedence::Primary,
        }
    }
}

/// Wrap `text` in parentheses when `child` binds looser than `parent`.
pub fn parenthesize(text: String, child: Precedence, parent: Precedence) -> String {
    if child.needs_parens(parent) {
        format!("({text})")
    } else {
        text
    }
}
