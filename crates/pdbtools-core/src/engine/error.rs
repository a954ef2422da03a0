use thiserror::Error;

/// A malformed selection string.
///
/// Carries the offending token and its byte offset in the selection string, so
/// that callers can point at the exact place to fix. At the end of input the
/// position equals the length of the string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Syntax error at position {position} near '{token}': {kind}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub token: String,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("unknown keyword")]
    UnknownKeyword,

    #[error("'{keyword}' only accepts the '=' operator")]
    IncompatibleOperator { keyword: &'static str },

    #[error("invalid operator, expected one of =, >, <, >=, <=")]
    InvalidOperator,

    #[error("missing value")]
    MissingOperand,

    #[error("expected {expected} value")]
    InvalidLiteral { expected: &'static str },

    #[error("connective without an operand")]
    DanglingConnective,

    #[error("unexpected token")]
    UnexpectedToken,

    #[error("unbalanced parenthesis")]
    UnbalancedParenthesis,

    #[error("parentheses nested more than {limit} levels deep")]
    NestingTooDeep { limit: usize },

    #[error("empty selection")]
    EmptySelection,
}

impl SyntaxError {
    pub(crate) fn new(kind: SyntaxErrorKind, token: &str, position: usize) -> Self {
        Self {
            kind,
            token: token.to_string(),
            position,
        }
    }
}
