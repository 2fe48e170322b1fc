use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can be raised while evaluating a program.
///
/// A runtime error is a first-class outcome of evaluation: it short-circuits
/// every enclosing evaluation until it reaches the top of the current program
/// or interactive line, where the driver reports it like any other result.
/// The language has no catch construct, so nothing intercepts it on the way.
///
/// The `Display` text of each variant is observable language behavior and is
/// kept stable.
pub enum RuntimeError {
    /// A binary operator was applied to operands of two different types.
    TypeMismatch {
        /// Type name of the left operand.
        left:  &'static str,
        /// The operator.
        op:    InfixOperator,
        /// Type name of the right operand.
        right: &'static str,
    },
    /// A prefix operator was applied to an unsupported operand type.
    UnknownPrefixOperator {
        /// The operator.
        op:      PrefixOperator,
        /// Type name of the operand.
        operand: &'static str,
    },
    /// A binary operator is not defined for this same-typed operand pair.
    UnknownInfixOperator {
        /// Type name of the left operand.
        left:  &'static str,
        /// The operator.
        op:    InfixOperator,
        /// Type name of the right operand.
        right: &'static str,
    },
    /// A name resolved to neither a binding nor a builtin.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// The callee of a call expression is not callable.
    NotAFunction {
        /// Type name of the value that was called.
        type_name: &'static str,
    },
    /// A function or builtin received the wrong number of arguments.
    WrongArgumentCount {
        /// The number of declared parameters.
        want: usize,
        /// The number of supplied arguments.
        got:  usize,
    },
    /// A builtin received an argument of an unsupported type.
    UnsupportedArgument {
        /// Name of the builtin.
        builtin:   &'static str,
        /// Type name of the offending argument.
        type_name: &'static str,
    },
    /// A hash key expression evaluated to an unhashable value.
    UnhashableKey {
        /// Type name of the offending key.
        type_name: &'static str,
    },
    /// An index expression was applied to an unsupported collection or
    /// index type.
    IndexNotSupported {
        /// Canonical rendering of the whole index expression.
        rendering: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left, op, right } => {
                write!(f, "type mismatch: {left} {op} {right}")
            },

            Self::UnknownPrefixOperator { op, operand } => {
                write!(f, "unknown operator: {op}{operand}")
            },

            Self::UnknownInfixOperator { left, op, right } => {
                write!(f, "unknown infix operation: {left} {op} {right}")
            },

            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),

            Self::NotAFunction { type_name } => write!(f, "not a function: {type_name}"),

            Self::WrongArgumentCount { want, got } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },

            Self::UnsupportedArgument { builtin, type_name } => {
                write!(f, "argument to `{builtin}` not supported, got {type_name}")
            },

            Self::UnhashableKey { type_name } => write!(f, "unable to hash key: {type_name}"),

            Self::IndexNotSupported { rendering } => {
                write!(f, "index operator not supported: {rendering}")
            },

            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
