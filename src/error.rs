/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include unexpected tokens, unparsable integer literals,
/// and missing prefix parse rules, and any other issue detected before
/// evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type mismatches, unsupported operators, unresolved
/// identifiers, bad builtin arguments, and unhashable hash keys.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
