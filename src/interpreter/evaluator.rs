/// Core evaluation logic and the evaluator itself.
///
/// Contains the `Evaluator` struct, the statement/expression dispatch, and
/// the program- and block-level signal handling.
pub mod core;

/// Prefix operator evaluation.
///
/// Handles the operations that take a single operand: truthiness complement
/// and integer negation.
pub mod prefix;

/// Infix operator evaluation.
///
/// Implements integer arithmetic and comparison, string concatenation,
/// identity equality, and the type-mismatch error taxonomy.
pub mod infix;

/// Collection evaluation.
///
/// Evaluates array literals, hash literals, and index expressions.
pub mod collection;

/// Function call evaluation and the builtin registry.
///
/// Applies user-defined functions and builtins, and defines the static
/// table all builtin lookups go through.
pub mod function;

/// Builtin function implementations.
///
/// The native functions reachable from every program: `len`, `first`,
/// `last`, `arrayPush`, and `print`.
pub mod builtin;
