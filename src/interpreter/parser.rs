/// Core parser state and the operator-precedence expression loop.
///
/// Contains the `Parser` struct, token cursor handling, precedence levels,
/// and error accumulation.
pub mod core;

/// Prefix and infix parse rules for expressions.
///
/// Implements one parse rule per expression-forming token: literals,
/// identifiers, prefix operators, grouping, conditionals, function literals,
/// calls, indexing, and collection literals.
pub mod expression;

/// Statement and block parsing.
///
/// Dispatches on the leading token to parse `let`, `return`, and expression
/// statements, and parses brace-delimited statement blocks.
pub mod statement;
