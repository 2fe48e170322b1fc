//! # banyan
//!
//! banyan is a small dynamically-typed scripting language interpreted by
//! walking its syntax tree. It has integers, booleans, strings, arrays,
//! hashes, first-class closures, and a handful of built-in functions, with
//! an operator-precedence parser in front of a recursive evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{environment::Environment, evaluator::core::Evaluator, parser::core::Parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Renders every node in a fully parenthesized canonical textual form.
/// - Enables exhaustive, compile-time-checked handling of parsed code.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Keeps the observable evaluation error messages stable.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, environments, and error handling to provide a complete
/// runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive line-by-line front-end.
///
/// Reads one line at a time, parses it as a complete program, and evaluates
/// it against a persistent environment shared across lines.
///
/// # Responsibilities
/// - Prompts, reads, and echoes results for an interactive session.
/// - Prints parse errors without evaluating broken input.
/// - Keeps bindings alive between lines.
pub mod repl;

/// Parses a complete source string into a program.
///
/// Tokenizes and parses the whole input. Parsing is best-effort: it records
/// every syntax error it encounters and keeps going, so a malformed input
/// can report several problems at once. Because an error leaves the tree
/// structurally incomplete, the program is only returned when no errors
/// occurred; evaluating a partial program would be meaningless.
///
/// # Errors
/// Returns all collected [`ParseError`]s, in the order they occurred.
///
/// # Examples
/// ```
/// use banyan::parse_source;
///
/// let program = parse_source("-a * b").unwrap();
/// assert_eq!(program.to_string(), "((-a) * b)");
///
/// // `let` without a name is a syntax error.
/// assert!(parse_source("let = 3").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Program, Vec<ParseError>> {
    let tokens = crate::interpreter::lexer::tokenize(source).map_err(|error| vec![error])?;

    let mut parser = Parser::new(tokens);
    let program = parser.parse_program();

    if parser.errors().is_empty() {
        Ok(program)
    } else {
        Err(parser.into_errors())
    }
}

/// Parses and evaluates a source string as one program in a fresh
/// environment.
///
/// This is the one-shot entry point used by script execution and tests.
/// Nothing is printed automatically; only explicit `print` calls write to
/// the evaluator's output sink.
///
/// # Errors
/// Returns the first syntax error when parsing failed (drivers that want
/// the full list should use [`parse_source`] directly), or the runtime
/// error that aborted evaluation.
///
/// # Examples
/// ```
/// use banyan::{interpreter::evaluator::core::Evaluator, run_source};
///
/// let result = run_source("(5 + 10 * 2 + 15 / 3) * 2 + -10", &Evaluator::new()).unwrap();
/// assert_eq!(result.to_string(), "50");
///
/// // 'x' is not defined.
/// assert!(run_source("let y = x + 1", &Evaluator::new()).is_err());
/// ```
pub fn run_source(source: &str,
                  evaluator: &Evaluator)
                  -> Result<interpreter::value::core::Value, Box<dyn std::error::Error>> {
    let program = match parse_source(source) {
        Ok(program) => program,
        Err(mut errors) => return Err(Box::new(errors.remove(0))),
    };

    let env = Environment::new();
    evaluator.eval_program(&program, &env).map_err(Into::into)
}
