/// The environment module implements the lexical scope chain.
///
/// An environment is one scope of name-to-value bindings plus an optional
/// reference to the enclosing scope. Closures hold a shared reference to the
/// environment that was active at their definition site, which is what makes
/// lexical scoping and recursion work.
///
/// # Responsibilities
/// - Stores name-to-value bindings for one scope.
/// - Resolves names by walking the scope chain outward.
/// - Keeps captured scopes alive for as long as any closure references them.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// applies operators, calls functions and builtins, and produces runtime
/// values. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Manages scopes for function calls and threads return signals.
/// - Reports runtime errors such as type mismatches or unresolved names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// integers, strings, identifiers, operators, delimiters, and keywords. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles integer and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements, using operator-precedence parsing for expressions.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Resolves operator precedence through per-token prefix and infix rules.
/// - Accumulates syntax errors and continues parsing on a best-effort basis.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during execution, such as
/// integers, booleans, strings, arrays, hashes, functions, and builtins. It
/// also provides the hash-key derivation used by hash literals.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements display forms, truthiness, and type names.
/// - Restricts hash keys to the hashable value types.
pub mod value;
