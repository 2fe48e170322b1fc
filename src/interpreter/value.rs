/// Core runtime value type.
///
/// Declares the `Value` enum with every variant the evaluator can produce,
/// along with display forms, truthiness, type names, and identity
/// comparison.
pub mod core;

/// User-defined function values.
///
/// A function value pairs its parameter list and body with the environment
/// that was active at its definition site.
pub mod function;

/// Hash-key derivation for hash values.
///
/// Restricts hash keys to integers, booleans, and strings, and encodes the
/// key's type into the derived key so values of different types can never
/// collide.
pub mod hash_key;
