use std::rc::Rc;

use crate::interpreter::value::core::Value;

/// A derived hash key.
///
/// Only integers, booleans, and strings may key a hash. The derived key
/// carries the value's type in its variant tag, so equal-looking values of
/// different types (`1`, `true`, `"1"`) can never collide.
///
/// The ordering of keys is only used to render hashes deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashKey {
    /// Key derived from an integer value.
    Integer(i64),
    /// Key derived from a boolean value.
    Bool(bool),
    /// Key derived from a string value.
    Str(Rc<str>),
}

/// One stored hash entry.
///
/// The original key object is retained alongside the value so the pair can
/// be rendered and inspected; the derived [`HashKey`] only addresses it.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as it was written, before derivation.
    pub key:   Value,
    /// The stored value.
    pub value: Value,
}

impl Value {
    /// Derives the hash key for this value.
    ///
    /// # Returns
    /// - `Some(HashKey)`: For integers, booleans, and strings.
    /// - `None`: For every other value type; such values cannot key a hash.
    ///
    /// # Example
    /// ```
    /// use banyan::interpreter::value::{core::Value, hash_key::HashKey};
    ///
    /// assert_eq!(Value::Integer(1).hash_key(), Some(HashKey::Integer(1)));
    /// assert_ne!(Value::Integer(1).hash_key(), Value::Bool(true).hash_key());
    /// assert_eq!(Value::Null.hash_key(), None);
    /// ```
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Self::Integer(value) => Some(HashKey::Integer(*value)),
            Self::Bool(value) => Some(HashKey::Bool(*value)),
            Self::Str(value) => Some(HashKey::Str(Rc::clone(value))),
            _ => None,
        }
    }
}
