use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::{
    evaluator::function::BuiltinDef,
    value::{
        function::FunctionValue,
        hash_key::{HashKey, HashPair},
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type that can appear during evaluation. Integers,
/// booleans, strings, and null are value types. Arrays, hashes, and
/// functions are reference types: cloning a `Value` clones the handle, not
/// the backing storage, so aliased mutation stays visible through every
/// handle.
///
/// `Return` is an internal control signal that unwinds block evaluation; it
/// is never a first-class language value and never survives past the
/// function call (or program) that unwraps it.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean (`true` or `false`).
    Bool(bool),
    /// An immutable string.
    Str(Rc<str>),
    /// The null value, produced e.g. by an `if` without a taken branch.
    Null,
    /// An array of values with shared, mutable backing storage.
    Array(Rc<RefCell<Vec<Value>>>),
    /// A hash from derived keys to key/value pairs, with shared backing
    /// storage.
    Hash(Rc<RefCell<HashMap<HashKey, HashPair>>>),
    /// A user-defined function together with its captured environment.
    Function(Rc<FunctionValue>),
    /// A built-in native function.
    Builtin(&'static BuiltinDef),
    /// Internal signal carrying the value of a `return` statement.
    Return(Box<Value>),
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(Rc::from(value))
    }
}

impl From<Vec<Self>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(elements)))
    }
}

impl Value {
    /// The uppercase type name used in error messages.
    ///
    /// # Example
    /// ```
    /// use banyan::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Bool(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Null => "NULL",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Return(value) => value.type_name(),
        }
    }

    /// Whether the value counts as true in a condition.
    ///
    /// Null is falsy, booleans are themselves, integers are falsy exactly
    /// when zero, and every other value is truthy.
    ///
    /// # Example
    /// ```
    /// use banyan::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(1).is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(value) => *value,
            Self::Integer(value) => *value != 0,
            _ => true,
        }
    }

    /// Identity comparison between two values.
    ///
    /// Booleans and null behave like process-wide singletons, so identity
    /// coincides with value equality for them. Reference types are
    /// identical only when they share backing storage; two structurally
    /// equal but separately built arrays or hashes are not. Values of
    /// different types are never identical.
    #[must_use]
    pub fn is_identical_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Null, Self::Null) => true,
            (Self::Str(left), Self::Str(right)) => Rc::ptr_eq(left, right),
            (Self::Array(left), Self::Array(right)) => Rc::ptr_eq(left, right),
            (Self::Hash(left), Self::Hash(right)) => Rc::ptr_eq(left, right),
            (Self::Function(left), Self::Function(right)) => Rc::ptr_eq(left, right),
            (Self::Builtin(left), Self::Builtin(right)) => std::ptr::eq(*left, *right),
            _ => false,
        }
    }

    /// Returns `true` if the value is [`Return`].
    ///
    /// [`Return`]: Value::Return
    #[must_use]
    pub const fn is_return(&self) -> bool {
        matches!(self, Self::Return(..))
    }
}

/// Scalar values compare by value; reference types compare by identity of
/// their backing storage, matching the language's own equality.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Return(left), Self::Return(right)) => left == right,
            _ => self.is_identical_to(other),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                let pairs = pairs.borrow();
                let mut entries: Vec<(&HashKey, &HashPair)> = pairs.iter().collect();
                entries.sort_by(|(a, _), (b, _)| a.cmp(b));

                write!(f, "{{")?;
                for (index, (_, pair)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => write!(f, "{function}"),
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Return(value) => write!(f, "{value}"),
        }
    }
}
