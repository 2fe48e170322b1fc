use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// One scope of name-to-value bindings, chained to its enclosing scope.
///
/// Environments are handed around as `Rc<Environment>`: the creator of a
/// scope owns one handle, and every closure defined while the scope was
/// active holds another. The store is interior-mutable so that `let` can
/// bind through a shared handle.
///
/// A new child scope is created exactly once per function call, never per
/// block, so bindings made inside an `if` branch remain visible in the rest
/// of the enclosing function body.
///
/// A function bound to a name and recursing through it forms a reference
/// cycle (the environment holds the function, the function's captured
/// environment chain reaches back to the same environment). Such cycles are
/// deliberately tolerated: the affected scopes are not reclaimed, which is
/// an accepted cost of reference counting here.
#[derive(Debug, Default)]
pub struct Environment {
    store: RefCell<HashMap<String, Value>>,
    outer: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates a fresh top-level scope.
    ///
    /// # Example
    /// ```
    /// use banyan::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let env = Environment::new();
    /// env.set("x".to_string(), Value::Integer(3));
    ///
    /// assert_eq!(env.get("x"), Some(Value::Integer(3)));
    /// assert_eq!(env.get("y"), None);
    /// ```
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Creates a child scope enclosed by `outer`.
    ///
    /// Lookups that miss the child scope continue in `outer`; writes never
    /// leave the child scope.
    #[must_use]
    pub fn enclosed(outer: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self { store: RefCell::new(HashMap::new()),
                       outer: Some(Rc::clone(outer)), })
    }

    /// Looks a name up, walking the scope chain outward.
    ///
    /// # Returns
    /// The bound value, or `None` when no scope in the chain binds `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.borrow().get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Binds a name in this scope.
    ///
    /// Always writes the local scope, even when an enclosing scope already
    /// binds the same name; the outer binding is shadowed, not mutated.
    pub fn set(&self, name: String, value: Value) {
        self.store.borrow_mut().insert(name, value);
    }
}
