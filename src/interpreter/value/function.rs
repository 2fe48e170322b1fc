use std::rc::Rc;

use crate::{ast::Block, interpreter::environment::Environment};

/// A user-defined function value: a closure.
///
/// The captured environment is the one that was active at the definition
/// site, held by shared reference rather than copied. Bindings added to an
/// enclosing scope after the closure was created are therefore visible
/// through the capture chain, which is what allows `let f = fn(...) { f(...) }`
/// to recurse by name.
#[derive(Debug)]
pub struct FunctionValue {
    /// The declared parameter names.
    pub params: Vec<String>,
    /// The function body.
    pub body:   Block,
    /// The environment captured at the definition site.
    pub env:    Rc<Environment>,
}

impl std::fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fn({}) {}", self.params.join(", "), self.body)
    }
}
