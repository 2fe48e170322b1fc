use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        value::{core::Value, hash_key::HashPair},
    },
};

impl Evaluator {
    /// Evaluates an array literal.
    ///
    /// Elements are evaluated left-to-right; the first element error aborts
    /// the literal and no array is built.
    pub(in crate::interpreter::evaluator) fn eval_array_literal(&self,
                                                                elements: &[Expr],
                                                                env: &Rc<Environment>)
                                                                -> EvalResult<Value> {
        let elements = elements.iter()
                               .map(|element| self.eval_expression(element, env))
                               .collect::<EvalResult<Vec<_>>>()?;
        Ok(Value::from(elements))
    }

    /// Evaluates an index expression.
    ///
    /// Only `ARRAY[INTEGER]` is supported. A negative index `k` addresses
    /// `length + k`, so `-1` is the last element; any index that resolves
    /// outside the array yields null rather than an error. Every other
    /// collection/index type combination is an error carrying the canonical
    /// rendering of the whole expression.
    ///
    /// # Parameters
    /// - `collection`: The indexed expression.
    /// - `index`: The index expression.
    /// - `node`: The whole index node, used to render the error message.
    pub(in crate::interpreter::evaluator) fn eval_index_expression(&self,
                                                                   collection: &Expr,
                                                                   index: &Expr,
                                                                   node: &Expr,
                                                                   env: &Rc<Environment>)
                                                                   -> EvalResult<Value> {
        let collection = self.eval_expression(collection, env)?;
        let index = self.eval_expression(index, env)?;

        match (&collection, &index) {
            (Value::Array(elements), Value::Integer(index)) => {
                Ok(eval_array_index(&elements.borrow(), *index))
            },
            _ => Err(RuntimeError::IndexNotSupported { rendering: node.to_string() }),
        }
    }

    /// Evaluates a hash literal.
    ///
    /// For each pair the key expression is evaluated first and must produce
    /// a hashable value (integer, boolean, or string); then the value
    /// expression is evaluated. Errors from either side abort the literal.
    /// A later pair whose key derives to the same hash key overwrites the
    /// earlier one.
    pub(in crate::interpreter::evaluator) fn eval_hash_literal(&self,
                                                               pairs: &[(Expr, Expr)],
                                                               env: &Rc<Environment>)
                                                               -> EvalResult<Value> {
        let mut entries = HashMap::new();

        for (key_expr, value_expr) in pairs {
            let key = self.eval_expression(key_expr, env)?;
            let Some(hash_key) = key.hash_key() else {
                return Err(RuntimeError::UnhashableKey { type_name: key.type_name() });
            };

            let value = self.eval_expression(value_expr, env)?;
            entries.insert(hash_key, HashPair { key, value });
        }

        Ok(Value::Hash(Rc::new(RefCell::new(entries))))
    }
}

/// Resolves an integer index against an array.
///
/// Negative indices count from the end. Out-of-range resolutions yield
/// null.
fn eval_array_index(elements: &[Value], index: i64) -> Value {
    let length = elements.len() as i64;
    let resolved = if index < 0 { length + index } else { index };

    if (0..length).contains(&resolved) {
        elements[resolved as usize].clone()
    } else {
        Value::Null
    }
}
