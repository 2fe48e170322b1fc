use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a prefix operator to an evaluated operand.
///
/// `!` complements the operand's truthiness and is defined for every value
/// type. `-` is defined only on integers.
pub(in crate::interpreter::evaluator) fn eval_prefix(op: PrefixOperator,
                                                     operand: &Value)
                                                     -> EvalResult<Value> {
    match op {
        PrefixOperator::Not => Ok(Value::Bool(!operand.is_truthy())),
        PrefixOperator::Negate => eval_negation(operand),
    }
}

/// Negates an integer operand.
///
/// Produces a fresh value; the operand is never mutated in place, even when
/// it is shared through other bindings.
fn eval_negation(operand: &Value) -> EvalResult<Value> {
    match operand {
        Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
        _ => Err(RuntimeError::UnknownPrefixOperator { op:      PrefixOperator::Negate,
                                                       operand: operand.type_name(), }),
    }
}
