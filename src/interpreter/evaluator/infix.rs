use std::rc::Rc;

use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies an infix operator to two evaluated operands.
///
/// The dispatch order matters and is observable:
/// 1. Two integers use numeric arithmetic and comparison.
/// 2. Two strings support `+` only; every other operator on a string pair
///    is an unknown-operation error.
/// 3. `==` and `!=` on any remaining operand pair compare identity. For
///    booleans and null this coincides with value equality; arrays, hashes,
///    and functions are equal only when they alias the same storage. In
///    particular this makes `1 == true` simply `false`, not an error.
/// 4. Everything else is an error: a type mismatch when the operand types
///    differ, an unknown operation when they agree.
pub(in crate::interpreter::evaluator) fn eval_infix(op: InfixOperator,
                                                    left: &Value,
                                                    right: &Value)
                                                    -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(left), Value::Integer(right)) => eval_integer_infix(op, *left, *right),
        (Value::Str(left), Value::Str(right)) => eval_string_infix(op, left, right),
        _ => match op {
            InfixOperator::Equal => Ok(Value::Bool(left.is_identical_to(right))),
            InfixOperator::NotEqual => Ok(Value::Bool(!left.is_identical_to(right))),
            _ if left.type_name() != right.type_name() => {
                Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                                 op,
                                                 right: right.type_name() })
            },
            _ => Err(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                          op,
                                                          right: right.type_name() }),
        },
    }
}

/// Integer arithmetic and comparison.
///
/// Arithmetic wraps on overflow, matching two's-complement host behavior.
/// Division truncates toward zero; a zero divisor is a deterministic
/// evaluation error, not a crash.
fn eval_integer_infix(op: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
    let value = match op {
        InfixOperator::Add => Value::Integer(left.wrapping_add(right)),
        InfixOperator::Sub => Value::Integer(left.wrapping_sub(right)),
        InfixOperator::Mul => Value::Integer(left.wrapping_mul(right)),
        InfixOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer(left.wrapping_div(right))
        },
        InfixOperator::Less => Value::Bool(left < right),
        InfixOperator::Greater => Value::Bool(left > right),
        InfixOperator::LessEqual => Value::Bool(left <= right),
        InfixOperator::GreaterEqual => Value::Bool(left >= right),
        InfixOperator::Equal => Value::Bool(left == right),
        InfixOperator::NotEqual => Value::Bool(left != right),
    };
    Ok(value)
}

/// String operations: `+` concatenates, everything else is an error.
fn eval_string_infix(op: InfixOperator, left: &Rc<str>, right: &Rc<str>) -> EvalResult<Value> {
    if op != InfixOperator::Add {
        return Err(RuntimeError::UnknownInfixOperator { left: "STRING",
                                                        op,
                                                        right: "STRING" });
    }
    Ok(Value::Str(Rc::from(format!("{left}{right}"))))
}
