use std::{
    io::{self, Write},
    rc::Rc,
};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Returns the length of a string or array.
///
/// Strings report their character count (not their byte count); arrays
/// report their element count. Any other argument type is an error.
///
/// # Parameters
/// - `args`: Slice containing one argument.
///
/// # Example
/// ```
/// use std::io;
///
/// use banyan::interpreter::{evaluator::builtin::len, value::core::Value};
///
/// let r = len(&[Value::from("héllo")], &mut io::sink()).unwrap();
/// assert_eq!(r, Value::Integer(5));
/// ```
pub fn len(args: &[Value], _out: &mut dyn io::Write) -> EvalResult<Value> {
    match &args[0] {
        Value::Str(value) => Ok(Value::Integer(char_count(value))),
        Value::Array(elements) => {
            let length = elements.borrow().len();
            Ok(Value::Integer(i64::try_from(length).unwrap_or(i64::MAX)))
        },
        other => Err(RuntimeError::UnsupportedArgument { builtin:   "len",
                                                         type_name: other.type_name(), }),
    }
}

/// Returns the first element of an array, or the first character of a
/// string as a one-character string.
///
/// An empty collection yields null, mirroring out-of-range indexing.
///
/// # Parameters
/// - `args`: Slice containing one argument.
pub fn first(args: &[Value], _out: &mut dyn io::Write) -> EvalResult<Value> {
    match &args[0] {
        Value::Str(value) => Ok(value.chars().next().map_or(Value::Null, one_char_string)),
        Value::Array(elements) => Ok(elements.borrow().first().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::UnsupportedArgument { builtin:   "first",
                                                         type_name: other.type_name(), }),
    }
}

/// Returns the last element of an array, or the last character of a string
/// as a one-character string.
///
/// An empty collection yields null, mirroring out-of-range indexing.
///
/// # Parameters
/// - `args`: Slice containing one argument.
pub fn last(args: &[Value], _out: &mut dyn io::Write) -> EvalResult<Value> {
    match &args[0] {
        Value::Str(value) => Ok(value.chars().last().map_or(Value::Null, one_char_string)),
        Value::Array(elements) => Ok(elements.borrow().last().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::UnsupportedArgument { builtin:   "last",
                                                         type_name: other.type_name(), }),
    }
}

/// Appends a value to an array in place.
///
/// The value is pushed onto the array's shared backing storage and the same
/// array is returned, so every alias of the array observes the new element.
///
/// # Parameters
/// - `args`: Slice containing the array and the value to append.
///
/// # Example
/// ```
/// use std::io;
///
/// use banyan::interpreter::{evaluator::builtin::array_push, value::core::Value};
///
/// let array = Value::from(vec![Value::Integer(1)]);
/// array_push(&[array.clone(), Value::Integer(2)], &mut io::sink()).unwrap();
///
/// assert_eq!(array.to_string(), "[1, 2]");
/// ```
pub fn array_push(args: &[Value], _out: &mut dyn io::Write) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            elements.borrow_mut().push(args[1].clone());
            Ok(args[0].clone())
        },
        other => Err(RuntimeError::UnsupportedArgument { builtin:   "arrayPush",
                                                         type_name: other.type_name(), }),
    }
}

/// Writes the display form of every argument to the output sink, followed
/// by one newline, and returns null.
///
/// Accepts any number of arguments of any type. Sink failures are not
/// observable from the language.
pub fn print(args: &[Value], out: &mut dyn io::Write) -> EvalResult<Value> {
    for arg in args {
        let _ = write!(out, "{arg}");
    }
    let _ = writeln!(out);
    Ok(Value::Null)
}

/// The character count of a string, saturated into an `i64`.
fn char_count(value: &Rc<str>) -> i64 {
    i64::try_from(value.chars().count()).unwrap_or(i64::MAX)
}

/// Wraps a single character into a string value.
fn one_char_string(c: char) -> Value {
    Value::Str(Rc::from(c.to_string()))
}
