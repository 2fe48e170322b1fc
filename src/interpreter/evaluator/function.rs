use std::{io, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            builtin,
            core::{EvalResult, Evaluator},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the slice of evaluated argument values and the
/// evaluator's output sink. It returns either a value or a runtime error;
/// it never aborts the process.
pub type BuiltinFn = fn(&[Value], &mut dyn io::Write) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Variadic` means any number of arguments is accepted.
#[derive(Debug, Clone, Copy)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any number of arguments.
    Variadic,
}

impl Arity {
    /// Tests whether the given argument count satisfies this constraint.
    const fn check(self, got: usize) -> Result<(), RuntimeError> {
        match self {
            Self::Exact(want) if got != want => Err(RuntimeError::WrongArgumentCount { want, got }),
            _ => Ok(()),
        }
    }
}

/// One entry of the builtin registry.
///
/// Identifier resolution hands out `&'static` references to these entries,
/// so a builtin bound through the environment stays callable and compares
/// by identity like every other reference value.
#[derive(Debug)]
pub struct BuiltinDef {
    /// The name the builtin is registered under.
    pub name:  &'static str,
    /// The accepted argument count.
    pub arity: Arity,
    /// The native implementation.
    pub func:  BuiltinFn,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// The names of all registered builtin functions.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"       => { arity: Arity::Exact(1), func: builtin::len },
    "first"     => { arity: Arity::Exact(1), func: builtin::first },
    "last"      => { arity: Arity::Exact(1), func: builtin::last },
    "arrayPush" => { arity: Arity::Exact(2), func: builtin::array_push },
    "print"     => { arity: Arity::Variadic, func: builtin::print },
}

/// Looks up a builtin by name.
///
/// # Example
/// ```
/// use banyan::interpreter::evaluator::function::lookup_builtin;
///
/// assert!(lookup_builtin("len").is_some());
/// assert!(lookup_builtin("frobnicate").is_none());
/// ```
#[must_use]
pub fn lookup_builtin(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

impl Evaluator {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments strictly
    /// left-to-right; the first argument error is returned immediately and
    /// the remaining arguments are not evaluated.
    pub(in crate::interpreter::evaluator) fn eval_call_expression(&self,
                                                                  callee: &Expr,
                                                                  args: &[Expr],
                                                                  env: &Rc<Environment>)
                                                                  -> EvalResult<Value> {
        let callee = self.eval_expression(callee, env)?;
        let args = args.iter()
                       .map(|arg| self.eval_expression(arg, env))
                       .collect::<EvalResult<Vec<_>>>()?;
        self.apply_function(&callee, args)
    }

    /// Applies a callable value to evaluated arguments.
    ///
    /// For a user-defined function the supplied argument count must equal
    /// the declared parameter count; partial application and silent
    /// truncation do not exist. The body runs in one fresh child of the
    /// function's captured environment, with each parameter bound to its
    /// argument, and a return signal from the body is unwrapped into the
    /// call's value. A body without an explicit `return` yields its last
    /// expression instead; both forms are valid ways to produce a result.
    ///
    /// Builtins check their own argument types; the registry checks their
    /// arity.
    ///
    /// # Errors
    /// - [`RuntimeError::WrongArgumentCount`] on an arity mismatch.
    /// - [`RuntimeError::NotAFunction`] when the callee is not callable.
    /// - Whatever the function body or builtin itself raises.
    pub fn apply_function(&self, callee: &Value, args: Vec<Value>) -> EvalResult<Value> {
        match callee {
            Value::Function(function) => {
                if args.len() != function.params.len() {
                    return Err(RuntimeError::WrongArgumentCount { want: function.params.len(),
                                                                  got:  args.len(), });
                }

                let env = Environment::enclosed(&function.env);
                for (param, arg) in function.params.iter().zip(args) {
                    env.set(param.clone(), arg);
                }

                let result = self.eval_block(&function.body, &env)?;
                Ok(match result {
                    Value::Return(value) => *value,
                    other => other,
                })
            },
            Value::Builtin(builtin) => {
                builtin.arity.check(args.len())?;
                (builtin.func)(&args, &mut **self.out.borrow_mut())
            },
            _ => Err(RuntimeError::NotAFunction { type_name: callee.type_name() }),
        }
    }
}
