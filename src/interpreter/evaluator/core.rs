use std::{cell::RefCell, io, rc::Rc};

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{function::lookup_builtin, infix::eval_infix, prefix::eval_prefix},
        value::{core::Value, function::FunctionValue},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. The error side doubles as the
/// language's error signal: `?` re-propagates it through every enclosing
/// evaluation without further work, which is exactly the short-circuit the
/// language semantics require.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces AST nodes to runtime values.
///
/// The evaluator is a single recursive dispatch over node variants. It
/// carries no binding state of its own; the current [`Environment`] is an
/// argument to every evaluation, and function calls thread their own child
/// environments through recursion.
///
/// The only state the evaluator owns is the output sink that `print`
/// writes to, which defaults to standard output.
pub struct Evaluator {
    pub(in crate::interpreter::evaluator) out: RefCell<Box<dyn io::Write>>,
}

#[allow(clippy::new_without_default)]
impl Evaluator {
    /// Creates an evaluator that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self { out: RefCell::new(Box::new(io::stdout())) }
    }

    /// Creates an evaluator that prints to the given sink.
    ///
    /// Used by tests to capture `print` output.
    #[must_use]
    pub fn with_output(out: Box<dyn io::Write>) -> Self {
        Self { out: RefCell::new(out) }
    }

    /// Evaluates a whole program and returns its final value.
    ///
    /// Statements run in order; the value of the last one is the program's
    /// value. A return signal produced anywhere stops execution, and at
    /// this outermost level only, the signal is unwrapped to the value it
    /// carries.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] any statement produces; nothing
    /// after it is evaluated.
    ///
    /// # Example
    /// ```
    /// use banyan::{
    ///     interpreter::{environment::Environment, evaluator::core::Evaluator, value::core::Value},
    ///     parse_source,
    /// };
    ///
    /// let program = parse_source("let double = fn(x) { x * 2 }; double(21)").unwrap();
    /// let evaluator = Evaluator::new();
    /// let env = Environment::new();
    ///
    /// let result = evaluator.eval_program(&program, &env).unwrap();
    /// assert_eq!(result, Value::Integer(42));
    /// ```
    pub fn eval_program(&self, program: &Program, env: &Rc<Environment>) -> EvalResult<Value> {
        let mut result = Value::Null;

        for statement in &program.statements {
            result = self.eval_statement(statement, env)?;
            if let Value::Return(value) = result {
                return Ok(*value);
            }
        }
        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// - `let` evaluates its value expression and binds the name in the
    ///   current local scope, shadowing rather than mutating any outer
    ///   binding of the same name. The statement yields the bound value.
    /// - `return` wraps its value in a return signal for the enclosing
    ///   blocks to pass through.
    /// - An expression statement yields the expression's value.
    pub fn eval_statement(&self,
                          statement: &Statement,
                          env: &Rc<Environment>)
                          -> EvalResult<Value> {
        match statement {
            Statement::Let { name, value } => {
                let value = self.eval_expression(value, env)?;
                env.set(name.clone(), value.clone());
                Ok(value)
            },
            Statement::Return { value } => {
                let value = self.eval_expression(value, env)?;
                Ok(Value::Return(Box::new(value)))
            },
            Statement::Expression { expr } => self.eval_expression(expr, env),
        }
    }

    /// Evaluates the statements of a block in order.
    ///
    /// Unlike [`Evaluator::eval_program`], a return signal is yielded
    /// unreduced, so an enclosing `if` or function call can keep
    /// propagating it. Blocks do not open a scope of their own.
    ///
    /// An empty block yields null.
    pub fn eval_block(&self, block: &Block, env: &Rc<Environment>) -> EvalResult<Value> {
        let mut result = Value::Null;

        for statement in &block.statements {
            result = self.eval_statement(statement, env)?;
            if result.is_return() {
                return Ok(result);
            }
        }
        Ok(result)
    }

    /// Evaluates an expression to a runtime value.
    ///
    /// This is the heart of the interpreter: one exhaustive dispatch over
    /// every expression variant. Operand evaluation is strictly
    /// left-to-right everywhere, and the first error aborts the whole
    /// expression.
    pub fn eval_expression(&self, expr: &Expr, env: &Rc<Environment>) -> EvalResult<Value> {
        match expr {
            Expr::Identifier { name } => Self::eval_identifier(name, env),
            Expr::IntegerLiteral { value } => Ok(Value::Integer(*value)),
            Expr::BooleanLiteral { value } => Ok(Value::Bool(*value)),
            Expr::StringLiteral { value } => Ok(Value::from(value.as_str())),
            Expr::Prefix { op, operand } => {
                let operand = self.eval_expression(operand, env)?;
                eval_prefix(*op, &operand)
            },
            Expr::Infix { left, op, right } => {
                let left = self.eval_expression(left, env)?;
                let right = self.eval_expression(right, env)?;
                eval_infix(*op, &left, &right)
            },
            Expr::If { condition,
                       consequence,
                       alternative, } => {
                self.eval_if_expression(condition, consequence, alternative.as_ref(), env)
            },
            Expr::FunctionLiteral { params, body } => {
                Ok(Value::Function(Rc::new(FunctionValue { params: params.clone(),
                                                           body:   body.clone(),
                                                           env:    Rc::clone(env), })))
            },
            Expr::Call { callee, args } => self.eval_call_expression(callee, args, env),
            Expr::ArrayLiteral { elements } => self.eval_array_literal(elements, env),
            Expr::Index { collection, index } => {
                self.eval_index_expression(collection, index, expr, env)
            },
            Expr::HashLiteral { pairs } => self.eval_hash_literal(pairs, env),
        }
    }

    /// Evaluates a conditional expression.
    ///
    /// A truthy condition selects the consequence block; otherwise the
    /// alternative runs when present, and a missing alternative yields
    /// null. The untaken branch is never evaluated.
    fn eval_if_expression(&self,
                          condition: &Expr,
                          consequence: &Block,
                          alternative: Option<&Block>,
                          env: &Rc<Environment>)
                          -> EvalResult<Value> {
        let condition = self.eval_expression(condition, env)?;

        if condition.is_truthy() {
            self.eval_block(consequence, env)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative, env)
        } else {
            Ok(Value::Null)
        }
    }

    /// Resolves an identifier.
    ///
    /// The environment chain is searched first, then the builtin registry,
    /// so a `let` binding can shadow a builtin of the same name.
    fn eval_identifier(name: &str, env: &Rc<Environment>) -> EvalResult<Value> {
        if let Some(value) = env.get(name) {
            return Ok(value);
        }
        if let Some(builtin) = lookup_builtin(name) {
            return Ok(Value::Builtin(builtin));
        }
        Err(RuntimeError::IdentifierNotFound { name: name.to_string() })
    }
}
