use std::fmt;

/// A complete parsed program: an ordered sequence of top-level statements.
///
/// A `Program` is what the parser hands to the evaluator. Its `Display`
/// implementation renders the canonical textual form of the whole program,
/// with statements joined by `"; "`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree node representing a statement.
///
/// Statements are the units a program and a block are made of. Unlike
/// expressions they are not combined by operators; they only appear in
/// sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `let` binding: `let <name> = <value>`.
    Let {
        /// The name being bound.
        name:  String,
        /// The expression producing the bound value.
        value: Expr,
    },
    /// A `return` statement: `return <value>`.
    Return {
        /// The expression producing the returned value.
        value: Expr,
    },
    /// A bare expression evaluated for its value.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

/// A brace-delimited sequence of statements.
///
/// Blocks appear as the branches of an `if` expression and as function
/// bodies. A block does not open a new scope; only function calls do.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// The statements inside the block, in source order.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree node representing an expression.
///
/// `Expr` covers every construct that produces a value, from literals and
/// identifiers to operator applications, conditionals, function literals,
/// calls, and collection literals. The tree is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier {
        /// The referenced name.
        name: String,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
    },
    /// A boolean literal: `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
    },
    /// A string literal.
    StringLiteral {
        /// The literal text, without the surrounding quotes.
        value: String,
    },
    /// A prefix operator applied to one operand (e.g. `!ok`, `-x`).
    Prefix {
        /// The prefix operator.
        op:      PrefixOperator,
        /// The operand expression.
        operand: Box<Expr>,
    },
    /// A binary operator applied to two operands.
    Infix {
        /// Left operand.
        left:  Box<Expr>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Expr>,
    },
    /// A conditional expression with an optional `else` branch.
    ///
    /// Without an `else` branch, a false condition yields null.
    If {
        /// The condition expression.
        condition:   Box<Expr>,
        /// Block evaluated when the condition is truthy.
        consequence: Block,
        /// Block evaluated otherwise, if present.
        alternative: Option<Block>,
    },
    /// A function literal: `fn(a, b) { ... }`.
    FunctionLiteral {
        /// The parameter names.
        params: Vec<String>,
        /// The function body.
        body:   Block,
    },
    /// A call expression: `<callee>(<args>)`.
    Call {
        /// The expression producing the callable.
        callee: Box<Expr>,
        /// The argument expressions, in source order.
        args:   Vec<Expr>,
    },
    /// An array literal: `[1, 2, 3]`.
    ArrayLiteral {
        /// The element expressions, in source order.
        elements: Vec<Expr>,
    },
    /// An index expression: `<collection>[<index>]`.
    Index {
        /// The expression producing the indexed collection.
        collection: Box<Expr>,
        /// The index expression.
        index:      Box<Expr>,
    },
    /// A hash literal: `{"a": 1, 2: "b"}`.
    HashLiteral {
        /// Key/value expression pairs, in source order.
        pairs: Vec<(Expr, Expr)>,
    },
}

/// Represents a prefix (unary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical complement of truthiness (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

/// Represents an infix (binary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InfixOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

/// Writes a statement sequence joined by `"; "`.
///
/// Shared by `Program` and `Block` rendering so that both delimit
/// statements identically.
fn write_statements(f: &mut fmt::Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    for (index, statement) in statements.iter().enumerate() {
        if index > 0 {
            write!(f, "; ")?;
        }
        write!(f, "{statement}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return write!(f, "{{ }}");
        }
        write!(f, "{{ ")?;
        write_statements(f, &self.statements)?;
        write!(f, " }}")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value}"),
            Self::Return { value } => write!(f, "return {value}"),
            Self::Expression { expr } => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Expr {
    /// Renders the fully parenthesized canonical form of the expression.
    ///
    /// The rendering is independent of the original source spacing, and
    /// re-parsing it yields a tree with the same canonical form. Operator
    /// applications are always parenthesized, so precedence is explicit in
    /// the output.
    ///
    /// # Example
    /// ```
    /// use banyan::ast::{Expr, InfixOperator};
    ///
    /// let expr = Expr::Infix { left:  Box::new(Expr::Identifier { name: "a".to_string() }),
    ///                          op:    InfixOperator::Add,
    ///                          right: Box::new(Expr::IntegerLiteral { value: 2 }), };
    ///
    /// assert_eq!(expr.to_string(), "(a + 2)");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name } => write!(f, "{name}"),
            Self::IntegerLiteral { value } => write!(f, "{value}"),
            Self::BooleanLiteral { value } => write!(f, "{value}"),
            Self::StringLiteral { value } => write!(f, "\"{value}\""),
            Self::Prefix { op, operand } => write!(f, "({op}{operand})"),
            Self::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { params, body } => {
                write!(f, "fn({}) {body}", params.join(", "))
            },
            Self::Call { callee, args } => {
                write!(f, "{callee}(")?;
                for (index, arg) in args.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
            Self::ArrayLiteral { elements } => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Index { collection, index } => write!(f, "({collection}[{index}])"),
            Self::HashLiteral { pairs } => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}
