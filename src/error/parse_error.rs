#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// The parser accumulates these in a list rather than aborting at the first
/// failure, so a single malformed input can produce several entries.
pub enum ParseError {
    /// The lexer found input it cannot tokenize.
    UnrecognizedInput {
        /// The offending source text.
        slice: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal does not fit into a 64-bit signed integer.
    IntegerOutOfRange {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A specific token was expected but something else was found.
    ExpectedToken {
        /// Description of the expected token.
        expected: String,
        /// Description of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No prefix parse rule exists for the current token.
    NoPrefixRule {
        /// Description of the token without a rule.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedInput { slice, line } => {
                write!(f, "Error on line {line}: Unrecognized input: {slice}.")
            },

            Self::IntegerOutOfRange { literal, line } => write!(f,
                                                                "Error on line {line}: Integer literal {literal} is out of range."),

            Self::ExpectedToken { expected,
                                  found,
                                  line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },

            Self::NoPrefixRule { token, line } => write!(f,
                                                         "Error on line {line}: no prefix parse function for {token}."),

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
