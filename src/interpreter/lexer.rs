use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Int(i64),
    /// String literal tokens, such as `"hello"`. The quotes are stripped.
    #[regex(r#""[^"]*""#, parse_string)]
    Str(String),
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `return`
    #[token("return")]
    Return,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// Identifier tokens; binding names such as `x` or `newAdder`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// Line breaks; skipped, but counted for error reporting.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits into an `i64`.
/// - `None`: If the literal is out of range.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Parses a string literal from the current token slice.
///
/// Strips the surrounding quotes. Newlines inside the literal are counted so
/// that line numbers stay correct for everything after it.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The string contents without quotes.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.chars().filter(|&c| c == '\n').count();
    slice[1..slice.len() - 1].to_string()
}

/// Tokenizes a complete source string.
///
/// Produces the ordered `(Token, line)` sequence the parser consumes. The
/// sequence is finite; reaching its end is the end-of-input condition.
///
/// # Errors
/// Returns a [`ParseError`] for the first piece of unrecognizable input, or
/// for an integer literal that does not fit into an `i64`.
///
/// # Example
/// ```
/// use banyan::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("let x = 5").unwrap();
///
/// assert_eq!(tokens[0].0, Token::Let);
/// assert_eq!(tokens[3].0, Token::Int(5));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            let line = lexer.extras.line;
            if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::IntegerOutOfRange { literal: slice.to_string(),
                                                           line });
            }
            return Err(ParseError::UnrecognizedInput { slice: slice.to_string(),
                                                       line });
        }
    }

    Ok(tokens)
}
