use std::io::{self, BufRead, Write};

use crate::{
    interpreter::{environment::Environment, evaluator::core::Evaluator},
    parse_source,
};

/// The prompt printed before every interactive line.
pub const PROMPT: &str = ">> ";

/// Runs the interactive session until end of input.
///
/// Each line is parsed as a complete program. When the parser reports
/// errors, each is printed on its own line and nothing is evaluated;
/// otherwise the line is evaluated against one environment that persists
/// across lines, and the resulting value's display form is printed. A
/// runtime error is reported like any other result and the session
/// continues.
///
/// # Errors
/// Returns any I/O error raised while reading input or writing output.
///
/// # Example
/// ```
/// use banyan::repl;
///
/// let mut output = Vec::new();
/// repl::start(&mut "let x = 2; x + 3".as_bytes(), &mut output).unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains("5"));
/// ```
pub fn start(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
    let env = Environment::new();
    let evaluator = Evaluator::new();
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let source = line.trim();
        if source.is_empty() {
            continue;
        }

        match parse_source(source) {
            Err(errors) => {
                for error in errors {
                    writeln!(output, "{error}")?;
                }
            },
            Ok(program) => match evaluator.eval_program(&program, &env) {
                Ok(value) => writeln!(output, "{value}")?,
                Err(error) => writeln!(output, "{error}")?,
            },
        }
    }
}
