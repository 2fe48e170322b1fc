use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
};

use banyan::{
    interpreter::{environment::Environment, evaluator::core::Evaluator},
    parse_source, repl,
};
use clap::Parser;

/// banyan is a small dynamically-typed scripting language with first-class
/// functions, interpreted by walking its syntax tree.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to execute; omit it to start the interactive session.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    match args.script {
        Some(path) => run_file(&path),
        None => {
            let stdin = io::stdin();
            if let Err(e) = repl::start(&mut stdin.lock(), &mut io::stdout()) {
                eprintln!("{e}");
                process::exit(1);
            }
        },
    }
}

/// Executes a script file once.
///
/// Parse errors are printed one per line and nothing is evaluated. A
/// runtime error is printed when evaluation aborts. The final value is not
/// printed; only explicit `print` calls produce output.
fn run_file(path: &Path) {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                               path.display());
                     process::exit(1);
                 });

    let program = match parse_source(&source) {
        Ok(program) => program,
        Err(errors) => {
            for error in errors {
                eprintln!("{error}");
            }
            process::exit(1);
        },
    };

    let evaluator = Evaluator::new();
    let env = Environment::new();
    if let Err(error) = evaluator.eval_program(&program, &env) {
        eprintln!("{error}");
        process::exit(1);
    }
}
