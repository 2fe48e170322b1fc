use std::{fs, io};

use banyan::{interpreter::evaluator::core::Evaluator, run_source};
use walkdir::WalkDir;

#[test]
fn demo_scripts_run_cleanly() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "ban"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let evaluator = Evaluator::with_output(Box::new(io::sink()));
        if let Err(e) = run_source(&source, &evaluator) {
            panic!("Demo script {path:?} failed:\n{source}\nError: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}
