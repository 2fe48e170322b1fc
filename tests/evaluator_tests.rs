use std::{cell::RefCell, io, rc::Rc};

use banyan::{
    interpreter::{environment::Environment, evaluator::core::Evaluator, value::core::Value},
    parse_source,
};

fn run(source: &str) -> Value {
    let program =
        parse_source(source).unwrap_or_else(|errors| panic!("parse failed for {source:?}: {errors:?}"));
    let evaluator = Evaluator::with_output(Box::new(io::sink()));
    let env = Environment::new();
    evaluator.eval_program(&program, &env)
             .unwrap_or_else(|e| panic!("evaluation failed for {source:?}: {e}"))
}

fn run_err(source: &str) -> String {
    let program =
        parse_source(source).unwrap_or_else(|errors| panic!("parse failed for {source:?}: {errors:?}"));
    let evaluator = Evaluator::with_output(Box::new(io::sink()));
    let env = Environment::new();
    match evaluator.eval_program(&program, &env) {
        Ok(value) => panic!("expected an error for {source:?}, got {value}"),
        Err(error) => error.to_string(),
    }
}

/// An output sink that stays readable after the evaluator takes ownership
/// of its writing half.
#[derive(Clone, Default)]
struct SharedOutput(Rc<RefCell<Vec<u8>>>);

impl io::Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn run_capturing(source: &str) -> String {
    let program =
        parse_source(source).unwrap_or_else(|errors| panic!("parse failed for {source:?}: {errors:?}"));
    let output = SharedOutput::default();
    let evaluator = Evaluator::with_output(Box::new(output.clone()));
    let env = Environment::new();
    evaluator.eval_program(&program, &env)
             .unwrap_or_else(|e| panic!("evaluation failed for {source:?}: {e}"));
    String::from_utf8(output.0.borrow().clone()).unwrap()
}

#[test]
fn integer_arithmetic() {
    let cases = [("5", 5),
                 ("-5", -5),
                 ("-(-10)", 10),
                 ("5 + 5 + 5 + 5 - 10", 10),
                 ("2 * 2 * 2 * 2 * 2", 32),
                 ("50 / 2 * 2 + 10", 60),
                 ("3 * (3 * 3) + 10", 37),
                 ("7 / 2", 3),
                 ("-7 / 2", -3),
                 ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50)];

    for (input, expected) in cases {
        assert_eq!(run(input), Value::Integer(expected), "input: {input}");
    }
}

#[test]
fn boolean_operators() {
    let cases = [("true", true),
                 ("false", false),
                 ("1 < 2", true),
                 ("1 > 2", false),
                 ("1 == 1", true),
                 ("1 != 2", true),
                 ("2 <= 2", true),
                 ("3 >= 4", false),
                 ("true == true", true),
                 ("false != true", true),
                 ("(1 < 2) == true", true),
                 ("!true", false),
                 ("!5", false),
                 ("!!5", true),
                 ("!0", true)];

    for (input, expected) in cases {
        assert_eq!(run(input), Value::Bool(expected), "input: {input}");
    }
}

#[test]
fn if_expressions_follow_truthiness() {
    assert_eq!(run("if (true) { 10 }"), Value::Integer(10));
    assert_eq!(run("if (1) { 10 }"), Value::Integer(10));
    assert_eq!(run("if (false) { 10 }"), Value::Null);
    assert_eq!(run("if (0) { 10 }"), Value::Null);
    assert_eq!(run("if (1 < 2) { 10 } else { 20 }"), Value::Integer(10));
    assert_eq!(run("if (1 > 2) { 10 } else { 20 }"), Value::Integer(20));
    assert_eq!(run("if (\"\") { 10 }"), Value::Integer(10));
}

#[test]
fn return_unwinds_nested_blocks() {
    let cases = [("return 10;", 10),
                 ("return 10; 9;", 10),
                 ("return 2 * 5; 9;", 10),
                 ("9; return 2 * 5; 9;", 10),
                 ("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10)];

    for (input, expected) in cases {
        assert_eq!(run(input), Value::Integer(expected), "input: {input}");
    }
}

#[test]
fn let_bindings_and_lookup() {
    let cases = [("let a = 5; a;", 5),
                 ("let a = 5 * 5; a;", 25),
                 ("let a = 5; let b = a; b;", 5),
                 ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
                 // A let statement yields the bound value itself.
                 ("let a = 7", 7)];

    for (input, expected) in cases {
        assert_eq!(run(input), Value::Integer(expected), "input: {input}");
    }
}

#[test]
fn scoping_is_function_level_not_block_level() {
    let source = "let f = fn() { if (true) { let x = 5; } x }; f()";
    assert_eq!(run(source), Value::Integer(5));
}

#[test]
fn let_shadows_without_mutating_outer_binding() {
    let source = "let x = 1; let f = fn() { let x = 2; x }; f() + x";
    assert_eq!(run(source), Value::Integer(3));
}

#[test]
fn functions_and_closures() {
    let cases = [("let identity = fn(x) { x }; identity(5);", 5),
                 ("let identity = fn(x) { return x; }; identity(5);", 5),
                 ("let double = fn(x) { x * 2 }; double(5);", 10),
                 ("let add = fn(x, y) { x + y }; add(5, 5);", 10),
                 ("let add = fn(x, y) { x + y }; add(5 + 5, add(5, 5));", 20),
                 ("fn(x) { x }(5)", 5),
                 ("let newAdder = fn(x){ fn(y){ x + y } }; let addTwo = newAdder(2); addTwo(2);",
                  4)];

    for (input, expected) in cases {
        assert_eq!(run(input), Value::Integer(expected), "input: {input}");
    }
}

#[test]
fn named_recursion_reaches_through_the_capture_chain() {
    let source = "let fib = fn(n) { if (n < 2) { return n; } fib(n - 1) + fib(n - 2) }; fib(10)";
    assert_eq!(run(source), Value::Integer(55));
}

#[test]
fn string_concatenation() {
    assert_eq!(run("\"Hello\" + \" \" + \"World!\""), Value::from("Hello World!"));
    assert_eq!(run("let s = \"a\"; s + s"), Value::from("aa"));
}

#[test]
fn array_literals_and_indexing() {
    assert_eq!(run("[1, 2 * 2, 3 + 3]").to_string(), "[1, 4, 6]");

    let cases = [("[1, 2, 3][0]", Value::Integer(1)),
                 ("[1, 2, 3][2]", Value::Integer(3)),
                 ("let i = 0; [1][i];", Value::Integer(1)),
                 ("let xs = [1, 2, 3]; xs[1 + 1];", Value::Integer(3)),
                 ("[1, 2, 3][-1]", Value::Integer(3)),
                 ("[1, 2, 3][-3]", Value::Integer(1)),
                 ("[1, 2, 3][-4]", Value::Null),
                 ("[1, 2, 3][3]", Value::Null)];

    for (input, expected) in cases {
        assert_eq!(run(input), expected, "input: {input}");
    }
}

#[test]
fn arrays_are_shared_by_reference() {
    assert_eq!(run("let a = [1, 2]; arrayPush(a, 3); a;").to_string(), "[1, 2, 3]");
    assert_eq!(run("let a = [1, 2]; arrayPush(a, 3); len(a);"), Value::Integer(3));
    // Mutation through an alias is visible through the original binding.
    assert_eq!(run("let a = [1]; let b = a; arrayPush(b, 2); len(a)"), Value::Integer(2));
}

#[test]
fn hash_keys_compare_by_value_across_spellings() {
    let source = "let two = \"two\"; {\"one\": 10 - 9, two: 1 + 1, \"thr\" + \"ee\": 6 / 2}";
    assert_eq!(run(source).to_string(), "{one: 1, three: 3, two: 2}");
}

#[test]
fn hash_keys_of_different_types_do_not_collide() {
    assert_eq!(run("{1: \"int\", true: \"bool\", \"1\": \"str\"}").to_string(),
               "{1: int, true: bool, 1: str}");
}

#[test]
fn equality_is_identity_outside_integers_and_strings() {
    // Separately built arrays are not equal, an aliased array is.
    assert_eq!(run("[1] == [1]"), Value::Bool(false));
    assert_eq!(run("let a = [1]; a == a"), Value::Bool(true));
    // Mixed types compare unequal instead of erroring.
    assert_eq!(run("1 == true"), Value::Bool(false));
    assert_eq!(run("1 != true"), Value::Bool(true));
    // All nulls are the same null.
    assert_eq!(run("let a = if (false) { 1 }; let b = if (false) { 2 }; a == b"),
               Value::Bool(true));
}

#[test]
fn error_messages_are_exact() {
    let cases = [("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
                 ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
                 ("-true", "unknown operator: -BOOLEAN"),
                 ("true + false;", "unknown infix operation: BOOLEAN + BOOLEAN"),
                 ("5; true + false; 5", "unknown infix operation: BOOLEAN + BOOLEAN"),
                 ("\"a\" - \"b\"", "unknown infix operation: STRING - STRING"),
                 ("\"a\" == \"a\"", "unknown infix operation: STRING == STRING"),
                 ("foobar", "identifier not found: foobar"),
                 ("5 / 0", "division by zero"),
                 ("5(1)", "not a function: INTEGER"),
                 ("5[0]", "index operator not supported: (5[0])"),
                 ("{1: 1}[1]", "index operator not supported: ({1: 1}[1])"),
                 ("{[1]: 2}", "unable to hash key: ARRAY"),
                 ("{fn(x) { x }: 2}", "unable to hash key: FUNCTION")];

    for (input, expected) in cases {
        assert_eq!(run_err(input), expected, "input: {input}");
    }
}

#[test]
fn errors_short_circuit_argument_evaluation() {
    // The failing first argument keeps arrayPush from running at all.
    let source = "let a = []; len(arrayPush(a, boom), arrayPush(a, 1)); len(a)";
    assert_eq!(run_err(source), "identifier not found: boom");
    assert_eq!(run("let a = []; let r = if (false) { arrayPush(a, 1) }; len(a)"),
               Value::Integer(0));
}

#[test]
fn call_arity_is_checked() {
    assert_eq!(run_err("fn(x) { x }(1, 2)"), "wrong number of arguments. got=2, want=1");
    assert_eq!(run_err("let add = fn(x, y) { x + y }; add(1)"),
               "wrong number of arguments. got=1, want=2");
}

#[test]
fn builtin_len() {
    assert_eq!(run("len(\"\")"), Value::Integer(0));
    assert_eq!(run("len(\"hello\")"), Value::Integer(5));
    assert_eq!(run("len(\"héllo\")"), Value::Integer(5));
    assert_eq!(run("len([1, 2, 3])"), Value::Integer(3));
    assert_eq!(run("len([])"), Value::Integer(0));
    assert_eq!(run_err("len(1)"), "argument to `len` not supported, got INTEGER");
    assert_eq!(run_err("len(\"a\", \"b\")"), "wrong number of arguments. got=2, want=1");
}

#[test]
fn builtin_first_and_last() {
    assert_eq!(run("first([3, 2, 1])"), Value::Integer(3));
    assert_eq!(run("last([3, 2, 1])"), Value::Integer(1));
    assert_eq!(run("first(\"abc\")"), Value::from("a"));
    assert_eq!(run("last(\"abc\")"), Value::from("c"));
    // Empty collections yield null, like out-of-range indexing.
    assert_eq!(run("first([])"), Value::Null);
    assert_eq!(run("last([])"), Value::Null);
    assert_eq!(run("first(\"\")"), Value::Null);
    assert_eq!(run("last(\"\")"), Value::Null);
    assert_eq!(run_err("first(1)"), "argument to `first` not supported, got INTEGER");
    assert_eq!(run_err("last(true)"), "argument to `last` not supported, got BOOLEAN");
}

#[test]
fn builtin_array_push_type_check() {
    assert_eq!(run_err("arrayPush(1, 2)"), "argument to `arrayPush` not supported, got INTEGER");
    assert_eq!(run_err("arrayPush([1])"), "wrong number of arguments. got=1, want=2");
}

#[test]
fn builtin_print_writes_display_forms() {
    assert_eq!(run_capturing("print(1, \"a\", true)"), "1atrue\n");
    assert_eq!(run_capturing("print()"), "\n");
    assert_eq!(run_capturing("print([1, 2], \" and \", {\"k\": 1})"), "[1, 2] and {k: 1}\n");
    assert_eq!(run("print(5)"), Value::Null);
}

#[test]
fn builtins_are_first_class_values() {
    assert_eq!(run("let f = len; f([1, 2, 3])"), Value::Integer(3));
    assert_eq!(run("len == len"), Value::Bool(true));
    assert_eq!(run("len == first"), Value::Bool(false));
    // A let binding shadows the builtin of the same name.
    assert_eq!(run("let len = 5; len"), Value::Integer(5));
}

#[test]
fn negation_does_not_mutate_the_operand() {
    assert_eq!(run("let x = 5; let y = -x; x"), Value::Integer(5));
}

#[test]
fn function_values_render_their_definition() {
    assert_eq!(run("fn(x) { x }").to_string(), "fn(x) { x }");
    assert_eq!(run("len").to_string(), "builtin function");
}
