use banyan::{ast::Program, parse_source};

fn parse(input: &str) -> Program {
    parse_source(input).unwrap_or_else(|errors| panic!("parse failed for {input:?}: {errors:?}"))
}

fn assert_parse_fails(input: &str) {
    assert!(parse_source(input).is_err(),
            "expected parse errors for {input:?}");
}

#[test]
fn operator_precedence_renders_canonically() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("a <= b >= c", "((a <= b) >= c)"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (input, expected) in cases {
        assert_eq!(parse(input).to_string(), expected, "input: {input}");
    }
}

#[test]
fn statements_render_canonically() {
    let cases = [("let x = 5;", "let x = 5"),
                 ("let x = 5", "let x = 5"),
                 ("return 2 * 3;", "return (2 * 3)"),
                 ("let x = 1; let y = 2", "let x = 1; let y = 2"),
                 ("foo; bar;", "foo; bar")];

    for (input, expected) in cases {
        assert_eq!(parse(input).to_string(), expected, "input: {input}");
    }
}

#[test]
fn literals_and_composites_render_canonically() {
    let cases = [("true", "true"),
                 ("\"hello world\"", "\"hello world\""),
                 ("[]", "[]"),
                 ("[1, 2 * 2]", "[1, (2 * 2)]"),
                 ("{}", "{}"),
                 ("{\"one\": 1, 2: true}", "{\"one\": 1, 2: true}"),
                 ("if (x < y) { x }", "if ((x < y)) { x }"),
                 ("if (x < y) { x } else { y }", "if ((x < y)) { x } else { y }"),
                 ("fn() {}", "fn() { }"),
                 ("fn(x, y) { x + y; }", "fn(x, y) { (x + y) }")];

    for (input, expected) in cases {
        assert_eq!(parse(input).to_string(), expected, "input: {input}");
    }
}

#[test]
fn let_statement_structure() {
    use banyan::ast::{Expr, Statement};

    let program = parse("let answer = 42;");
    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.statements[0],
               Statement::Let { name:  "answer".to_string(),
                                value: Expr::IntegerLiteral { value: 42 }, });
}

#[test]
fn hash_literal_preserves_pair_order() {
    use banyan::ast::{Expr, Statement};

    let program = parse("{\"b\": 2, \"a\": 1}");
    let Statement::Expression { expr: Expr::HashLiteral { pairs } } = &program.statements[0]
    else {
        panic!("expected a hash literal statement");
    };

    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].0, Expr::StringLiteral { value: "b".to_string() });
    assert_eq!(pairs[1].0, Expr::StringLiteral { value: "a".to_string() });
}

#[test]
fn canonical_rendering_reparses_to_itself() {
    let programs = ["let x = 1 + 2 * 3; if (x > 5) { print(x) } else { print(0) }",
                    "let apply = fn(f, x) { f(x) }; apply(fn(y) { y * y }, 4)",
                    "let h = {\"a\": 1, 2: true}; [1, 2, 3][0]",
                    "return -a * b + c",
                    "let s = \"hi\"; s + \"!\"",
                    "fn(a) { if (a <= 0) { return [] } [a, -a] }"];

    for source in programs {
        let first = parse(source).to_string();
        let second = parse(&first).to_string();
        assert_eq!(first, second, "source: {source}");
    }
}

#[test]
fn syntax_errors_are_collected_not_thrown() {
    assert_parse_fails("let x 5;");
    assert_parse_fails("let = 3");
    assert_parse_fails("5 +");
    assert_parse_fails("let x = ;");
    assert_parse_fails("if (x { 1 }");
    assert_parse_fails("fn(a, { a }");
    assert_parse_fails("[1, 2");
    assert_parse_fails("{\"a\" 1}");
}

#[test]
fn lexer_errors_surface_as_parse_errors() {
    assert_parse_fails("let x = 1 ~ 2");
    // One more digit than i64::MAX has.
    assert_parse_fails("92233720368547758070");
}

#[test]
fn error_list_can_hold_several_entries() {
    let errors = parse_source("let x 5; let = 3").unwrap_err();
    assert!(errors.len() >= 2, "got: {errors:?}");
}

#[test]
fn no_prefix_rule_error_names_the_token() {
    let errors = parse_source("let x = ;").unwrap_err();
    let rendered = errors.iter().map(ToString::to_string).collect::<Vec<_>>();
    assert!(rendered.iter().any(|e| e.contains("no prefix parse function")),
            "got: {rendered:?}");
}

#[test]
fn parse_errors_report_lines() {
    let errors = parse_source("let a = 1\nlet b 2").unwrap_err();
    assert!(errors[0].to_string().contains("line 2"), "got: {errors:?}");
}
