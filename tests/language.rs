use std::fs;

use capuchin::{
    eval_source, run_script,
    interpreter::value::{core::Value, environment::Environment},
};

fn eval(source: &str) -> Value {
    let env = Environment::new();
    eval_source(source, &env).unwrap_or_else(|e| panic!("parse failed for {source:?}:\n{e}"))
                             .unwrap_or_else(|| panic!("no value produced for {source:?}"))
}

fn assert_integer(source: &str, expected: i64) {
    assert_eq!(eval(source), Value::Integer(expected), "source: {source}");
}

fn assert_boolean(source: &str, expected: bool) {
    assert_eq!(eval(source), Value::Boolean(expected), "source: {source}");
}

fn assert_null(source: &str) {
    assert_eq!(eval(source), Value::Null, "source: {source}");
}

fn assert_inspect(source: &str, expected: &str) {
    assert_eq!(eval(source).to_string(), expected, "source: {source}");
}

fn assert_error(source: &str, message: &str) {
    match eval(source) {
        Value::Error(error) => assert_eq!(error.to_string(), message, "source: {source}"),
        other => panic!("expected error for {source:?}, got {other:?}"),
    }
}

#[test]
fn integer_arithmetic() {
    assert_integer("5", 5);
    assert_integer("-5", -5);
    assert_integer("5 + 5 + 5 + 5 - 10", 10);
    assert_integer("2 * 2 * 2 * 2 * 2", 32);
    assert_integer("-50 + 100 + -50", 0);
    assert_integer("5 * 2 + 10", 20);
    assert_integer("5 + 2 * 10", 25);
    assert_integer("20 + 2 * -10", 0);
    assert_integer("50 / 2 * 2 + 10", 60);
    assert_integer("2 * (5 + 10)", 30);
    assert_integer("3 * 3 * 3 + 10", 37);
    assert_integer("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50);
}

#[test]
fn integer_arithmetic_wraps_on_overflow() {
    assert_integer("9223372036854775807 + 1", i64::MIN);
    assert_integer("-9223372036854775807 - 2", i64::MAX);
}

#[test]
fn division_by_zero_is_diagnosed() {
    assert_error("1 / 0", "division by zero");
    assert_error("let x = 10; x / (5 - 5)", "division by zero");
}

#[test]
fn boolean_expressions() {
    assert_boolean("true", true);
    assert_boolean("false", false);
    assert_boolean("1 < 2", true);
    assert_boolean("1 > 2", false);
    assert_boolean("1 == 1", true);
    assert_boolean("1 != 1", false);
    assert_boolean("1 == 2", false);
    assert_boolean("true == true", true);
    assert_boolean("false == false", true);
    assert_boolean("true == false", false);
    assert_boolean("true != false", true);
    assert_boolean("(1 < 2) == true", true);
    assert_boolean("(1 > 2) == true", false);
}

#[test]
fn bang_operator_follows_truthiness() {
    assert_boolean("!true", false);
    assert_boolean("!false", true);
    assert_boolean("!5", false);
    assert_boolean("!!true", true);
    assert_boolean("!!5", true);
    // Zero is a value like any other, so it is truthy.
    assert_boolean("!0", false);
    // The only way to spell null in source is an if with no taken branch.
    assert_boolean("!if (false) { 10 }", true);
}

#[test]
fn if_else_expressions() {
    assert_integer("if (true) { 10 }", 10);
    assert_integer("if (1) { 10 }", 10);
    assert_integer("if (1 < 2) { 10 }", 10);
    assert_integer("if (1 < 2) { 10 } else { 20 }", 10);
    assert_integer("if (1 > 2) { 10 } else { 20 }", 20);
    assert_null("if (false) { 10 }");
    assert_null("if (1 > 2) { 10 }");
}

#[test]
fn let_statements_and_shadowing() {
    assert_integer("let a = 5; a;", 5);
    assert_integer("let a = 5 * 5; a;", 25);
    assert_integer("let a = 5; let b = a; b;", 5);
    assert_integer("let a = 5; let b = a; let c = a + b + 5; c;", 15);
    assert_integer("let x = 5 * 5 + 10; x;", 35);
    // An inner scope shadows without touching the outer binding.
    assert_integer("let x = 1; let f = fn() { let x = 2; x }; f() + x", 3);
}

#[test]
fn return_statements_unwind() {
    assert_integer("return 10;", 10);
    assert_integer("return 10; 9;", 10);
    assert_integer("return 2 * 5; 9;", 10);
    assert_integer("9; return 2 * 5; 9;", 10);
    assert_integer("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10);
}

#[test]
fn returns_stop_at_function_boundaries() {
    assert_integer("let f = fn() { return 10; 5 }; f();", 10);
    assert_integer("let f = fn() { return 10; }; f() + 1;", 11);
    // The inner return ends only the inner call.
    assert_integer("let inner = fn() { return 2; }; let outer = fn() { inner() + 1 }; outer();",
                   3);
}

#[test]
fn functions_and_calls() {
    assert_integer("let identity = fn(x) { x; }; identity(5);", 5);
    assert_integer("let identity = fn(x) { return x; }; identity(5);", 5);
    assert_integer("let double = fn(x) { x * 2; }; double(5);", 10);
    assert_integer("let f = fn(a, b) { a + b; }; f(2, 3);", 5);
    assert_integer("let add = fn(a, b) { a + b; }; add(5 + 5, add(5, 5));", 20);
    assert_integer("fn(x) { x; }(5)", 5);
}

#[test]
fn function_values_render_like_source() {
    assert_inspect("fn(x) { x + 2; }", "fn(x) {\n(x + 2)\n}");
}

#[test]
fn closures_capture_their_definition_environment() {
    assert_integer("let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(3);",
                   5);
    assert_integer("let newAdder = fn(x) { fn(y) { x + y } }; newAdder(10)(7);", 17);
    // The captured scope stays alive after the defining call returned.
    assert_integer("let make = fn() { let secret = 41; fn() { secret + 1 } }; make()();",
                   42);
}

#[test]
fn higher_order_functions() {
    assert_integer("let apply = fn(f, x) { f(x) }; apply(fn(n) { n * n }, 9);", 81);
    assert_integer("let compose = fn(f, g) { fn(x) { g(f(x)) } };
                    let inc = fn(n) { n + 1 };
                    compose(inc, inc)(40);",
                   42);
}

#[test]
fn recursion_resolves_through_the_environment() {
    assert_integer("let fact = fn(n) { if (n < 1) { 1 } else { n * fact(n - 1) } }; fact(5);",
                   120);
    assert_integer("let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } }; fib(10);",
                   55);
}

#[test]
fn call_arity_is_lax() {
    // Excess arguments are ignored.
    assert_integer("let f = fn(a) { a }; f(1, 2, 3);", 1);
    // Missing parameters stay unbound and surface on use.
    assert_error("let f = fn(a, b) { b }; f(1);", "identifier not found: b");
}

#[test]
fn string_literals_and_concatenation() {
    assert_inspect(r#""Hello World!""#, "Hello World!");
    assert_inspect(r#""Hello" + " " + "World""#, "Hello World");
    assert_integer(r#"len("Hello World")"#, 11);
    assert_integer(r#"len("")"#, 0);
}

#[test]
fn string_operators_beyond_concat_are_unknown() {
    assert_error(r#""a" - "b""#, "unknown operator: STRING - STRING");
    assert_error(r#""a" == "a" "#, "unknown operator: STRING == STRING");
}

#[test]
fn runtime_error_canon() {
    assert_error("foobar;", "identifier not found: foobar");
    assert_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("-true", "unknown operator: -BOOLEAN");
    assert_error("true + false;", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                 "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("5(3)", "not a function: INTEGER");
    assert_error(r#""no"(1)"#, "not a function: STRING");
}

#[test]
fn errors_short_circuit_before_binding_or_calling() {
    // The let never binds, so the second statement fails on lookup.
    assert_error("let x = foobar; x;", "identifier not found: foobar");
    // Argument evaluation stops at the first error.
    assert_error("let f = fn(a, b) { a + b }; f(missing, 1 / 0);",
                 "identifier not found: missing");
}

#[test]
fn mixed_type_equality_is_false_not_an_error() {
    assert_boolean("5 == true", false);
    assert_boolean("5 != true", true);
    assert_boolean("if (false) { 1 } == if (false) { 2 }", true);
}

#[test]
fn array_literals_and_indexing() {
    assert_inspect("[1, 2 * 2, 3 + 3]", "[1, 4, 6]");
    assert_integer("[1, 2, 3][0]", 1);
    assert_integer("[1, 2, 3][1]", 2);
    assert_integer("[1, 2, 3][2]", 3);
    assert_integer("let i = 0; [1][i];", 1);
    assert_integer("[1, 2, 3][1 + 1];", 3);
    assert_integer("let myArray = [1, 2, 3]; myArray[2];", 3);
    assert_integer("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", 6);
    assert_integer("let myArray = [1, 2, 3]; let i = myArray[0]; myArray[i]", 2);
    assert_null("[1, 2, 3][3]");
    assert_null("[1, 2, 3][-1]");
}

#[test]
fn array_builtins() {
    assert_integer("len([1, 2, 3])", 3);
    assert_integer("len([])", 0);
    assert_integer("first([1, 2, 3])", 1);
    assert_null("first([])");
    assert_integer("last([1, 2, 3])", 3);
    assert_null("last([])");
    assert_inspect("rest([1, 2, 3])", "[2, 3]");
    assert_inspect("rest(rest([1, 2, 3]))", "[3]");
    assert_null("rest([])");
    assert_inspect("push([1, 2], 3)", "[1, 2, 3]");
    assert_inspect("push([], 1)", "[1]");
    // push builds a new array; the original is untouched.
    assert_inspect("let a = [1]; push(a, 2); a", "[1]");
}

#[test]
fn builtin_argument_errors() {
    assert_error("len(1)", "argument to `len` not supported, got INTEGER");
    assert_error(r#"len("one", "two")"#, "wrong number of arguments. got=2, want=1");
    assert_error("first(1)", "argument to `first` must be ARRAY, got INTEGER");
    assert_error("last(1)", "argument to `last` must be ARRAY, got INTEGER");
    assert_error(r#"rest("abc")"#, "argument to `rest` must be ARRAY, got STRING");
    assert_error("push(1, 1)", "argument to `push` must be ARRAY, got INTEGER");
    assert_error("push([1])", "wrong number of arguments. got=1, want=2");
}

#[test]
fn bindings_shadow_builtins() {
    assert_integer("let len = fn(x) { 7 }; len([1, 2, 3])", 7);
}

#[test]
fn hash_literals_and_indexing() {
    assert_integer(r#"{"one": 1, "two": 2}["one"]"#, 1);
    assert_integer(r#"let key = "two"; {"one": 1, "two": 2}[key]"#, 2);
    assert_integer("{1: 10, 2: 20}[2]", 20);
    assert_integer("{true: 5, false: 6}[true]", 5);
    assert_integer(r#"{"a" + "b": 7}["ab"]"#, 7);
    assert_null(r#"{"one": 1}["missing"]"#);
    assert_null("{}[0]");
    assert_inspect(r#"{"one": 1}"#, "{one: 1}");
}

#[test]
fn hash_key_restrictions() {
    assert_error(r#"{"name": "capuchin"}[fn(x) { x }]"#, "unusable as hash key: FUNCTION");
    assert_error("{[1, 2]: 3}", "unusable as hash key: ARRAY");
}

#[test]
fn index_operator_requires_a_collection() {
    assert_error("5[0]", "index operator not supported: INTEGER");
    assert_error("true[0]", "index operator not supported: BOOLEAN");
}

#[test]
fn map_and_reduce_written_in_the_language() {
    let map = "
        let map = fn(arr, f) {
            let iter = fn(arr, accumulated) {
                if (len(arr) == 0) {
                    accumulated
                } else {
                    iter(rest(arr), push(accumulated, f(first(arr))))
                }
            };
            iter(arr, []);
        };
        let double = fn(x) { x * 2 };
        map([1, 2, 3, 4], double);
    ";
    assert_inspect(map, "[2, 4, 6, 8]");

    let reduce = "
        let reduce = fn(arr, initial, f) {
            let iter = fn(arr, result) {
                if (len(arr) == 0) {
                    result
                } else {
                    iter(rest(arr), f(result, first(arr)))
                }
            };
            iter(arr, initial);
        };
        reduce([1, 2, 3, 4, 5], 0, fn(sum, el) { sum + el });
    ";
    assert_integer(reduce, 15);
}

#[test]
fn every_builtin_is_resolvable() {
    use capuchin::interpreter::evaluator::builtin::{lookup, BUILTIN_FUNCTIONS};

    for name in BUILTIN_FUNCTIONS {
        assert!(lookup(name).is_some(), "builtin {name} missing from lookup");
    }
}

#[test]
fn repl_reports_parse_errors_and_keeps_going() {
    let input = b"let x 5;\nlet y = 3; y + y\n" as &[u8];
    let mut output = Vec::new();

    capuchin::repl::start(input, &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains(" parse errors:"));
    assert!(output.contains("\texpected next token to be =, got INT instead."));
    // The session survives the bad line; the next one still evaluates.
    assert!(output.contains("6\n"));
}

#[test]
fn environment_persists_across_eval_calls() {
    let env = Environment::new();

    assert_eq!(eval_source("let counter = fn(x) { x + 1 };", &env).unwrap(), None);
    assert_eq!(eval_source("let start = counter(0);", &env).unwrap(), None);
    assert_eq!(eval_source("counter(start)", &env).unwrap(),
               Some(Value::Integer(2)));
}

#[test]
fn example_script_runs() {
    let contents = fs::read_to_string("tests/example.cap").expect("missing file");
    if let Err(e) = run_script(&contents, false) {
        panic!("example script failed: {e}");
    }
}
