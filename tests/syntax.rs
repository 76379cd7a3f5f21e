use capuchin::{
    interpreter::lexer::{Lexer, Token},
    parse,
};

fn assert_canonical(source: &str, expected: &str) {
    let program = parse(source).unwrap_or_else(|e| panic!("parse failed for {source:?}:\n{e}"));
    assert_eq!(program.to_string(), expected, "source: {source}");
}

fn assert_round_trip(source: &str) {
    let program = parse(source).unwrap_or_else(|e| panic!("parse failed for {source:?}:\n{e}"));
    let canonical = program.to_string();
    let reparsed =
        parse(&canonical).unwrap_or_else(|e| panic!("reparse failed for {canonical:?}:\n{e}"));
    assert_eq!(program, reparsed, "canonical form: {canonical}");
}

fn assert_errors(source: &str, expected: &[&str]) {
    let errors = parse(source).expect_err("expected parse errors");
    let rendered = errors.0.iter().map(ToString::to_string).collect::<Vec<_>>();
    assert_eq!(rendered, expected, "source: {source}");
}

#[test]
fn precedence_is_canonicalized() {
    assert_canonical("-a * b", "((-a) * b)");
    assert_canonical("!-a", "(!(-a))");
    assert_canonical("a + b + c", "((a + b) + c)");
    assert_canonical("a + b - c", "((a + b) - c)");
    assert_canonical("a * b * c", "((a * b) * c)");
    assert_canonical("a * b / c", "((a * b) / c)");
    assert_canonical("a + b / c", "(a + (b / c))");
    assert_canonical("a + b * c", "(a + (b * c))");
    assert_canonical("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)");
    assert_canonical("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)");
    assert_canonical("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))");
    assert_canonical("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))");
    assert_canonical("a == b < c", "(a == (b < c))");
    assert_canonical("3 + 4 * 5 == 3 * 1 + 4 * 5",
                     "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))");
}

#[test]
fn grouping_resets_precedence() {
    assert_canonical("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)");
    assert_canonical("(5 + 5) * 2", "((5 + 5) * 2)");
    assert_canonical("2 / (5 + 5)", "(2 / (5 + 5))");
    assert_canonical("-(5 + 5)", "(-(5 + 5))");
    assert_canonical("!(true == true)", "(!(true == true))");
}

#[test]
fn calls_bind_tighter_than_operators() {
    assert_canonical("a + add(b * c) + d", "((a + add((b * c))) + d)");
    assert_canonical("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                     "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))");
    assert_canonical("add(a + b + c * d / f + g)",
                     "add((((a + b) + ((c * d) / f)) + g))");
}

#[test]
fn indexing_binds_tightest() {
    assert_canonical("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)");
    assert_canonical("add(a * b[2], b[1], 2 * [1, 2][1])",
                     "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))");
    assert_canonical("myArray[1 + 1]", "(myArray[(1 + 1)])");
}

#[test]
fn statements_and_literals_are_reconstructed() {
    assert_canonical("let x = 5;", "let x = 5;");
    assert_canonical("let x = 5", "let x = 5;");
    assert_canonical("return 2 * 3;", "return (2 * 3);");
    assert_canonical("true;false", "truefalse");
    assert_canonical(r#""hello world""#, "hello world");
    assert_canonical("[1, 2 * 2]", "[1, (2 * 2)]");
    assert_canonical(r#"{"one": 1, "two": 2 * 2}"#, "{one:1, two:(2 * 2)}");
    assert_canonical("{}", "{}");
}

#[test]
fn keywords_reattach_without_parentheses() {
    assert_canonical("if (x < y) { x } else { y }", "if(x < y) x else y");
    assert_canonical("if (x < y) { x }", "if(x < y) x");
    assert_canonical("fn(x, y) { x + y }", "fn(x, y) (x + y)");
    assert_canonical("fn() { 1; 2 }", "fn() 12");
    assert_canonical("add(1, 2 * 3, 4 + 5)", "add(1, (2 * 3), (4 + 5))");
}

#[test]
fn token_literals_track_the_introducing_token() {
    let program = parse("let x = 5; return x;").unwrap();

    assert_eq!(program.token_literal(), "let");
    assert_eq!(program.statements[1].token_literal(), "return");
    assert_eq!(parse("foo;").unwrap().token_literal(), "foo");
}

#[test]
fn canonical_forms_reparse_to_equal_programs() {
    assert_round_trip("let x = 5 * 5 + 10;");
    assert_round_trip("a + b * c + d / e - f");
    assert_round_trip("-a * b; !!c");
    assert_round_trip("return 1 + 2 * 3;");
    assert_round_trip("add(a, b[1], c * d)");
    assert_round_trip("[1, 2 + 3, add(4)][0]");
    assert_round_trip("{1: 2, 3: 4 + 5}[3]");
}

#[test]
fn expectation_errors_use_the_canonical_message() {
    assert_errors("let x 5;",
                  &["expected next token to be =, got INT instead."]);
    assert_errors("let x = 5; let y 6;",
                  &["expected next token to be =, got INT instead."]);
}

#[test]
fn missing_prefix_forms_are_reported() {
    assert_errors("5 +", &["no prefix parse function for EOF found"]);
    assert_errors("* 5", &["no prefix parse function for * found"]);
}

#[test]
fn cascading_errors_are_all_collected() {
    assert_errors("let = 5;",
                  &["expected next token to be IDENT, got = instead.",
                    "no prefix parse function for = found"]);
}

#[test]
fn unlexable_bytes_surface_as_illegal_tokens() {
    assert_errors("@", &["no prefix parse function for ILLEGAL found"]);
}

#[test]
fn oversized_integer_literals_are_reported() {
    assert_errors("92233720368547758071",
                  &["could not parse 92233720368547758071 as integer"]);
}

#[test]
fn lexing_is_total() {
    let mut lexer = Lexer::new("let @ $ \"unterminated…  ");
    let mut count = 0;
    loop {
        let token = lexer.next_token();
        count += 1;
        assert!(count < 64, "lexer failed to reach EOF");
        if token == Token::Eof {
            break;
        }
    }
    // EOF is sticky.
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn strings_have_no_escape_processing() {
    let mut lexer = Lexer::new(r#""a\nb""#);
    assert_eq!(lexer.next_token(), Token::Str("a\\nb".to_string()));
}

#[test]
fn two_character_operators_lex_greedily() {
    let mut lexer = Lexer::new("= == != ! <>");
    assert_eq!(lexer.next_token(), Token::Assign);
    assert_eq!(lexer.next_token(), Token::Eq);
    assert_eq!(lexer.next_token(), Token::NotEq);
    assert_eq!(lexer.next_token(), Token::Bang);
    assert_eq!(lexer.next_token(), Token::Lt);
    assert_eq!(lexer.next_token(), Token::Gt);
}

#[test]
fn keywords_are_distinguished_from_identifiers() {
    let mut lexer = Lexer::new("fn let letter truex return");
    assert_eq!(lexer.next_token(), Token::Function);
    assert_eq!(lexer.next_token(), Token::Let);
    assert_eq!(lexer.next_token(), Token::Ident("letter".to_string()));
    assert_eq!(lexer.next_token(), Token::Ident("truex".to_string()));
    assert_eq!(lexer.next_token(), Token::Return);
}
