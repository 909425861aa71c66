// Error reporting: the first syntax error wins and carries its position

use cmtree::Parser;

#[test]
fn test_declaration_error_cites_the_unexpected_token() {
    let error = Parser::new("Program P { int x y; }").parse().unwrap_err();

    assert_eq!(error.message, "Expected ';' or '[' in variable declaration");
    assert_eq!((error.location.line, error.location.column), (1, 19));
    assert_eq!(
        error.to_string(),
        "SYNTAX ERROR at Line 1, Col 19: Expected ';' or '[' in variable declaration"
    );
}

#[test]
fn test_incomplete_expression_fails_in_factor() {
    let error = Parser::new("Program P { int x; x = 1 + ; }")
        .parse()
        .unwrap_err();

    assert_eq!(error.message, "Expected '(', identifier, or number");
    assert_eq!((error.location.line, error.location.column), (1, 28));
}

#[test]
fn test_first_error_wins() {
    // Two independent problems: the missing ';' on line 2 and the dangling
    // '+' on line 3. Only the first is reported.
    let source = "Program P {\n    int x y;\n    z = +\n}";
    let error = Parser::new(source).parse().unwrap_err();

    assert_eq!(error.message, "Expected ';' or '[' in variable declaration");
    assert_eq!((error.location.line, error.location.column), (2, 11));
}

#[test]
fn test_trailing_input_after_terminator() {
    // The else branch parses; the tokens after '.' are the error.
    let source = "Program P { int x; if (x) x = 1 else x = 2 } . int";
    let error = Parser::new(source).parse().unwrap_err();

    assert_eq!(error.message, "Expected end of file but found 'int'");
    assert_eq!((error.location.line, error.location.column), (1, 48));
}

#[test]
fn test_lexical_error_folds_into_syntax_error() {
    let error = Parser::new("Program P { int @; }").parse().unwrap_err();

    assert_eq!(error.message, "Expected ID but found '@'");
    assert_eq!((error.location.line, error.location.column), (1, 17));
}

#[test]
fn test_unterminated_comment_is_reported_at_the_opener() {
    let error = Parser::new("Program P { int x; } /* dangling")
        .parse()
        .unwrap_err();

    assert_eq!(error.message, "Expected . but found '/*'");
    assert_eq!((error.location.line, error.location.column), (1, 22));
}

#[test]
fn test_missing_program_name() {
    let error = Parser::new("Program { }").parse().unwrap_err();
    assert_eq!(error.message, "Expected ID but found '{'");
}

#[test]
fn test_empty_input() {
    let error = Parser::new("").parse().unwrap_err();
    assert_eq!(error.message, "Expected Program but found 'EOF'");
    assert_eq!((error.location.line, error.location.column), (1, 1));
}
