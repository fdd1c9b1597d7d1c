use super::*;
use crate::config::{GrammarVersion, PssConfig};
use rstest::rstest;

fn parse_with(
    text: &str,
    mode: PredictionMode,
    strategy: ErrorStrategy,
) -> Result<Parse, ParseAbort> {
    let mut grammar = PssGrammar::with_config(text, &PssConfig::default());
    grammar.set_prediction_mode(mode);
    grammar.set_error_strategy(strategy);
    grammar.parse()
}

fn parse_ok(text: &str) -> SourceFile {
    let parse = parse_with(text, PredictionMode::Ll, ErrorStrategy::Recover)
        .expect("parse should not abort");
    assert!(parse.ok(), "errors: {:?}", parse.errors);
    SourceFile::cast(parse.syntax()).expect("root is a source file")
}

fn only_component(file: &SourceFile) -> Component {
    match file.members().next() {
        Some(Member::Component(comp)) => comp,
        other => panic!("expected a component, got {:?}", other),
    }
}

// =============================================================================
// LOSSLESS
// =============================================================================

#[rstest]
#[case("component C { }")]
#[case("// header\npackage p {\n  component C : base_c<int> {\n    rand bit[4] x; // trailing\n  }\n}\n")]
#[case("component C { exec body { a.b[2] += f(1, g(2)); } }")]
#[case("component C { int x }")]
#[case("component C { 42; ??? }")]
#[case("component C { function void f() { if (")]
#[case("/*\n * header\n */\ncomponent C { /* c */ int x = /* v */ 5; }")]
fn test_lossless(#[case] text: &str) {
    let parse = parse_with(text, PredictionMode::Ll, ErrorStrategy::Recover)
        .expect("parse should not abort");
    assert_eq!(parse.syntax().text().to_string(), text);
}

// =============================================================================
// DECLARATIONS
// =============================================================================

#[test]
fn test_component_header() {
    let file = parse_ok("pure component C<type T, int N = 4> : base_c<T> { }");
    let comp = only_component(&file);

    assert!(comp.is_pure());
    assert_eq!(comp.name().map(|n| n.text()), Some("C".to_string()));

    let params: Vec<_> = comp.template_params().expect("template params").params().collect();
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].param_type(), Some("type".to_string()));
    assert_eq!(params[0].default_value(), None);
    assert_eq!(params[1].param_type(), Some("int".to_string()));
    assert_eq!(params[1].default_value(), Some("4".to_string()));

    let super_type = comp.super_type().expect("super type");
    assert_eq!(super_type.simple_name(), Some("base_c".to_string()));
    assert_eq!(super_type.text(), "base_c<T>");
}

#[test]
fn test_field_declarators() {
    let file = parse_ok("component C { rand bit[4] a, b[2] = 3; }");
    let comp = only_component(&file);

    let Some(Member::Field(field)) = comp.members().next() else {
        panic!("expected a field");
    };
    assert!(field.is_rand());
    assert!(!field.is_static());

    let ty = field.type_ref().expect("type");
    assert_eq!(ty.text(), "bit[4]");
    assert_eq!(ty.builtin(), Some(SyntaxKind::BIT_KW));
    assert_eq!(ty.width(), Some("4".to_string()));

    let declarators: Vec<_> = field.declarators().collect();
    assert_eq!(declarators.len(), 2);
    assert_eq!(declarators[0].name().map(|n| n.text()), Some("a".to_string()));
    assert!(declarators[0].initializer().is_none());
    assert_eq!(
        declarators[1].array_dim().and_then(|d| d.size()),
        Some("2".to_string())
    );
    assert_eq!(
        declarators[1].initializer().and_then(|i| i.value()),
        Some("3".to_string())
    );
}

#[test]
fn test_function_signature() {
    let file = parse_ok("target function int add(int a, int b = 2) { return a + b; }");
    let Some(Member::Function(func)) = file.members().next() else {
        panic!("expected a function");
    };

    assert_eq!(func.platform(), Some(SyntaxKind::TARGET_KW));
    assert_eq!(func.name().map(|n| n.text()), Some("add".to_string()));
    assert_eq!(func.return_type().map(|t| t.text()), Some("int".to_string()));

    let params: Vec<_> = func.params().collect();
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].param_type(), Some("int".to_string()));
    assert_eq!(params[1].default_value(), Some("2".to_string()));
    assert!(func.body().is_some());
}

#[test]
fn test_void_function_has_no_return_type() {
    let file = parse_ok("function void f();");
    let Some(Member::Function(func)) = file.members().next() else {
        panic!("expected a function");
    };
    assert!(func.return_type().is_none());
    assert!(func.body().is_none());
}

#[test]
fn test_imported_prototype_reference() {
    let file = parse_ok("package p { import function q::f; }");
    let Some(Member::Package(pkg)) = file.members().next() else {
        panic!("expected a package");
    };
    let Some(Member::Function(func)) = pkg.body().and_then(|b| b.members().next()) else {
        panic!("expected a function");
    };
    assert!(func.is_import());
    assert_eq!(func.name().map(|n| n.text()), Some("q::f".to_string()));
    assert!(func.return_type().is_none());
}

#[rstest]
#[case("component C { a<b<c>> x; }")]
#[case("component C { reg_c<bit[32], READWRITE, 32> r; }")]
#[case("component C { exec body { x = a >> 2; } }")]
#[case("component C { pool [4] buf_s p; }")]
#[case("component C { constraint { x < 4; } activity { do A; } }")]
#[case("extend enum e { B }")]
#[case("component C { exec body C = \"\"\"\n  ld r0, {{x}}\n\"\"\"; }")]
#[case("component C { exec body { match (x) { [1..2]: f(); default: g(); } } }")]
#[case("component C { exec body { repeat (i : 4) { f(i); } while (x) x -= 1; } }")]
fn test_parses_cleanly(#[case] text: &str) {
    parse_ok(text);
}

// =============================================================================
// PREDICTION AND ERROR STRATEGY
// =============================================================================

const DOTTED_ASSIGN: &str = "component C { exec body { a.b = 1; } }";

#[test]
fn test_sll_bail_aborts_on_ambiguous_statement() {
    let result = parse_with(DOTTED_ASSIGN, PredictionMode::Sll, ErrorStrategy::Bail);
    assert!(matches!(result, Err(ParseAbort::Ambiguity(_))), "{:?}", result);
}

#[test]
fn test_ll_resolves_ambiguous_statement() {
    let parse = parse_with(DOTTED_ASSIGN, PredictionMode::Ll, ErrorStrategy::Bail)
        .expect("full lookahead decides the statement");
    let file = SourceFile::cast(parse.syntax()).expect("source file");
    let assign = file
        .descendants::<AssignStmt>()
        .next()
        .expect("an assignment");
    assert_eq!(assign.target().map(|t| t.text()), Some("a.b".to_string()));
    assert_eq!(assign.op(), Some(SyntaxKind::EQ));
}

#[test]
fn test_sll_handles_two_token_statements() {
    let text = "component C { exec body { x = 1; f(2); int y; } }";
    let parse = parse_with(text, PredictionMode::Sll, ErrorStrategy::Bail)
        .expect("no ambiguity in two-token statements");
    assert!(parse.ok());
}

#[test]
fn test_sll_recover_falls_back_to_scan() {
    let parse = parse_with(DOTTED_ASSIGN, PredictionMode::Sll, ErrorStrategy::Recover)
        .expect("recovering parse does not abort on ambiguity");
    assert!(parse.ok(), "errors: {:?}", parse.errors);
}

#[test]
fn test_bail_aborts_on_first_error() {
    let result = parse_with("component C { int x }", PredictionMode::Ll, ErrorStrategy::Bail);
    match result {
        Err(ParseAbort::Syntax(err)) => assert_eq!(err.code, ErrorCode::E0201),
        other => panic!("expected a syntax abort, got {:?}", other),
    }
}

#[test]
fn test_recover_keeps_following_members() {
    let parse = parse_with(
        "component C { int x } component D { }",
        PredictionMode::Ll,
        ErrorStrategy::Recover,
    )
    .expect("recovering parse");

    assert_eq!(parse.errors.len(), 1);
    assert_eq!(parse.errors[0].code, ErrorCode::E0201);

    let file = SourceFile::cast(parse.syntax()).expect("source file");
    let names: Vec<_> = file
        .members()
        .filter_map(|m| match m {
            Member::Component(c) => c.name().map(|n| n.text()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["C", "D"]);
}

#[test]
fn test_recover_wraps_junk_in_error_node() {
    let parse = parse_with(
        "component C { 42; int x; }",
        PredictionMode::Ll,
        ErrorStrategy::Recover,
    )
    .expect("recovering parse");

    assert_eq!(parse.errors.len(), 1);
    assert_eq!(parse.errors[0].code, ErrorCode::E0303);

    let root = parse.syntax();
    let error = root
        .descendants()
        .find(|n| n.kind() == SyntaxKind::ERROR)
        .expect("an ERROR node");
    assert_eq!(error.text().to_string(), "42");

    let file = SourceFile::cast(root).expect("source file");
    assert_eq!(file.descendants::<FieldDecl>().count(), 1);
}

#[test]
fn test_error_limit_aborts_recovery() {
    let mut config = PssConfig::default();
    config.grammar.error_limit = 2;

    let mut grammar = PssGrammar::with_config("component C { 1; 2; 3; 4; }", &config);
    grammar.set_prediction_mode(PredictionMode::Ll);
    grammar.set_error_strategy(ErrorStrategy::Recover);

    assert_eq!(grammar.parse(), Err(ParseAbort::ErrorLimit(3)));
}

#[test]
fn test_block_comments_parse_on_the_fast_path() {
    let text = "/*\n * Copyright header\n */\ncomponent C {\n    /* field */ int x = /* v */ 5;\n    /**/ bit y;\n}";
    let parse = parse_with(text, PredictionMode::Sll, ErrorStrategy::Bail).expect("no abort");
    assert!(parse.ok(), "errors: {:?}", parse.errors);
}

fn nested_parens(depth: usize) -> String {
    format!(
        "component C {{ exec body {{ x = {}1{}; }} }}",
        "(".repeat(depth),
        ")".repeat(depth)
    )
}

#[rstest]
#[case(ErrorStrategy::Bail)]
#[case(ErrorStrategy::Recover)]
fn test_nesting_past_max_depth_aborts(#[case] strategy: ErrorStrategy) {
    let text = nested_parens(20_000);
    let result = parse_with(&text, PredictionMode::Ll, strategy);
    assert_eq!(result, Err(ParseAbort::TooDeep(512)));
}

#[test]
fn test_max_depth_follows_config() {
    let text = nested_parens(8);

    let mut config = PssConfig::default();
    config.grammar.max_depth = 10;
    assert_eq!(
        PssGrammar::with_config(&text, &config).parse(),
        Err(ParseAbort::TooDeep(10))
    );

    config.grammar.max_depth = 64;
    let parse = PssGrammar::with_config(&text, &config).parse().expect("within the limit");
    assert!(parse.ok(), "errors: {:?}", parse.errors);
}

#[test]
fn test_adapter_defaults() {
    let grammar = PssGrammar::with_config("", &PssConfig::default());
    assert_eq!(grammar.prediction_mode(), PredictionMode::Ll);
    assert_eq!(grammar.error_strategy(), ErrorStrategy::Recover);
}

#[test]
fn test_monitor_keyword_follows_version() {
    let text = "component C { monitor m; }";

    let mut config = PssConfig::default();
    config.grammar.version = GrammarVersion::V2_1;
    let parse = PssGrammar::with_config(text, &config)
        .parse()
        .expect("recovering parse");
    assert!(parse.ok(), "`monitor` is a type name before 3.0: {:?}", parse.errors);

    config.grammar.version = GrammarVersion::V3_0;
    let parse = PssGrammar::with_config(text, &config)
        .parse()
        .expect("recovering parse");
    assert!(!parse.ok(), "`monitor` starts a declaration in 3.0");
}

#[test]
fn test_parse_is_repeatable() {
    let mut grammar = PssGrammar::with_config(DOTTED_ASSIGN, &PssConfig::default());
    let first = grammar.parse().expect("first parse");
    let second = grammar.parse().expect("second parse");
    assert_eq!(first, second);
}
