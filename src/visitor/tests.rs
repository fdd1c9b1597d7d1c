use super::*;
use crate::config::PssConfig;
use crate::model::{AccessModifier, AssignOp, MetaData, MetaKind, Parameter, PssObject};
use crate::parser::{GrammarAdapter, PssGrammar, SyntaxKind};
use rowan::GreenNodeBuilder;
use rstest::rstest;

const URI: &str = "mem://test.pss";

fn syntax(text: &str) -> SyntaxNode {
    let parse = PssGrammar::with_config(text, &PssConfig::default())
        .parse()
        .expect("parse should not abort");
    assert!(parse.ok(), "errors: {:?}", parse.errors);
    parse.syntax()
}

fn model(text: &str) -> Vec<PssObject> {
    let mut visitor = ModelVisitor::new(URI);
    visitor.visit(&syntax(text)).expect("source file root");
    visitor.finish()
}

fn records(text: &str) -> Vec<MetaData> {
    let mut visitor = MetaVisitor::new(URI);
    visitor.visit(&syntax(text)).expect("source file root");
    visitor.finish()
}

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

fn param(name: &str, ty: &str, default: Option<&str>) -> Parameter {
    Parameter {
        name: some(name),
        param_type: some(ty),
        default: default.map(str::to_string),
    }
}

fn instance(name: &str, ty: &str) -> PssObject {
    PssObject::Instance {
        name: some(name),
        instance_type: some(ty),
        array_count: None,
        is_random: false,
        is_static_const: false,
        access_modifier: None,
        default_value: None,
    }
}

// =============================================================================
// COMPONENTS AND REGISTERS
// =============================================================================

#[test]
fn test_component_with_template_params() {
    let objects = model("pure component C<type T, int N = 4> : base_c { }");
    assert_eq!(
        objects,
        vec![PssObject::Component {
            name: some("C"),
            is_pure: true,
            template_params: vec![param("T", "type", None), param("N", "int", Some("4"))],
            super_spec: some("base_c"),
        }]
    );
}

#[test]
fn test_template_param_with_user_type_and_default() {
    let objects = model("component C<T name = int> { }");
    let PssObject::Component { template_params, .. } = &objects[0] else {
        panic!("expected a component");
    };
    assert_eq!(template_params, &vec![param("name", "T", Some("int"))]);
}

#[rstest]
#[case(
    "component R : reg_c<ctrl_s, READWRITE, 32> { }",
    Some("READWRITE"),
    Some("32"),
    Some("ctrl_s")
)]
#[case("component R : reg_c<bit[16]> { }", None, Some("16"), None)]
#[case("component R : reg_c<bit[16], READONLY, 8> { }", Some("READONLY"), Some("8"), None)]
#[case("component R : pkg::reg_c<ctrl_s> { }", None, None, Some("ctrl_s"))]
fn test_register_component_shape(
    #[case] text: &str,
    #[case] access_type: Option<&str>,
    #[case] register_length: Option<&str>,
    #[case] based_on_struct: Option<&str>,
) {
    assert_eq!(
        model(text),
        vec![PssObject::RegisterComponent {
            name: some("R"),
            access_type: access_type.map(str::to_string),
            register_length: register_length.map(str::to_string),
            based_on_struct: based_on_struct.map(str::to_string),
        }]
    );
}

#[test]
fn test_register_group_and_definitions() {
    let objects = model(
        "component G : reg_group_c<0x1000> {
            reg_c<bit[32], READONLY, 32> status;
            reg_c<bit[8]> data[4];
        }",
    );

    assert_eq!(
        objects,
        vec![
            PssObject::RegisterGroup {
                name: some("G"),
                base_address: some("0x1000"),
            },
            PssObject::RegisterDefinition {
                name: some("status"),
                access_type: some("READONLY"),
                register_length: some("32"),
                based_on_struct: None,
                array_count: None,
            },
            PssObject::RegisterDefinition {
                name: some("data"),
                access_type: None,
                register_length: some("8"),
                based_on_struct: None,
                array_count: some("4"),
            },
        ]
    );
}

#[test]
fn test_register_group_without_address() {
    assert_eq!(
        model("component G : reg_group_c { }"),
        vec![PssObject::RegisterGroup {
            name: some("G"),
            base_address: None,
        }]
    );
}

// =============================================================================
// FIELDS
// =============================================================================

#[test]
fn test_field_instances() {
    let objects = model(
        "component C {
            rand bit[4] x;
            static const int N = 4;
            const int K = 1;
            int a[2];
            private int p;
        }",
    );

    assert_eq!(objects.len(), 6);
    assert_eq!(
        objects[1],
        PssObject::Instance {
            name: some("x"),
            instance_type: some("bit[4]"),
            array_count: None,
            is_random: true,
            is_static_const: false,
            access_modifier: None,
            default_value: None,
        }
    );
    assert!(matches!(
        &objects[2],
        PssObject::Instance { is_static_const: true, default_value: Some(v), .. } if v == "4"
    ));
    // const alone is not static const
    assert!(matches!(&objects[3], PssObject::Instance { is_static_const: false, .. }));
    assert!(matches!(
        &objects[4],
        PssObject::Instance { array_count: Some(n), .. } if n == "2"
    ));
    assert!(matches!(
        &objects[5],
        PssObject::Instance { access_modifier: Some(AccessModifier::Private), .. }
    ));
}

#[test]
fn test_multiple_declarators_share_type() {
    let objects = model("component C { my_s a, b; }");
    assert_eq!(
        objects[1..],
        [instance("a", "my_s"), instance("b", "my_s")]
    );
}

// =============================================================================
// FUNCTIONS AND PROCEDURAL CODE
// =============================================================================

#[test]
fn test_function_object() {
    let objects = model("solve static function void f(int a, string s = \"x\");");
    assert_eq!(
        objects,
        vec![PssObject::Function {
            name: some("f"),
            platform: Some(crate::model::PlatformQualifier::Solve),
            is_pure: false,
            is_static: true,
            parameters: vec![param("a", "int", None), param("s", "string", Some("\"x\""))],
            return_type: None,
        }]
    );
}

#[test]
fn test_local_declarations_and_assignments() {
    let objects = model("component C { exec body { int x = 5; bit[4] y; x += 1; } }");

    assert_eq!(
        objects[1..],
        [
            PssObject::Assignment {
                target: some("x"),
                operation: Some(AssignOp::Assign),
                value: some("5"),
                data_type: some("int"),
            },
            instance("y", "bit[4]"),
            PssObject::Assignment {
                target: some("x"),
                operation: Some(AssignOp::AddAssign),
                value: some("1"),
                data_type: None,
            },
        ]
    );
}

#[test]
fn test_nested_calls() {
    let objects = model("component C { exec body { a(b(c(1)), 2); } }");
    let call = &objects[1];

    assert_eq!(call.depth(), 3);
    assert_eq!(call.name(), Some("a"));

    let children = call.children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].name(), Some("b"));
    assert_eq!(children[0].children()[0].name(), Some("c"));
    assert_eq!(
        children[1],
        PssObject::Assignment {
            target: None,
            operation: None,
            value: some("2"),
            data_type: None,
        }
    );
}

#[test]
fn test_call_paths() {
    let objects = model("component C { exec body { super.pre_solve(); top.regs.write(1); } }");

    assert_eq!(
        objects[1],
        PssObject::FunctionCall {
            name: some("pre_solve"),
            is_super: true,
            ref_path: some("pre_solve"),
            children: vec![],
        }
    );
    assert!(matches!(
        &objects[2],
        PssObject::FunctionCall { name: Some(n), is_super: false, ref_path: Some(p), .. }
            if n == "write" && p == "top.regs.write"
    ));
}

#[test]
fn test_document_order_through_nesting() {
    let objects = model(
        "package p {
            component A {
                function void f() {
                    if (x) { g(); } else { while (y) h(); }
                }
                component B { }
            }
        }",
    );
    let names: Vec<_> = objects.iter().map(|o| o.name().unwrap_or("")).collect();
    assert_eq!(names, vec!["A", "f", "g", "h", "B"]);
}

#[test]
fn test_unexpected_root() {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(SyntaxKind::BLOCK.into());
    builder.finish_node();
    let root = SyntaxNode::new_root(builder.finish());

    let mut visitor = ModelVisitor::new(URI);
    assert_eq!(
        visitor.visit(&root),
        Err(ModelError::UnexpectedRoot(SyntaxKind::BLOCK))
    );
}

// =============================================================================
// LEGACY RECORDS
// =============================================================================

fn record(kind: MetaKind, name: &str, type_name: Option<&str>, scope: Option<&str>) -> MetaData {
    MetaData {
        uri: URI.to_string(),
        kind,
        name: name.to_string(),
        type_name: type_name.map(str::to_string),
        scope: scope.map(str::to_string),
    }
}

#[test]
fn test_legacy_records_scoped_and_deduplicated() {
    let records = records(
        "package p {
            component C {
                int x;
                int x;
                function int f();
            }
        }
        enum E { A }",
    );

    assert_eq!(
        records,
        vec![
            record(MetaKind::Package, "p", None, None),
            record(MetaKind::Component, "C", None, Some("p")),
            record(MetaKind::Field, "x", Some("int"), Some("p::C")),
            record(MetaKind::Function, "f", Some("int"), Some("p::C")),
            record(MetaKind::Enum, "E", None, None),
        ]
    );
}

#[test]
fn test_legacy_extend_scope() {
    let records = records("extend component pkg::C { bit[4] y; }");
    assert_eq!(
        records,
        vec![record(MetaKind::Field, "y", Some("bit[4]"), Some("pkg::C"))]
    );
}

#[test]
fn test_legacy_records_differing_in_one_field_are_kept() {
    let records = records("component C { int x; bit x; }");
    let fields: Vec<_> = records
        .iter()
        .filter(|r| r.kind == MetaKind::Field)
        .map(|r| r.type_name.as_deref())
        .collect();
    assert_eq!(fields, vec![Some("int"), Some("bit")]);
}
