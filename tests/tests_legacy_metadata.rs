//! Legacy flat declaration records.

mod helpers;

use helpers::source_fixtures::*;
use helpers::{URI, default_config};
use pss::pipeline::build_ast_in;
use pss::{MetaData, MetaKind};

fn find<'a>(records: &'a [MetaData], name: &str) -> &'a MetaData {
    records
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("no record named {name}"))
}

#[test]
fn test_register_block_records() {
    let records = build_ast_in(URI, REGISTER_BLOCK, &default_config());

    let kinds: Vec<_> = records.iter().map(|r| (r.kind, r.name.as_str())).collect();
    assert_eq!(
        kinds,
        vec![
            (MetaKind::Package, "regs_pkg"),
            (MetaKind::Struct, "ctrl_s"),
            (MetaKind::Field, "enable"),
            (MetaKind::Field, "mode"),
            (MetaKind::Component, "ctrl_reg_c"),
            (MetaKind::Component, "dma_regs_c"),
            (MetaKind::Field, "ctrl"),
            (MetaKind::Field, "status"),
            (MetaKind::Field, "channel"),
        ]
    );

    let status = find(&records, "status");
    assert_eq!(status.uri, URI);
    assert_eq!(status.scope.as_deref(), Some("regs_pkg::dma_regs_c"));
    assert_eq!(status.type_name.as_deref(), Some("reg_c<bit[32], READONLY, 32>"));
}

#[test]
fn test_function_records_carry_return_type() {
    let records = build_ast_in(URI, FUNCTIONS, &default_config());

    let add = find(&records, "add");
    assert_eq!(add.kind, MetaKind::Function);
    assert_eq!(add.type_name.as_deref(), Some("int"));
    assert_eq!(add.scope.as_deref(), Some("util_pkg"));

    let reset = find(&records, "reset");
    assert_eq!(reset.type_name, None);
}

#[test]
fn test_duplicates_collapse() {
    let text = "component C { int x; } component C { int x; }";
    let records = build_ast_in(URI, text, &default_config());
    assert_eq!(records.len(), 2);
}

#[test]
fn test_recovers_from_errors() {
    let records = build_ast_in(URI, RECOVERABLE, &default_config());
    let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["broken_c", "x", "fine_c", "y"]);
}

#[test]
fn test_abort_yields_nothing() {
    let mut config = default_config();
    config.grammar.error_limit = 0;
    assert!(build_ast_in(URI, GARBAGE, &config).is_empty());
}
