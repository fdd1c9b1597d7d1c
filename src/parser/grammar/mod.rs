//! Grammar rules for PSS
//!
//! This module contains the recursive descent rules, organized by construct:
//! - `items` - Package and type-body members (components, structs, functions, fields)
//! - `types` - Data type references, template parameter and argument lists
//! - `statements` - Procedural statements inside function bodies and exec blocks
//! - `expressions` - Expressions, reference paths and call expressions
//!
//! Every rule is a free function over the shared [`Parser`] state.

mod expressions;
mod items;
mod statements;
mod types;

use super::parser::Parser;
use super::syntax_kind::SyntaxKind;

/// SourceFile = Member*
pub(crate) fn parse_source_file(p: &mut Parser) {
    p.start_node(SyntaxKind::SOURCE_FILE);

    while !p.at_eof() {
        let start_pos = p.pos();
        items::parse_member(p);

        // Every member rule consumes at least one token; guard anyway so a
        // rule bug cannot hang the parse.
        if p.pos() == start_pos && !p.at_eof() {
            p.error(super::errors::ErrorCode::E0901, "parser made no progress");
            p.bump();
        }
    }

    p.skip_trivia();
    p.finish_node();
}

/// Tokens that may start a package or type-body member. Used as a recovery
/// set after a malformed member.
pub(crate) const MEMBER_START: &[SyntaxKind] = &[
    SyntaxKind::SEMICOLON,
    SyntaxKind::R_BRACE,
    SyntaxKind::PACKAGE_KW,
    SyntaxKind::IMPORT_KW,
    SyntaxKind::COMPONENT_KW,
    SyntaxKind::PURE_KW,
    SyntaxKind::STRUCT_KW,
    SyntaxKind::BUFFER_KW,
    SyntaxKind::STREAM_KW,
    SyntaxKind::STATE_KW,
    SyntaxKind::RESOURCE_KW,
    SyntaxKind::ACTION_KW,
    SyntaxKind::ABSTRACT_KW,
    SyntaxKind::EXTEND_KW,
    SyntaxKind::ENUM_KW,
    SyntaxKind::TYPEDEF_KW,
    SyntaxKind::MONITOR_KW,
    SyntaxKind::FUNCTION_KW,
    SyntaxKind::TARGET_KW,
    SyntaxKind::SOLVE_KW,
    SyntaxKind::EXEC_KW,
    SyntaxKind::CONSTRAINT_KW,
    SyntaxKind::ACTIVITY_KW,
    SyntaxKind::COVERGROUP_KW,
];

/// Tokens that end or start a procedural statement.
pub(crate) const STMT_RECOVERY: &[SyntaxKind] = &[SyntaxKind::SEMICOLON, SyntaxKind::R_BRACE];

/// Name = IDENT
pub(crate) fn parse_name(p: &mut Parser) {
    if p.at(SyntaxKind::IDENT) {
        p.start_node(SyntaxKind::NAME);
        p.bump();
        p.finish_node();
    } else {
        p.error(super::errors::ErrorCode::E0301, "expected a name");
    }
}

/// QualifiedName = '::'? IDENT ('::' IDENT)*
///
/// Wrapped in a single `NAME` node.
pub(crate) fn parse_qualified_name(p: &mut Parser) {
    if !p.at(SyntaxKind::IDENT) && !p.at(SyntaxKind::COLON_COLON) {
        p.error(super::errors::ErrorCode::E0301, "expected a name");
        return;
    }
    p.start_node(SyntaxKind::NAME);
    p.eat(SyntaxKind::COLON_COLON);
    p.expect(SyntaxKind::IDENT);
    while p.at(SyntaxKind::COLON_COLON) && p.nth_at(1, SyntaxKind::IDENT) {
        p.bump();
        p.bump();
    }
    p.finish_node();
}
