//! Package and type-body members
//!
//! PSS members are introduced by a run of modifiers followed by a keyword
//! (`pure component`, `import target function`, `rand bit[4]`), so dispatch
//! first skips modifiers to find the keyword that names the construct.

use super::expressions::parse_expr;
use super::statements::parse_block;
use super::types::{is_type_start, parse_template_param_list, parse_type_ref};
use super::{MEMBER_START, parse_name, parse_qualified_name};
use crate::parser::errors::ErrorCode;
use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

/// Modifiers that may precede a member keyword or a field type
pub const MEMBER_MODIFIERS: &[SyntaxKind] = &[
    SyntaxKind::PURE_KW,
    SyntaxKind::STATIC_KW,
    SyntaxKind::TARGET_KW,
    SyntaxKind::SOLVE_KW,
    SyntaxKind::IMPORT_KW,
    SyntaxKind::CONST_KW,
    SyntaxKind::RAND_KW,
    SyntaxKind::PUBLIC_KW,
    SyntaxKind::PRIVATE_KW,
    SyntaxKind::PROTECTED_KW,
    SyntaxKind::ABSTRACT_KW,
    SyntaxKind::DYNAMIC_KW,
    SyntaxKind::INPUT_KW,
    SyntaxKind::OUTPUT_KW,
    SyntaxKind::LOCK_KW,
    SyntaxKind::SHARE_KW,
    SyntaxKind::POOL_KW,
];

/// Struct-like type keywords
pub const STRUCT_KINDS: &[SyntaxKind] = &[
    SyntaxKind::STRUCT_KW,
    SyntaxKind::BUFFER_KW,
    SyntaxKind::STREAM_KW,
    SyntaxKind::STATE_KW,
    SyntaxKind::RESOURCE_KW,
];

const ACCESS_KEYWORDS: &[SyntaxKind] = &[
    SyntaxKind::PUBLIC_KW,
    SyntaxKind::PRIVATE_KW,
    SyntaxKind::PROTECTED_KW,
];

const PARAM_DIRECTIONS: &[SyntaxKind] = &[
    SyntaxKind::IN_KW,
    SyntaxKind::OUT_KW,
    SyntaxKind::INOUT_KW,
    SyntaxKind::REF_KW,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemberStart {
    Function,
    Component,
    Struct,
    Action,
    Monitor,
    Constraint,
    Import,
    AccessLabel,
    Field,
    Unknown,
}

/// Find the construct a member introduces by looking past its modifiers.
fn classify_member(p: &Parser) -> MemberStart {
    if p.at_any(ACCESS_KEYWORDS) && p.nth_at(1, SyntaxKind::COLON) {
        return MemberStart::AccessLabel;
    }

    let mut n = 0;
    while MEMBER_MODIFIERS.contains(&p.nth(n)) {
        if p.nth_at(n, SyntaxKind::POOL_KW) && p.nth_at(n + 1, SyntaxKind::L_BRACKET) {
            match p.scan_balanced(n + 1, SyntaxKind::L_BRACKET, SyntaxKind::R_BRACKET) {
                Some(after) => n = after,
                None => return MemberStart::Unknown,
            }
        } else {
            n += 1;
        }
    }

    match p.nth(n) {
        SyntaxKind::FUNCTION_KW => MemberStart::Function,
        SyntaxKind::COMPONENT_KW => MemberStart::Component,
        SyntaxKind::ACTION_KW => MemberStart::Action,
        SyntaxKind::MONITOR_KW => MemberStart::Monitor,
        SyntaxKind::CONSTRAINT_KW => MemberStart::Constraint,
        kind if STRUCT_KINDS.contains(&kind) => MemberStart::Struct,
        _ if p.at(SyntaxKind::IMPORT_KW) => MemberStart::Import,
        kind if is_type_start(kind) => MemberStart::Field,
        _ => MemberStart::Unknown,
    }
}

/// Member = Package | Import | Component | Struct | Action | Monitor
///        | Extend | Enum | Typedef | Function | Field | Exec
///        | Constraint | Activity | Covergroup | Override | Bind | AccessLabel
pub(crate) fn parse_member(p: &mut Parser) {
    p.nested(member);
}

fn member(p: &mut Parser) {
    match p.current() {
        SyntaxKind::PACKAGE_KW => parse_package(p),
        SyntaxKind::EXTEND_KW => parse_extend(p),
        SyntaxKind::ENUM_KW => parse_enum(p),
        SyntaxKind::TYPEDEF_KW => parse_typedef(p),
        SyntaxKind::EXEC_KW => parse_exec(p),
        SyntaxKind::ACTIVITY_KW | SyntaxKind::COVERGROUP_KW | SyntaxKind::OVERRIDE_KW => parse_opaque(p),
        SyntaxKind::BIND_KW => parse_bind(p),
        SyntaxKind::SEMICOLON => p.bump(),
        _ => match classify_member(p) {
            MemberStart::Function => parse_function(p),
            MemberStart::Component => parse_type_decl(p, SyntaxKind::COMPONENT),
            MemberStart::Struct => parse_type_decl(p, SyntaxKind::STRUCT_DECL),
            MemberStart::Action => parse_type_decl(p, SyntaxKind::ACTION_DECL),
            MemberStart::Monitor => parse_type_decl(p, SyntaxKind::MONITOR_DECL),
            MemberStart::Constraint => parse_opaque(p),
            MemberStart::Import => parse_import(p),
            MemberStart::AccessLabel => parse_access_label(p),
            MemberStart::Field => parse_field(p),
            MemberStart::Unknown => {
                let found = p.current();
                let code = match found {
                    SyntaxKind::ERROR => ErrorCode::E0101,
                    _ => ErrorCode::E0303,
                };
                p.error_recover(
                    code,
                    format!("unexpected {:?} in declaration context", found),
                    MEMBER_START,
                );
                p.eat(SyntaxKind::SEMICOLON);
            }
        },
    }
}

/// ItemBody = '{' Member* '}'
fn parse_item_body(p: &mut Parser) {
    p.start_node(SyntaxKind::ITEM_BODY);
    if !p.expect(SyntaxKind::L_BRACE) {
        p.finish_node();
        return;
    }

    while !p.at_eof() && !p.at(SyntaxKind::R_BRACE) {
        let start_pos = p.pos();
        parse_member(p);
        if p.pos() == start_pos && !p.at_eof() && !p.at(SyntaxKind::R_BRACE) {
            p.error_recover(ErrorCode::E0303, "unexpected token in body", MEMBER_START);
        }
    }

    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

/// Package = 'package' QualifiedName ItemBody
fn parse_package(p: &mut Parser) {
    p.start_node(SyntaxKind::PACKAGE);
    p.bump();
    parse_qualified_name(p);
    parse_item_body(p);
    p.finish_node();
}

/// Import = 'import' ImportPath ('as' IDENT)? ';'
fn parse_import(p: &mut Parser) {
    p.start_node(SyntaxKind::IMPORT);
    p.bump();
    p.bump_balanced_until(&[SyntaxKind::SEMICOLON]);
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}

/// TypeDecl  = Modifier* TypeKeyword NAME TemplateParamList? SuperSpec? ItemBody
/// SuperSpec = ':' TypeRef
///
/// Shared by components, structs, actions and monitors.
fn parse_type_decl(p: &mut Parser, kind: SyntaxKind) {
    p.start_node(kind);
    while p.at_any(MEMBER_MODIFIERS) {
        p.bump();
    }
    // the type keyword itself, already classified
    p.bump();
    parse_name(p);

    if p.at(SyntaxKind::LT) {
        parse_template_param_list(p);
    }

    if p.at(SyntaxKind::COLON) {
        p.start_node(SyntaxKind::SUPER_SPEC);
        p.bump();
        parse_type_ref(p);
        p.finish_node();
    }

    parse_item_body(p);
    p.finish_node();
}

/// Extend = 'extend' ('component' | 'action' | 'enum' | StructKind) TypeRef ItemBody
fn parse_extend(p: &mut Parser) {
    p.start_node(SyntaxKind::EXTEND_DECL);
    p.bump();

    let is_enum = p.at(SyntaxKind::ENUM_KW);
    if p.at_any(&[SyntaxKind::COMPONENT_KW, SyntaxKind::ACTION_KW, SyntaxKind::ENUM_KW])
        || p.at_any(STRUCT_KINDS)
    {
        p.bump();
    } else {
        p.error(ErrorCode::E0302, "expected the kind of type to extend");
    }
    parse_type_ref(p);

    if is_enum {
        p.bump_braced();
    } else {
        parse_item_body(p);
    }
    p.finish_node();
}

/// Enum = 'enum' NAME (':' TypeRef)? '{' ... '}'
fn parse_enum(p: &mut Parser) {
    p.start_node(SyntaxKind::ENUM_DECL);
    p.bump();
    parse_name(p);
    if p.eat(SyntaxKind::COLON) {
        parse_type_ref(p);
    }
    p.bump_braced();
    p.finish_node();
}

/// Typedef = 'typedef' TypeRef NAME ';'
fn parse_typedef(p: &mut Parser) {
    p.start_node(SyntaxKind::TYPEDEF_DECL);
    p.bump();
    parse_type_ref(p);
    parse_name(p);
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}

// =============================================================================
// Functions
// =============================================================================

/// Function = Modifier* 'function' TemplateParamList? ('void' | TypeRef) NAME ParamList (';' | Block)
///          | 'import' Modifier* 'function' QualifiedName ';'
fn parse_function(p: &mut Parser) {
    p.start_node(SyntaxKind::FUNCTION_DECL);
    while p.at_any(MEMBER_MODIFIERS) {
        p.bump();
    }
    p.expect(SyntaxKind::FUNCTION_KW);

    if p.at(SyntaxKind::LT) {
        parse_template_param_list(p);
    }

    // `import function pkg::f;` re-imports an existing prototype by name
    if is_prototype_reference(p) {
        parse_qualified_name(p);
        p.expect(SyntaxKind::SEMICOLON);
        p.finish_node();
        return;
    }

    if !p.eat(SyntaxKind::VOID_KW) {
        parse_type_ref(p);
    }
    parse_name(p);
    parse_param_list(p);

    if p.at(SyntaxKind::L_BRACE) {
        parse_block(p);
    } else {
        p.expect(SyntaxKind::SEMICOLON);
    }
    p.finish_node();
}

fn is_prototype_reference(p: &Parser) -> bool {
    let mut n = 0;
    if p.nth_at(n, SyntaxKind::COLON_COLON) {
        n += 1;
    }
    if !p.nth_at(n, SyntaxKind::IDENT) {
        return false;
    }
    n += 1;
    while p.nth_at(n, SyntaxKind::COLON_COLON) && p.nth_at(n + 1, SyntaxKind::IDENT) {
        n += 2;
    }
    p.nth_at(n, SyntaxKind::SEMICOLON)
}

/// ParamList = '(' (Param (',' Param)*)? ')'
fn parse_param_list(p: &mut Parser) {
    p.start_node(SyntaxKind::PARAM_LIST);
    if !p.expect(SyntaxKind::L_PAREN) {
        p.finish_node();
        return;
    }

    while !p.at_eof() && !p.at(SyntaxKind::R_PAREN) {
        parse_param(p);
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }

    p.expect(SyntaxKind::R_PAREN);
    p.finish_node();
}

/// Param = Direction? ('type' | 'struct' | TypeRef) '...'? NAME ('=' Expr)?
fn parse_param(p: &mut Parser) {
    p.start_node(SyntaxKind::PARAM);

    if p.at_any(PARAM_DIRECTIONS) {
        p.bump();
    }
    if p.at_any(&[SyntaxKind::TYPE_KW, SyntaxKind::STRUCT_KW]) {
        p.bump();
    } else {
        parse_type_ref(p);
    }
    p.eat(SyntaxKind::ELLIPSIS);
    parse_name(p);

    if p.at(SyntaxKind::EQ) {
        p.start_node(SyntaxKind::INITIALIZER);
        p.bump();
        parse_expr(p);
        p.finish_node();
    }

    p.finish_node();
}

// =============================================================================
// Fields
// =============================================================================

/// Field = Modifier* TypeRef Declarator (',' Declarator)* ';'
fn parse_field(p: &mut Parser) {
    p.start_node(SyntaxKind::FIELD_DECL);

    while p.at_any(MEMBER_MODIFIERS) {
        if p.at(SyntaxKind::POOL_KW) && p.nth_at(1, SyntaxKind::L_BRACKET) {
            p.bump();
            p.bump();
            p.bump_balanced_until(&[SyntaxKind::R_BRACKET]);
            p.expect(SyntaxKind::R_BRACKET);
        } else {
            p.bump();
        }
    }

    parse_type_ref(p);
    parse_declarators(p);
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}

/// Declarators = Declarator (',' Declarator)*
/// Declarator  = NAME ('[' Expr ']')? ('=' Expr)?
pub(crate) fn parse_declarators(p: &mut Parser) {
    loop {
        p.start_node(SyntaxKind::DECLARATOR);
        parse_name(p);

        if p.at(SyntaxKind::L_BRACKET) {
            p.start_node(SyntaxKind::ARRAY_DIM);
            p.bump();
            parse_expr(p);
            p.expect(SyntaxKind::R_BRACKET);
            p.finish_node();
        }

        if p.at(SyntaxKind::EQ) {
            p.start_node(SyntaxKind::INITIALIZER);
            p.bump();
            parse_expr(p);
            p.finish_node();
        }

        p.finish_node();
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
}

/// AccessLabel = ('public' | 'private' | 'protected') ':'
fn parse_access_label(p: &mut Parser) {
    p.start_node(SyntaxKind::ACCESS_LABEL);
    p.bump();
    p.bump();
    p.finish_node();
}

/// Bind = 'bind' ... ';'
fn parse_bind(p: &mut Parser) {
    p.start_node(SyntaxKind::BIND_STMT);
    p.bump();
    p.bump_balanced_until(&[SyntaxKind::SEMICOLON]);
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}

// =============================================================================
// Behavior blocks
// =============================================================================

/// Exec = 'exec' ExecKind (IDENT | STRING)? (Block | '=' TemplateString ';' | ';')
fn parse_exec(p: &mut Parser) {
    p.start_node(SyntaxKind::EXEC_BLOCK);
    p.bump();

    if !p.eat(SyntaxKind::IDENT) {
        p.error(ErrorCode::E0301, "expected an exec kind");
    }
    // target language or output file
    if p.at_any(&[SyntaxKind::IDENT, SyntaxKind::STRING]) {
        p.bump();
    }

    match p.current() {
        SyntaxKind::L_BRACE => parse_block(p),
        SyntaxKind::EQ => {
            p.bump();
            if !p.eat(SyntaxKind::TRIPLE_STRING) && !p.eat(SyntaxKind::STRING) {
                p.error(ErrorCode::E0401, "expected a target template string");
            }
            p.expect(SyntaxKind::SEMICOLON);
        }
        _ => {
            p.expect(SyntaxKind::SEMICOLON);
        }
    }

    p.finish_node();
}

/// Opaque = Keyword ... ('{' ... '}' | ';')
///
/// Constraints, activities, covergroups and overrides. Their contents are
/// kept in the tree but carry nothing the model needs.
fn parse_opaque(p: &mut Parser) {
    p.start_node(SyntaxKind::OPAQUE_BLOCK);
    p.bump();
    p.bump_balanced_until(&[SyntaxKind::L_BRACE, SyntaxKind::SEMICOLON]);
    if p.at(SyntaxKind::L_BRACE) {
        p.bump_braced();
    } else {
        p.expect(SyntaxKind::SEMICOLON);
    }
    p.finish_node();
}
