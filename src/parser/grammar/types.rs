//! Data types, template parameter lists and template argument lists

use super::parse_name;
use crate::parser::errors::ErrorCode;
use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

/// Keywords that name a category of template type parameter
const TYPE_CATEGORY_KEYWORDS: &[SyntaxKind] = &[
    SyntaxKind::TYPE_KW,
    SyntaxKind::STRUCT_KW,
    SyntaxKind::BUFFER_KW,
    SyntaxKind::STREAM_KW,
    SyntaxKind::STATE_KW,
    SyntaxKind::RESOURCE_KW,
    SyntaxKind::ACTION_KW,
    SyntaxKind::COMPONENT_KW,
];

pub(crate) fn is_type_start(kind: SyntaxKind) -> bool {
    kind.is_builtin_type() || matches!(kind, SyntaxKind::IDENT | SyntaxKind::COLON_COLON)
}

/// TypeRef = BuiltinType ('[' Width ']')? Domain?
///         | '::'? IDENT ('::' IDENT)* TemplateArgList? Domain?
/// Domain  = 'in' '[' ... ']'
pub(crate) fn parse_type_ref(p: &mut Parser) {
    p.nested(type_ref);
}

fn type_ref(p: &mut Parser) {
    p.start_node(SyntaxKind::TYPE_REF);

    if p.current().is_builtin_type() {
        p.bump();
        if p.at(SyntaxKind::L_BRACKET) {
            p.bump();
            p.bump_balanced_until(&[SyntaxKind::R_BRACKET]);
            p.expect(SyntaxKind::R_BRACKET);
        }
    } else if p.at(SyntaxKind::IDENT) || p.at(SyntaxKind::COLON_COLON) {
        p.eat(SyntaxKind::COLON_COLON);
        p.expect(SyntaxKind::IDENT);
        while p.at(SyntaxKind::COLON_COLON) && p.nth_at(1, SyntaxKind::IDENT) {
            p.bump();
            p.bump();
        }
        if p.at(SyntaxKind::LT) {
            parse_template_arg_list(p);
        }
    } else {
        p.error(ErrorCode::E0302, "expected a data type");
    }

    if p.at(SyntaxKind::IN_KW) && p.nth_at(1, SyntaxKind::L_BRACKET) {
        p.bump();
        p.bump();
        p.bump_balanced_until(&[SyntaxKind::R_BRACKET]);
        p.expect(SyntaxKind::R_BRACKET);
    }

    p.finish_node();
}

/// TemplateArgList = '<' TemplateArg (',' TemplateArg)* '>'
fn parse_template_arg_list(p: &mut Parser) {
    p.start_node(SyntaxKind::TEMPLATE_ARG_LIST);
    p.bump();

    while !p.at_eof() && !p.at(SyntaxKind::GT) {
        p.start_node(SyntaxKind::TEMPLATE_ARG);
        parse_template_value(p);
        p.finish_node();
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }

    p.expect(SyntaxKind::GT);
    p.finish_node();
}

/// A type or a constant expression up to the next `,` or `>` at depth zero.
fn parse_template_value(p: &mut Parser) {
    let start = p.pos();
    if is_type_start(p.current()) {
        parse_type_ref(p);
    }
    p.bump_balanced_until(&[SyntaxKind::COMMA, SyntaxKind::GT]);
    if p.pos() == start {
        p.error(ErrorCode::E0401, "expected a template argument");
    }
}

/// TemplateParamList = '<' TemplateParam (',' TemplateParam)* '>'
pub(crate) fn parse_template_param_list(p: &mut Parser) {
    p.start_node(SyntaxKind::TEMPLATE_PARAM_LIST);
    p.bump();

    while !p.at_eof() && !p.at(SyntaxKind::GT) {
        parse_template_param(p);
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }

    p.expect(SyntaxKind::GT);
    p.finish_node();
}

/// TemplateParam = TypeCategory NAME (':' TypeRef)? ('=' TypeRef)?
///               | TypeRef NAME ('=' Value)?
fn parse_template_param(p: &mut Parser) {
    p.start_node(SyntaxKind::TEMPLATE_PARAM);

    if p.at_any(TYPE_CATEGORY_KEYWORDS) {
        p.bump();
    } else if is_type_start(p.current()) {
        parse_type_ref(p);
    } else {
        p.error(ErrorCode::E0302, "expected a template parameter type");
    }

    parse_name(p);

    if p.eat(SyntaxKind::COLON) {
        parse_type_ref(p);
    }

    if p.at(SyntaxKind::EQ) {
        p.start_node(SyntaxKind::INITIALIZER);
        p.bump();
        parse_template_value(p);
        p.finish_node();
    }

    p.finish_node();
}
