//! Expression parsing
//!
//! Expressions are not evaluated downstream, so operators are parsed flat
//! without precedence. What matters is the shape of reference paths and
//! calls, which the model extraction reads.

use crate::parser::errors::ErrorCode;
use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

const BINARY_OPS: &[SyntaxKind] = &[
    SyntaxKind::EQ_EQ,
    SyntaxKind::BANG_EQ,
    SyntaxKind::LT,
    SyntaxKind::GT,
    SyntaxKind::LT_EQ,
    SyntaxKind::GT_EQ,
    SyntaxKind::SHL,
    SyntaxKind::STAR,
    SyntaxKind::STAR_STAR,
    SyntaxKind::PLUS,
    SyntaxKind::MINUS,
    SyntaxKind::SLASH,
    SyntaxKind::PERCENT,
    SyntaxKind::CARET,
    SyntaxKind::PIPE,
    SyntaxKind::AMP,
    SyntaxKind::AMP_AMP,
    SyntaxKind::PIPE_PIPE,
    SyntaxKind::DOT_DOT,
];

const UNARY_OPS: &[SyntaxKind] = &[
    SyntaxKind::BANG,
    SyntaxKind::TILDE,
    SyntaxKind::MINUS,
    SyntaxKind::PLUS,
    SyntaxKind::AMP,
    SyntaxKind::PIPE,
    SyntaxKind::CARET,
];

/// Tokens that can start a reference path or call
pub(crate) const REF_START: &[SyntaxKind] = &[
    SyntaxKind::IDENT,
    SyntaxKind::THIS_KW,
    SyntaxKind::SUPER_KW,
    SyntaxKind::COLON_COLON,
];

/// Expr = Ternary
pub(crate) fn parse_expr(p: &mut Parser) {
    p.start_node(SyntaxKind::EXPR);
    parse_ternary(p);
    p.finish_node();
}

/// Ternary = Binary ('?' Ternary ':' Ternary)?
fn parse_ternary(p: &mut Parser) {
    p.nested(ternary);
}

fn ternary(p: &mut Parser) {
    parse_binary(p);
    if p.eat(SyntaxKind::QUESTION) {
        parse_ternary(p);
        p.expect(SyntaxKind::COLON);
        parse_ternary(p);
    }
}

/// Binary = Unary (BinaryOp Unary | 'in' '[' RangeList ']')*
fn parse_binary(p: &mut Parser) {
    parse_unary(p);
    loop {
        if p.at(SyntaxKind::IN_KW) {
            p.bump();
            if p.eat(SyntaxKind::L_BRACKET) {
                p.bump_balanced_until(&[SyntaxKind::R_BRACKET]);
                p.expect(SyntaxKind::R_BRACKET);
            } else {
                parse_unary(p);
            }
            continue;
        }
        if !p.at_any(BINARY_OPS) {
            break;
        }
        // `>>` is lexed as two `>` so nested template lists close cleanly
        if p.at(SyntaxKind::GT) && p.nth_at(1, SyntaxKind::GT) {
            p.bump();
        }
        p.bump();
        parse_unary(p);
    }
}

fn parse_unary(p: &mut Parser) {
    while p.at_any(UNARY_OPS) {
        p.bump();
    }
    parse_primary(p);
}

fn parse_primary(p: &mut Parser) {
    p.nested(primary);
}

fn primary(p: &mut Parser) {
    let current = p.current();
    match current {
        k if k.is_literal() => p.bump(),
        SyntaxKind::L_PAREN => {
            p.bump();
            if p.current().is_builtin_type() {
                // Cast: '(' TypeRef ')' Unary
                super::types::parse_type_ref(p);
                p.expect(SyntaxKind::R_PAREN);
                parse_unary(p);
            } else {
                parse_ternary(p);
                p.expect(SyntaxKind::R_PAREN);
            }
        }
        SyntaxKind::L_BRACE => parse_aggregate(p),
        SyntaxKind::L_BRACKET => {
            p.bump();
            p.bump_balanced_until(&[SyntaxKind::R_BRACKET]);
            p.expect(SyntaxKind::R_BRACKET);
        }
        k if REF_START.contains(&k) => {
            parse_ref_or_call(p);
        }
        _ => p.error(ErrorCode::E0401, format!("expected expression, found {:?}", current)),
    }
}

/// Aggregate = '{' (Ternary (':' Ternary)? (',' Ternary (':' Ternary)?)*)? '}'
fn parse_aggregate(p: &mut Parser) {
    p.bump();
    while !p.at_eof() && !p.at(SyntaxKind::R_BRACE) {
        parse_ternary(p);
        if p.eat(SyntaxKind::COLON) {
            parse_ternary(p);
        }
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
    p.expect(SyntaxKind::R_BRACE);
}

/// RefOrCall = ('super' '.')? RefPath ArgList?
///
/// A trailing argument list wraps the whole thing in `CALL_EXPR`.
/// Returns true when a call was parsed.
pub(crate) fn parse_ref_or_call(p: &mut Parser) -> bool {
    let checkpoint = p.checkpoint();

    if p.at(SyntaxKind::SUPER_KW) && p.nth_at(1, SyntaxKind::DOT) {
        p.bump();
        p.bump();
    }
    parse_ref_path(p);

    if p.at(SyntaxKind::L_PAREN) {
        p.start_node_at(checkpoint, SyntaxKind::CALL_EXPR);
        parse_arg_list(p);
        p.finish_node();
        return true;
    }
    false
}

/// RefPath = '::'? (IDENT | 'this' | 'super') (('.' | '::') IDENT | '[' Expr (':' Expr)? ']')*
pub(crate) fn parse_ref_path(p: &mut Parser) {
    p.start_node(SyntaxKind::REF_PATH);

    p.eat(SyntaxKind::COLON_COLON);
    if p.at_any(&[SyntaxKind::IDENT, SyntaxKind::THIS_KW, SyntaxKind::SUPER_KW]) {
        p.bump();
    } else {
        p.error(ErrorCode::E0301, "expected an identifier");
    }

    loop {
        if p.at_any(&[SyntaxKind::DOT, SyntaxKind::COLON_COLON]) && p.nth_at(1, SyntaxKind::IDENT) {
            p.bump();
            p.bump();
        } else if p.at(SyntaxKind::L_BRACKET) {
            p.bump();
            parse_expr(p);
            if p.eat(SyntaxKind::COLON) {
                parse_expr(p);
            }
            p.expect(SyntaxKind::R_BRACKET);
        } else {
            break;
        }
    }

    p.finish_node();
}

/// ArgList = '(' (Arg (',' Arg)*)? ')'
/// Arg     = Expr
fn parse_arg_list(p: &mut Parser) {
    p.start_node(SyntaxKind::ARG_LIST);
    p.bump();

    while !p.at_eof() && !p.at(SyntaxKind::R_PAREN) {
        p.start_node(SyntaxKind::ARG);
        parse_expr(p);
        p.finish_node();
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }

    p.expect(SyntaxKind::R_PAREN);
    p.finish_node();
}
