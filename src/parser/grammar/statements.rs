//! Procedural statements
//!
//! Function bodies and procedural exec blocks hold these. A statement that
//! starts with a reference path is one of three things:
//!
//! ```text
//! pkg::T x = 1;        declaration   (path followed by a name)
//! a.b[2] += 1;         assignment    (path followed by an assignment op)
//! a.b.f(1, g(2));      call          (path followed by '(')
//! ```
//!
//! Two tokens decide the common cases. When the path continues with `.`,
//! `::` or `[`, the choice needs the whole path: exhaustive prediction scans
//! it, fast prediction reports an ambiguity instead.

use super::expressions::{REF_START, parse_expr, parse_ref_or_call, parse_ref_path};
use super::items::parse_declarators;
use super::types::parse_type_ref;
use super::STMT_RECOVERY;
use crate::parser::adapter::PredictionMode;
use crate::parser::errors::ErrorCode;
use crate::parser::parser::Parser;
use crate::parser::syntax_kind::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StmtKind {
    Decl,
    Assign,
    Call,
}

enum Prediction {
    Known(StmtKind),
    NeedsScan,
    Invalid,
}

/// Block = '{' Stmt* '}'
pub(crate) fn parse_block(p: &mut Parser) {
    p.start_node(SyntaxKind::BLOCK);
    if !p.expect(SyntaxKind::L_BRACE) {
        p.finish_node();
        return;
    }

    while !p.at_eof() && !p.at(SyntaxKind::R_BRACE) {
        let start_pos = p.pos();
        parse_statement(p);
        if p.pos() == start_pos && !p.at_eof() && !p.at(SyntaxKind::R_BRACE) {
            p.error_recover(ErrorCode::E0402, "unexpected token in block", STMT_RECOVERY);
            p.eat(SyntaxKind::SEMICOLON);
        }
    }

    p.expect(SyntaxKind::R_BRACE);
    p.finish_node();
}

pub(crate) fn parse_statement(p: &mut Parser) {
    p.nested(statement);
}

fn statement(p: &mut Parser) {
    match p.current() {
        SyntaxKind::L_BRACE => parse_block(p),
        SyntaxKind::IF_KW => parse_if(p),
        SyntaxKind::WHILE_KW | SyntaxKind::REPEAT_KW | SyntaxKind::FOREACH_KW => parse_loop(p),
        SyntaxKind::MATCH_KW => parse_match(p),
        SyntaxKind::RETURN_KW => {
            p.start_node(SyntaxKind::RETURN_STMT);
            p.bump();
            if !p.at(SyntaxKind::SEMICOLON) {
                parse_expr(p);
            }
            p.expect(SyntaxKind::SEMICOLON);
            p.finish_node();
        }
        SyntaxKind::BREAK_KW | SyntaxKind::CONTINUE_KW => {
            p.start_node(SyntaxKind::JUMP_STMT);
            p.bump();
            p.expect(SyntaxKind::SEMICOLON);
            p.finish_node();
        }
        SyntaxKind::SEMICOLON => p.bump(),
        SyntaxKind::CONST_KW | SyntaxKind::STATIC_KW | SyntaxKind::RAND_KW => parse_var_decl(p),
        k if k.is_builtin_type() => parse_var_decl(p),
        k if REF_START.contains(&k) => match predict_statement(p) {
            Some(StmtKind::Decl) => parse_var_decl(p),
            Some(StmtKind::Assign) => parse_assign(p),
            Some(StmtKind::Call) => parse_call_stmt(p),
            None => {
                p.error_recover(
                    ErrorCode::E0402,
                    "expected a declaration, assignment or call",
                    STMT_RECOVERY,
                );
                p.eat(SyntaxKind::SEMICOLON);
            }
        },
        _ => {
            p.error_recover(ErrorCode::E0402, "expected a statement", STMT_RECOVERY);
            p.eat(SyntaxKind::SEMICOLON);
        }
    }
}

// =============================================================================
// Prediction
// =============================================================================

fn predict_statement(p: &mut Parser) -> Option<StmtKind> {
    match predict_short(p) {
        Prediction::Known(kind) => return Some(kind),
        Prediction::Invalid => return None,
        Prediction::NeedsScan => {}
    }
    if p.mode() == PredictionMode::Sll {
        p.ambiguity("statement kind depends on the full reference path");
        if p.aborted() {
            return None;
        }
    }
    predict_full(p)
}

/// Decide from the first two tokens.
fn predict_short(p: &Parser) -> Prediction {
    let (first, second) = (p.nth(0), p.nth(1));
    match (first, second) {
        (SyntaxKind::SUPER_KW, SyntaxKind::DOT) => Prediction::Known(StmtKind::Call),
        (SyntaxKind::IDENT, SyntaxKind::IDENT) | (SyntaxKind::IDENT, SyntaxKind::LT) => {
            Prediction::Known(StmtKind::Decl)
        }
        (SyntaxKind::IDENT, SyntaxKind::L_PAREN) => Prediction::Known(StmtKind::Call),
        (SyntaxKind::IDENT | SyntaxKind::THIS_KW, op) if op.is_assign_op() => {
            Prediction::Known(StmtKind::Assign)
        }
        (SyntaxKind::COLON_COLON, _)
        | (SyntaxKind::IDENT | SyntaxKind::THIS_KW, SyntaxKind::DOT)
        | (SyntaxKind::IDENT, SyntaxKind::COLON_COLON)
        | (SyntaxKind::IDENT, SyntaxKind::L_BRACKET) => Prediction::NeedsScan,
        _ => Prediction::Invalid,
    }
}

/// Decide by scanning the whole leading reference path.
fn predict_full(p: &Parser) -> Option<StmtKind> {
    let mut n = 0;
    if p.nth_at(n, SyntaxKind::COLON_COLON) {
        n += 1;
    }
    if !matches!(p.nth(n), SyntaxKind::IDENT | SyntaxKind::THIS_KW) {
        return None;
    }
    n += 1;

    loop {
        match p.nth(n) {
            SyntaxKind::DOT | SyntaxKind::COLON_COLON if p.nth_at(n + 1, SyntaxKind::IDENT) => n += 2,
            SyntaxKind::L_BRACKET => n = p.scan_balanced(n, SyntaxKind::L_BRACKET, SyntaxKind::R_BRACKET)?,
            _ => break,
        }
    }

    match p.nth(n) {
        SyntaxKind::IDENT => Some(StmtKind::Decl),
        SyntaxKind::LT => {
            let after = p.scan_balanced(n, SyntaxKind::LT, SyntaxKind::GT)?;
            p.nth_at(after, SyntaxKind::IDENT).then_some(StmtKind::Decl)
        }
        SyntaxKind::L_PAREN => Some(StmtKind::Call),
        kind if kind.is_assign_op() => Some(StmtKind::Assign),
        _ => None,
    }
}

// =============================================================================
// Statement rules
// =============================================================================

/// VarDecl = ('const' | 'static' | 'rand')* TypeRef Declarator (',' Declarator)* ';'
fn parse_var_decl(p: &mut Parser) {
    p.start_node(SyntaxKind::VAR_DECL);
    while p.at_any(&[SyntaxKind::CONST_KW, SyntaxKind::STATIC_KW, SyntaxKind::RAND_KW]) {
        p.bump();
    }
    parse_type_ref(p);
    parse_declarators(p);
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}

/// AssignStmt = RefPath AssignOp Expr ';'
fn parse_assign(p: &mut Parser) {
    p.start_node(SyntaxKind::ASSIGN_STMT);
    parse_ref_path(p);
    if p.current().is_assign_op() {
        p.bump();
    } else {
        p.error(ErrorCode::E0902, "expected an assignment operator");
    }
    parse_expr(p);
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}

/// CallStmt = CallExpr ';'
fn parse_call_stmt(p: &mut Parser) {
    p.start_node(SyntaxKind::CALL_STMT);
    if !parse_ref_or_call(p) {
        p.error(ErrorCode::E0402, "expected a function call");
    }
    p.expect(SyntaxKind::SEMICOLON);
    p.finish_node();
}

fn parse_paren_expr(p: &mut Parser) {
    p.expect(SyntaxKind::L_PAREN);
    parse_expr(p);
    p.expect(SyntaxKind::R_PAREN);
}

/// IfStmt = 'if' '(' Expr ')' Stmt ('else' Stmt)?
fn parse_if(p: &mut Parser) {
    p.start_node(SyntaxKind::IF_STMT);
    p.bump();
    parse_paren_expr(p);
    parse_statement(p);
    if p.eat(SyntaxKind::ELSE_KW) {
        parse_statement(p);
    }
    p.finish_node();
}

/// LoopStmt = 'while' '(' Expr ')' Stmt
///          | 'repeat' '(' ... ')' Stmt
///          | 'repeat' Stmt 'while' '(' Expr ')' ';'
///          | 'foreach' '(' ... ')' Stmt
fn parse_loop(p: &mut Parser) {
    p.start_node(SyntaxKind::LOOP_STMT);
    match p.current() {
        SyntaxKind::WHILE_KW => {
            p.bump();
            parse_paren_expr(p);
            parse_statement(p);
        }
        SyntaxKind::REPEAT_KW => {
            p.bump();
            if p.eat(SyntaxKind::L_PAREN) {
                p.bump_balanced_until(&[SyntaxKind::R_PAREN]);
                p.expect(SyntaxKind::R_PAREN);
                parse_statement(p);
            } else {
                parse_statement(p);
                p.expect(SyntaxKind::WHILE_KW);
                parse_paren_expr(p);
                p.expect(SyntaxKind::SEMICOLON);
            }
        }
        _ => {
            p.bump();
            p.expect(SyntaxKind::L_PAREN);
            p.bump_balanced_until(&[SyntaxKind::R_PAREN]);
            p.expect(SyntaxKind::R_PAREN);
            parse_statement(p);
        }
    }
    p.finish_node();
}

/// MatchStmt   = 'match' '(' Expr ')' '{' MatchChoice* '}'
/// MatchChoice = ('[' OpenRangeList ']' | 'default') ':' Stmt
fn parse_match(p: &mut Parser) {
    p.start_node(SyntaxKind::MATCH_STMT);
    p.bump();
    parse_paren_expr(p);

    if p.expect(SyntaxKind::L_BRACE) {
        while !p.at_eof() && !p.at(SyntaxKind::R_BRACE) {
            if p.eat(SyntaxKind::L_BRACKET) {
                p.bump_balanced_until(&[SyntaxKind::R_BRACKET]);
                p.expect(SyntaxKind::R_BRACKET);
            } else if p.at(SyntaxKind::IDENT) && p.current_text() == "default" {
                p.bump();
            } else {
                p.error_recover(ErrorCode::E0402, "expected a match choice", STMT_RECOVERY);
                p.eat(SyntaxKind::SEMICOLON);
                continue;
            }
            p.expect(SyntaxKind::COLON);
            parse_statement(p);
        }
        p.expect(SyntaxKind::R_BRACE);
    }

    p.finish_node();
}
