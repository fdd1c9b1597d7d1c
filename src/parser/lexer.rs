//! Logos-based lexer for PSS
//!
//! Fast tokenization using the logos crate. The set of reserved words depends
//! on the grammar version: words introduced by a later revision lex as plain
//! identifiers under an earlier one.

use super::syntax_kind::SyntaxKind;
use crate::config::GrammarVersion;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
    version: GrammarVersion,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_version(input, GrammarVersion::V3_0)
    }

    pub fn with_version(input: &'a str, version: GrammarVersion) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
            version,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(LogosToken::MonitorKw) if !self.version.has_monitors() => SyntaxKind::IDENT,
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str, version: GrammarVersion) -> Vec<Token<'_>> {
    Lexer::with_version(input, version).collect()
}

/// Consume a block comment body up to and including the closing `*/`.
/// An unterminated comment swallows the rest of the input and lexes as an error.
fn block_comment(lex: &mut logos::Lexer<'_, LogosToken>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => {
            lex.bump(lex.remainder().len());
            false
        }
    }
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"0[xX][0-9a-fA-F_]+")]
    #[regex(r"[0-9]*'[sS]?[bBoOdDhH][0-9a-fA-FxXzZ_]+")]
    Integer,

    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?")]
    Decimal,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    #[regex(r#""""([^"]|"[^"]|""[^"])*""""#)]
    TripleString,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (must come before single-char)
    // =========================================================================
    #[token("::")]
    ColonColon,
    #[token("...")]
    Ellipsis,
    #[token("..")]
    DotDot,
    #[token("==")]
    EqEq,
    #[token("!=")]
    BangEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<<")]
    Shl,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("&=")]
    AmpEq,
    #[token("|=")]
    PipeEq,
    #[token("^=")]
    CaretEq,
    #[token("<<=")]
    ShlEq,
    #[token(">>=")]
    ShrEq,
    #[token("->")]
    Arrow,
    #[token("**")]
    StarStar,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("@")]
    At,
    #[token("#")]
    Hash,
    #[token("*")]
    Star,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("?")]
    Question,
    #[token("!")]
    Bang,
    #[token("|")]
    Pipe,
    #[token("&")]
    Amp,

    // =========================================================================
    // KEYWORDS (alphabetical, longest match wins in logos)
    // =========================================================================
    #[token("abstract")]
    AbstractKw,
    #[token("action")]
    ActionKw,
    #[token("activity")]
    ActivityKw,
    #[token("bind")]
    BindKw,
    #[token("bit")]
    BitKw,
    #[token("bool")]
    BoolKw,
    #[token("break")]
    BreakKw,
    #[token("buffer")]
    BufferKw,
    #[token("chandle")]
    ChandleKw,
    #[token("component")]
    ComponentKw,
    #[token("const")]
    ConstKw,
    #[token("constraint")]
    ConstraintKw,
    #[token("continue")]
    ContinueKw,
    #[token("covergroup")]
    CovergroupKw,
    #[token("dynamic")]
    DynamicKw,
    #[token("else")]
    ElseKw,
    #[token("enum")]
    EnumKw,
    #[token("exec")]
    ExecKw,
    #[token("extend")]
    ExtendKw,
    #[token("false")]
    FalseKw,
    #[token("float32")]
    Float32Kw,
    #[token("float64")]
    Float64Kw,
    #[token("foreach")]
    ForeachKw,
    #[token("function")]
    FunctionKw,
    #[token("if")]
    IfKw,
    #[token("import")]
    ImportKw,
    #[token("in")]
    InKw,
    #[token("inout")]
    InoutKw,
    #[token("input")]
    InputKw,
    #[token("int")]
    IntKw,
    #[token("lock")]
    LockKw,
    #[token("match")]
    MatchKw,
    #[token("monitor")]
    MonitorKw,
    #[token("null")]
    NullKw,
    #[token("out")]
    OutKw,
    #[token("output")]
    OutputKw,
    #[token("override")]
    OverrideKw,
    #[token("package")]
    PackageKw,
    #[token("pool")]
    PoolKw,
    #[token("private")]
    PrivateKw,
    #[token("protected")]
    ProtectedKw,
    #[token("public")]
    PublicKw,
    #[token("pure")]
    PureKw,
    #[token("rand")]
    RandKw,
    #[token("ref")]
    RefKw,
    #[token("repeat")]
    RepeatKw,
    #[token("resource")]
    ResourceKw,
    #[token("return")]
    ReturnKw,
    #[token("share")]
    ShareKw,
    #[token("solve")]
    SolveKw,
    #[token("state")]
    StateKw,
    #[token("static")]
    StaticKw,
    #[token("stream")]
    StreamKw,
    #[token("string")]
    StringKw,
    #[token("struct")]
    StructKw,
    #[token("super")]
    SuperKw,
    #[token("target")]
    TargetKw,
    #[token("this")]
    ThisKw,
    #[token("true")]
    TrueKw,
    #[token("type")]
    TypeKw,
    #[token("typedef")]
    TypedefKw,
    #[token("void")]
    VoidKw,
    #[token("while")]
    WhileKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            // Trivia
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::LineComment => SyntaxKind::LINE_COMMENT,
            LogosToken::BlockComment => SyntaxKind::BLOCK_COMMENT,

            // Literals
            LogosToken::Ident => SyntaxKind::IDENT,
            LogosToken::Integer => SyntaxKind::INTEGER,
            LogosToken::Decimal => SyntaxKind::DECIMAL,
            LogosToken::String => SyntaxKind::STRING,
            LogosToken::TripleString => SyntaxKind::TRIPLE_STRING,

            // Multi-char punctuation
            LogosToken::ColonColon => SyntaxKind::COLON_COLON,
            LogosToken::Ellipsis => SyntaxKind::ELLIPSIS,
            LogosToken::DotDot => SyntaxKind::DOT_DOT,
            LogosToken::EqEq => SyntaxKind::EQ_EQ,
            LogosToken::BangEq => SyntaxKind::BANG_EQ,
            LogosToken::LtEq => SyntaxKind::LT_EQ,
            LogosToken::GtEq => SyntaxKind::GT_EQ,
            LogosToken::Shl => SyntaxKind::SHL,
            LogosToken::PlusEq => SyntaxKind::PLUS_EQ,
            LogosToken::MinusEq => SyntaxKind::MINUS_EQ,
            LogosToken::StarEq => SyntaxKind::STAR_EQ,
            LogosToken::SlashEq => SyntaxKind::SLASH_EQ,
            LogosToken::PercentEq => SyntaxKind::PERCENT_EQ,
            LogosToken::AmpEq => SyntaxKind::AMP_EQ,
            LogosToken::PipeEq => SyntaxKind::PIPE_EQ,
            LogosToken::CaretEq => SyntaxKind::CARET_EQ,
            LogosToken::ShlEq => SyntaxKind::SHL_EQ,
            LogosToken::ShrEq => SyntaxKind::SHR_EQ,
            LogosToken::Arrow => SyntaxKind::ARROW,
            LogosToken::StarStar => SyntaxKind::STAR_STAR,
            LogosToken::AmpAmp => SyntaxKind::AMP_AMP,
            LogosToken::PipePipe => SyntaxKind::PIPE_PIPE,

            // Single-char punctuation
            LogosToken::LBrace => SyntaxKind::L_BRACE,
            LogosToken::RBrace => SyntaxKind::R_BRACE,
            LogosToken::LBracket => SyntaxKind::L_BRACKET,
            LogosToken::RBracket => SyntaxKind::R_BRACKET,
            LogosToken::LParen => SyntaxKind::L_PAREN,
            LogosToken::RParen => SyntaxKind::R_PAREN,
            LogosToken::Semicolon => SyntaxKind::SEMICOLON,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::Dot => SyntaxKind::DOT,
            LogosToken::Comma => SyntaxKind::COMMA,
            LogosToken::Eq => SyntaxKind::EQ,
            LogosToken::Lt => SyntaxKind::LT,
            LogosToken::Gt => SyntaxKind::GT,
            LogosToken::At => SyntaxKind::AT,
            LogosToken::Hash => SyntaxKind::HASH,
            LogosToken::Star => SyntaxKind::STAR,
            LogosToken::Plus => SyntaxKind::PLUS,
            LogosToken::Minus => SyntaxKind::MINUS,
            LogosToken::Slash => SyntaxKind::SLASH,
            LogosToken::Percent => SyntaxKind::PERCENT,
            LogosToken::Caret => SyntaxKind::CARET,
            LogosToken::Tilde => SyntaxKind::TILDE,
            LogosToken::Question => SyntaxKind::QUESTION,
            LogosToken::Bang => SyntaxKind::BANG,
            LogosToken::Pipe => SyntaxKind::PIPE,
            LogosToken::Amp => SyntaxKind::AMP,

            // Keywords
            LogosToken::AbstractKw => SyntaxKind::ABSTRACT_KW,
            LogosToken::ActionKw => SyntaxKind::ACTION_KW,
            LogosToken::ActivityKw => SyntaxKind::ACTIVITY_KW,
            LogosToken::BindKw => SyntaxKind::BIND_KW,
            LogosToken::BitKw => SyntaxKind::BIT_KW,
            LogosToken::BoolKw => SyntaxKind::BOOL_KW,
            LogosToken::BreakKw => SyntaxKind::BREAK_KW,
            LogosToken::BufferKw => SyntaxKind::BUFFER_KW,
            LogosToken::ChandleKw => SyntaxKind::CHANDLE_KW,
            LogosToken::ComponentKw => SyntaxKind::COMPONENT_KW,
            LogosToken::ConstKw => SyntaxKind::CONST_KW,
            LogosToken::ConstraintKw => SyntaxKind::CONSTRAINT_KW,
            LogosToken::ContinueKw => SyntaxKind::CONTINUE_KW,
            LogosToken::CovergroupKw => SyntaxKind::COVERGROUP_KW,
            LogosToken::DynamicKw => SyntaxKind::DYNAMIC_KW,
            LogosToken::ElseKw => SyntaxKind::ELSE_KW,
            LogosToken::EnumKw => SyntaxKind::ENUM_KW,
            LogosToken::ExecKw => SyntaxKind::EXEC_KW,
            LogosToken::ExtendKw => SyntaxKind::EXTEND_KW,
            LogosToken::FalseKw => SyntaxKind::FALSE_KW,
            LogosToken::Float32Kw => SyntaxKind::FLOAT32_KW,
            LogosToken::Float64Kw => SyntaxKind::FLOAT64_KW,
            LogosToken::ForeachKw => SyntaxKind::FOREACH_KW,
            LogosToken::FunctionKw => SyntaxKind::FUNCTION_KW,
            LogosToken::IfKw => SyntaxKind::IF_KW,
            LogosToken::ImportKw => SyntaxKind::IMPORT_KW,
            LogosToken::InKw => SyntaxKind::IN_KW,
            LogosToken::InoutKw => SyntaxKind::INOUT_KW,
            LogosToken::InputKw => SyntaxKind::INPUT_KW,
            LogosToken::IntKw => SyntaxKind::INT_KW,
            LogosToken::LockKw => SyntaxKind::LOCK_KW,
            LogosToken::MatchKw => SyntaxKind::MATCH_KW,
            LogosToken::MonitorKw => SyntaxKind::MONITOR_KW,
            LogosToken::NullKw => SyntaxKind::NULL_KW,
            LogosToken::OutKw => SyntaxKind::OUT_KW,
            LogosToken::OutputKw => SyntaxKind::OUTPUT_KW,
            LogosToken::OverrideKw => SyntaxKind::OVERRIDE_KW,
            LogosToken::PackageKw => SyntaxKind::PACKAGE_KW,
            LogosToken::PoolKw => SyntaxKind::POOL_KW,
            LogosToken::PrivateKw => SyntaxKind::PRIVATE_KW,
            LogosToken::ProtectedKw => SyntaxKind::PROTECTED_KW,
            LogosToken::PublicKw => SyntaxKind::PUBLIC_KW,
            LogosToken::PureKw => SyntaxKind::PURE_KW,
            LogosToken::RandKw => SyntaxKind::RAND_KW,
            LogosToken::RefKw => SyntaxKind::REF_KW,
            LogosToken::RepeatKw => SyntaxKind::REPEAT_KW,
            LogosToken::ResourceKw => SyntaxKind::RESOURCE_KW,
            LogosToken::ReturnKw => SyntaxKind::RETURN_KW,
            LogosToken::ShareKw => SyntaxKind::SHARE_KW,
            LogosToken::SolveKw => SyntaxKind::SOLVE_KW,
            LogosToken::StateKw => SyntaxKind::STATE_KW,
            LogosToken::StaticKw => SyntaxKind::STATIC_KW,
            LogosToken::StreamKw => SyntaxKind::STREAM_KW,
            LogosToken::StringKw => SyntaxKind::STRING_KW,
            LogosToken::StructKw => SyntaxKind::STRUCT_KW,
            LogosToken::SuperKw => SyntaxKind::SUPER_KW,
            LogosToken::TargetKw => SyntaxKind::TARGET_KW,
            LogosToken::ThisKw => SyntaxKind::THIS_KW,
            LogosToken::TrueKw => SyntaxKind::TRUE_KW,
            LogosToken::TypeKw => SyntaxKind::TYPE_KW,
            LogosToken::TypedefKw => SyntaxKind::TYPEDEF_KW,
            LogosToken::VoidKw => SyntaxKind::VOID_KW,
            LogosToken::WhileKw => SyntaxKind::WHILE_KW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<SyntaxKind> {
        Lexer::new(input)
            .map(|t| t.kind)
            .filter(|k| !k.is_trivia())
            .collect()
    }

    #[test]
    fn test_lex_component() {
        let tokens: Vec<_> = Lexer::new("component pss_top {}").collect();
        assert_eq!(tokens.len(), 6); // component, ws, pss_top, ws, {, }
        assert_eq!(tokens[0].kind, SyntaxKind::COMPONENT_KW);
        assert_eq!(tokens[1].kind, SyntaxKind::WHITESPACE);
        assert_eq!(tokens[2].kind, SyntaxKind::IDENT);
        assert_eq!(tokens[2].text, "pss_top");
        assert_eq!(tokens[2].offset, TextSize::new(10));
    }

    #[test]
    fn test_lex_qualified_name() {
        assert_eq!(
            kinds("addr_reg_pkg::reg_c"),
            vec![SyntaxKind::IDENT, SyntaxKind::COLON_COLON, SyntaxKind::IDENT]
        );
    }

    #[test]
    fn test_lex_number_forms() {
        assert_eq!(
            kinds("42 0x1F 8'hFF 'b1010 3.5"),
            vec![
                SyntaxKind::INTEGER,
                SyntaxKind::INTEGER,
                SyntaxKind::INTEGER,
                SyntaxKind::INTEGER,
                SyntaxKind::DECIMAL,
            ]
        );
    }

    #[test]
    fn test_lex_assign_ops() {
        assert_eq!(
            kinds("a += 1; b <<= 2; c >>= 3;"),
            vec![
                SyntaxKind::IDENT,
                SyntaxKind::PLUS_EQ,
                SyntaxKind::INTEGER,
                SyntaxKind::SEMICOLON,
                SyntaxKind::IDENT,
                SyntaxKind::SHL_EQ,
                SyntaxKind::INTEGER,
                SyntaxKind::SEMICOLON,
                SyntaxKind::IDENT,
                SyntaxKind::SHR_EQ,
                SyntaxKind::INTEGER,
                SyntaxKind::SEMICOLON,
            ]
        );
    }

    #[test]
    fn test_lex_nested_template_close() {
        // `>>` stays two tokens so nested template argument lists close cleanly
        assert_eq!(
            kinds("list<list<int>>"),
            vec![
                SyntaxKind::IDENT,
                SyntaxKind::LT,
                SyntaxKind::IDENT,
                SyntaxKind::LT,
                SyntaxKind::INT_KW,
                SyntaxKind::GT,
                SyntaxKind::GT,
            ]
        );
    }

    #[test]
    fn test_lex_comments() {
        let tokens: Vec<_> = Lexer::new("// line\n/** doc **/ component").collect();
        assert_eq!(tokens[0].kind, SyntaxKind::LINE_COMMENT);
        assert_eq!(tokens[2].kind, SyntaxKind::BLOCK_COMMENT);
        assert_eq!(tokens[2].text, "/** doc **/");
        assert_eq!(tokens[4].kind, SyntaxKind::COMPONENT_KW);
    }

    #[rstest::rstest]
    #[case("/* c */")]
    #[case("/**/")]
    #[case("/***/")]
    #[case("/* a * b / c */")]
    #[case("/*\n * Copyright header\n * line two\n */")]
    fn test_lex_block_comment_is_one_token(#[case] comment: &str) {
        let tokens: Vec<_> = Lexer::new(comment).collect();
        assert_eq!(tokens.len(), 1, "{tokens:?}");
        assert_eq!(tokens[0].kind, SyntaxKind::BLOCK_COMMENT);
        assert_eq!(tokens[0].text, comment);
    }

    #[test]
    fn test_lex_block_comment_between_tokens() {
        assert_eq!(
            kinds("f(a /* c */, b);"),
            vec![
                SyntaxKind::IDENT,
                SyntaxKind::L_PAREN,
                SyntaxKind::IDENT,
                SyntaxKind::COMMA,
                SyntaxKind::IDENT,
                SyntaxKind::R_PAREN,
                SyntaxKind::SEMICOLON,
            ]
        );
    }

    #[test]
    fn test_lex_unterminated_block_comment() {
        let tokens: Vec<_> = Lexer::new("int x; /* never closed").collect();
        let last = tokens.last().expect("tokens");
        assert_eq!(last.kind, SyntaxKind::ERROR);
        assert_eq!(last.text, "/* never closed");
    }

    #[test]
    fn test_lex_triple_string() {
        let tokens = kinds(r#"exec body C = """ printf("x"); """;"#);
        assert!(tokens.contains(&SyntaxKind::TRIPLE_STRING));
        assert_eq!(tokens.last(), Some(&SyntaxKind::SEMICOLON));
    }

    #[test]
    fn test_monitor_keyword_depends_on_version() {
        let v3: Vec<_> = tokenize("monitor", GrammarVersion::V3_0);
        let v2: Vec<_> = tokenize("monitor", GrammarVersion::V2_1);
        assert_eq!(v3[0].kind, SyntaxKind::MONITOR_KW);
        assert_eq!(v2[0].kind, SyntaxKind::IDENT);
    }

    #[test]
    fn test_lex_invalid_char() {
        assert_eq!(kinds("$"), vec![SyntaxKind::ERROR]);
    }
}
