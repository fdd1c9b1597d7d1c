//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the PSS syntax tree.

/// All syntax kinds (tokens and nodes) in PSS
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (components, fields, statements).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,              // identifier
    INTEGER,            // 42, 'h1F, 0x1F
    DECIMAL,            // 3.14
    STRING,             // "hello"
    TRIPLE_STRING,      // """ target template """

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,            // {
    R_BRACE,            // }
    L_BRACKET,          // [
    R_BRACKET,          // ]
    L_PAREN,            // (
    R_PAREN,            // )
    SEMICOLON,          // ;
    COLON,              // :
    COLON_COLON,        // ::
    DOT,                // .
    DOT_DOT,            // ..
    ELLIPSIS,           // ...
    COMMA,              // ,
    EQ,                 // =
    EQ_EQ,              // ==
    BANG_EQ,            // !=
    LT,                 // <
    GT,                 // >
    LT_EQ,              // <=
    GT_EQ,              // >=
    SHL,                // <<
    PLUS_EQ,            // +=
    MINUS_EQ,           // -=
    STAR_EQ,            // *=
    SLASH_EQ,           // /=
    PERCENT_EQ,         // %=
    AMP_EQ,             // &=
    PIPE_EQ,            // |=
    CARET_EQ,           // ^=
    SHL_EQ,             // <<=
    SHR_EQ,             // >>=
    ARROW,              // ->
    AT,                 // @
    HASH,               // #
    STAR,               // *
    STAR_STAR,          // **
    PLUS,               // +
    MINUS,              // -
    SLASH,              // /
    PERCENT,            // %
    CARET,              // ^
    TILDE,              // ~
    QUESTION,           // ?
    BANG,               // !
    PIPE,               // |
    AMP,                // &
    AMP_AMP,            // &&
    PIPE_PIPE,          // ||

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    // Namespaces
    PACKAGE_KW,
    IMPORT_KW,

    // Type declarations
    COMPONENT_KW,
    PURE_KW,
    STRUCT_KW,
    BUFFER_KW,
    STREAM_KW,
    STATE_KW,
    RESOURCE_KW,
    ACTION_KW,
    ABSTRACT_KW,
    EXTEND_KW,
    ENUM_KW,
    TYPEDEF_KW,
    MONITOR_KW,         // reserved from PSS 3.0 on
    FUNCTION_KW,
    TARGET_KW,
    SOLVE_KW,

    // Field modifiers
    STATIC_KW,
    CONST_KW,
    RAND_KW,
    PUBLIC_KW,
    PRIVATE_KW,
    PROTECTED_KW,
    INPUT_KW,
    OUTPUT_KW,
    LOCK_KW,
    SHARE_KW,
    POOL_KW,
    BIND_KW,

    // Parameter direction
    IN_KW,
    OUT_KW,
    INOUT_KW,
    REF_KW,
    TYPE_KW,

    // Behavior blocks
    EXEC_KW,
    CONSTRAINT_KW,
    DYNAMIC_KW,
    ACTIVITY_KW,
    COVERGROUP_KW,
    OVERRIDE_KW,

    // Procedural statements
    IF_KW,
    ELSE_KW,
    WHILE_KW,
    REPEAT_KW,
    FOREACH_KW,
    MATCH_KW,
    RETURN_KW,
    BREAK_KW,
    CONTINUE_KW,
    SUPER_KW,
    THIS_KW,

    // Built-in types
    VOID_KW,
    BIT_KW,
    INT_KW,
    BOOL_KW,
    STRING_KW,
    CHANDLE_KW,
    FLOAT32_KW,
    FLOAT64_KW,

    // Literal keywords
    TRUE_KW,
    FALSE_KW,
    NULL_KW,

    // =========================================================================
    // NODES
    // =========================================================================
    SOURCE_FILE,
    PACKAGE,
    IMPORT,
    ITEM_BODY,              // { member* } of packages and types
    COMPONENT,
    STRUCT_DECL,            // struct/buffer/stream/state/resource
    ACTION_DECL,
    MONITOR_DECL,
    EXTEND_DECL,
    ENUM_DECL,
    TYPEDEF_DECL,
    FUNCTION_DECL,
    PARAM_LIST,
    PARAM,
    TEMPLATE_PARAM_LIST,
    TEMPLATE_PARAM,
    SUPER_SPEC,
    TYPE_REF,
    TEMPLATE_ARG_LIST,
    TEMPLATE_ARG,
    NAME,
    FIELD_DECL,
    DECLARATOR,
    ARRAY_DIM,
    INITIALIZER,
    ACCESS_LABEL,
    BIND_STMT,
    OPAQUE_BLOCK,           // constraint / activity / covergroup / override
    EXEC_BLOCK,
    BLOCK,                  // procedural { stmt* }
    VAR_DECL,               // procedural declaration
    ASSIGN_STMT,
    CALL_STMT,
    IF_STMT,
    LOOP_STMT,
    MATCH_STMT,
    RETURN_STMT,
    JUMP_STMT,              // break / continue
    EXPR,
    CALL_EXPR,
    REF_PATH,
    ARG_LIST,
    ARG,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::PACKAGE_KW as u16) && (self as u16) <= (Self::NULL_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::PIPE_PIPE as u16)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::INTEGER
                | Self::DECIMAL
                | Self::STRING
                | Self::TRIPLE_STRING
                | Self::TRUE_KW
                | Self::FALSE_KW
                | Self::NULL_KW
        )
    }

    /// Built-in data type keywords (`bit`, `int`, `string`, ...)
    pub fn is_builtin_type(self) -> bool {
        matches!(
            self,
            Self::BIT_KW
                | Self::INT_KW
                | Self::BOOL_KW
                | Self::STRING_KW
                | Self::CHANDLE_KW
                | Self::FLOAT32_KW
                | Self::FLOAT64_KW
        )
    }

    /// Assignment operators usable in procedural statements
    pub fn is_assign_op(self) -> bool {
        matches!(
            self,
            Self::EQ
                | Self::PLUS_EQ
                | Self::MINUS_EQ
                | Self::STAR_EQ
                | Self::SLASH_EQ
                | Self::PERCENT_EQ
                | Self::AMP_EQ
                | Self::PIPE_EQ
                | Self::CARET_EQ
                | Self::SHL_EQ
                | Self::SHR_EQ
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PssLanguage {}

impl rowan::Language for PssLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<PssLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<PssLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<PssLanguage>;
