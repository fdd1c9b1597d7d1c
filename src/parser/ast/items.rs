use super::*;

// ============================================================================
// Root
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    children_method!(members, Member);
}

ast_node!(ItemBody, ITEM_BODY);

impl ItemBody {
    children_method!(members, Member);
}

// ============================================================================
// Members
// ============================================================================

/// Any member of a package or type body
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Member {
    Package(Package),
    Import(Import),
    Component(Component),
    Struct(StructDecl),
    Action(ActionDecl),
    Monitor(MonitorDecl),
    Extend(ExtendDecl),
    Enum(EnumDecl),
    Typedef(TypedefDecl),
    Function(FunctionDecl),
    Field(FieldDecl),
    AccessLabel(AccessLabel),
    Bind(BindStmt),
    Exec(ExecBlock),
    /// Constraint, activity, covergroup or override block
    Opaque(OpaqueBlock),
}

impl AstNode for Member {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::PACKAGE
                | SyntaxKind::IMPORT
                | SyntaxKind::COMPONENT
                | SyntaxKind::STRUCT_DECL
                | SyntaxKind::ACTION_DECL
                | SyntaxKind::MONITOR_DECL
                | SyntaxKind::EXTEND_DECL
                | SyntaxKind::ENUM_DECL
                | SyntaxKind::TYPEDEF_DECL
                | SyntaxKind::FUNCTION_DECL
                | SyntaxKind::FIELD_DECL
                | SyntaxKind::ACCESS_LABEL
                | SyntaxKind::BIND_STMT
                | SyntaxKind::EXEC_BLOCK
                | SyntaxKind::OPAQUE_BLOCK
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::PACKAGE => Some(Self::Package(Package(node))),
            SyntaxKind::IMPORT => Some(Self::Import(Import(node))),
            SyntaxKind::COMPONENT => Some(Self::Component(Component(node))),
            SyntaxKind::STRUCT_DECL => Some(Self::Struct(StructDecl(node))),
            SyntaxKind::ACTION_DECL => Some(Self::Action(ActionDecl(node))),
            SyntaxKind::MONITOR_DECL => Some(Self::Monitor(MonitorDecl(node))),
            SyntaxKind::EXTEND_DECL => Some(Self::Extend(ExtendDecl(node))),
            SyntaxKind::ENUM_DECL => Some(Self::Enum(EnumDecl(node))),
            SyntaxKind::TYPEDEF_DECL => Some(Self::Typedef(TypedefDecl(node))),
            SyntaxKind::FUNCTION_DECL => Some(Self::Function(FunctionDecl(node))),
            SyntaxKind::FIELD_DECL => Some(Self::Field(FieldDecl(node))),
            SyntaxKind::ACCESS_LABEL => Some(Self::AccessLabel(AccessLabel(node))),
            SyntaxKind::BIND_STMT => Some(Self::Bind(BindStmt(node))),
            SyntaxKind::EXEC_BLOCK => Some(Self::Exec(ExecBlock(node))),
            SyntaxKind::OPAQUE_BLOCK => Some(Self::Opaque(OpaqueBlock(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Package(n) => &n.0,
            Self::Import(n) => &n.0,
            Self::Component(n) => &n.0,
            Self::Struct(n) => &n.0,
            Self::Action(n) => &n.0,
            Self::Monitor(n) => &n.0,
            Self::Extend(n) => &n.0,
            Self::Enum(n) => &n.0,
            Self::Typedef(n) => &n.0,
            Self::Function(n) => &n.0,
            Self::Field(n) => &n.0,
            Self::AccessLabel(n) => &n.0,
            Self::Bind(n) => &n.0,
            Self::Exec(n) => &n.0,
            Self::Opaque(n) => &n.0,
        }
    }
}

// ============================================================================
// Packages
// ============================================================================

ast_node!(Package, PACKAGE);

impl Package {
    first_child_method!(name, Name);
    first_child_method!(body, ItemBody);
}

ast_node!(Import, IMPORT);

// ============================================================================
// Type declarations
// ============================================================================

/// Accessors shared by every declaration with a name and a member body.
macro_rules! type_decl_methods {
    () => {
        first_child_method!(name, Name);
        first_child_method!(template_params, TemplateParamList);
        first_child_method!(super_spec, SuperSpec);
        first_child_method!(body, ItemBody);

        /// Members of the body, empty if the body is missing.
        pub fn members(&self) -> impl Iterator<Item = Member> + '_ {
            self.body()
                .into_iter()
                .flat_map(|body| body.members().collect::<Vec<_>>())
        }

        /// The super type written after `:`.
        pub fn super_type(&self) -> Option<TypeRef> {
            self.super_spec().and_then(|s| s.type_ref())
        }
    };
}

ast_node!(Component, COMPONENT);

impl Component {
    type_decl_methods!();
    has_token_method!(is_pure, PURE_KW, "pure component C {}");
}

ast_node!(StructDecl, STRUCT_DECL);

impl StructDecl {
    type_decl_methods!();
    find_token_kind_method!(
        struct_kind,
        [STRUCT_KW, BUFFER_KW, STREAM_KW, STATE_KW, RESOURCE_KW],
        "Get the struct kind keyword."
    );
}

ast_node!(ActionDecl, ACTION_DECL);

impl ActionDecl {
    type_decl_methods!();
    has_token_method!(is_abstract, ABSTRACT_KW, "abstract action A {}");
}

ast_node!(MonitorDecl, MONITOR_DECL);

impl MonitorDecl {
    type_decl_methods!();
}

ast_node!(ExtendDecl, EXTEND_DECL);

impl ExtendDecl {
    first_child_method!(target, TypeRef);
    first_child_method!(body, ItemBody);

    pub fn members(&self) -> impl Iterator<Item = Member> + '_ {
        self.body()
            .into_iter()
            .flat_map(|body| body.members().collect::<Vec<_>>())
    }
}

ast_node!(EnumDecl, ENUM_DECL);

impl EnumDecl {
    first_child_method!(name, Name);
}

ast_node!(TypedefDecl, TYPEDEF_DECL);

impl TypedefDecl {
    first_child_method!(name, Name);
    first_child_method!(type_ref, TypeRef);
}

// ============================================================================
// Functions
// ============================================================================

ast_node!(FunctionDecl, FUNCTION_DECL);

impl FunctionDecl {
    first_child_method!(name, Name);
    first_child_method!(param_list, ParamList);
    first_child_method!(body, Block);
    has_token_method!(is_pure, PURE_KW, "pure function int f();");
    has_token_method!(is_static, STATIC_KW, "static function void f();");
    has_token_method!(is_import, IMPORT_KW, "import function void f();");
    find_token_kind_method!(platform, [TARGET_KW, SOLVE_KW], "Get the platform qualifier keyword.");

    /// Declared return type; `None` for `void` and for prototype references.
    pub fn return_type(&self) -> Option<TypeRef> {
        self.0.children().find_map(TypeRef::cast)
    }

    pub fn params(&self) -> impl Iterator<Item = Param> + '_ {
        self.param_list()
            .into_iter()
            .flat_map(|list| list.params().collect::<Vec<_>>())
    }
}

ast_node!(ParamList, PARAM_LIST);

impl ParamList {
    children_method!(params, Param);
}

ast_node!(Param, PARAM);

impl Param {
    first_child_method!(name, Name);
    first_child_method!(type_ref, TypeRef);
    first_child_method!(initializer, Initializer);
    find_token_kind_method!(direction, [IN_KW, OUT_KW, INOUT_KW, REF_KW], "Get the direction keyword.");

    /// The declared type, or the generic category keyword (`type`, `struct`).
    pub fn param_type(&self) -> Option<String> {
        if let Some(t) = self.type_ref() {
            return Some(t.text());
        }
        significant_tokens(&self.0)
            .find(|t| matches!(t.kind(), SyntaxKind::TYPE_KW | SyntaxKind::STRUCT_KW))
            .map(|t| t.text().to_string())
    }

    pub fn default_value(&self) -> Option<String> {
        self.initializer().and_then(|i| i.value())
    }
}

// ============================================================================
// Fields
// ============================================================================

ast_node!(FieldDecl, FIELD_DECL);

impl FieldDecl {
    first_child_method!(type_ref, TypeRef);
    children_method!(declarators, Declarator);
    has_token_method!(is_rand, RAND_KW, "rand bit[4] x;");
    has_token_method!(is_static, STATIC_KW, "static const int N = 4;");
    has_token_method!(is_const, CONST_KW, "static const int N = 4;");
    find_token_kind_method!(
        access,
        [PUBLIC_KW, PRIVATE_KW, PROTECTED_KW],
        "Get the access keyword written on the field itself."
    );
}

ast_node!(AccessLabel, ACCESS_LABEL);

impl AccessLabel {
    find_token_kind_method!(access, [PUBLIC_KW, PRIVATE_KW, PROTECTED_KW], "Get the access keyword.");
}

ast_node!(BindStmt, BIND_STMT);

// ============================================================================
// Behavior blocks
// ============================================================================

ast_node!(ExecBlock, EXEC_BLOCK);

impl ExecBlock {
    first_child_method!(body, Block);

    /// The exec kind: `body`, `init_down`, `pre_solve`, ...
    pub fn kind(&self) -> Option<String> {
        significant_tokens(&self.0)
            .find(|t| t.kind() == SyntaxKind::IDENT)
            .map(|t| t.text().to_string())
    }

    /// True for `exec K L = """..."""` target-template blocks.
    pub fn is_template(&self) -> bool {
        has_token(&self.0, SyntaxKind::EQ)
    }
}

ast_node!(OpaqueBlock, OPAQUE_BLOCK);

impl OpaqueBlock {
    /// The keyword that introduced the block (`constraint`, `activity`, ...).
    pub fn keyword(&self) -> Option<SyntaxKind> {
        significant_tokens(&self.0)
            .map(|t| t.kind())
            .find(|kind| {
                matches!(
                    kind,
                    SyntaxKind::CONSTRAINT_KW
                        | SyntaxKind::ACTIVITY_KW
                        | SyntaxKind::COVERGROUP_KW
                        | SyntaxKind::OVERRIDE_KW
                )
            })
    }
}
