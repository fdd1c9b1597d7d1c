use super::*;

// ============================================================================
// Names
// ============================================================================

ast_node!(Name, NAME);

impl Name {
    text_method!();
}

// ============================================================================
// Type references
// ============================================================================

ast_node!(TypeRef, TYPE_REF);

impl TypeRef {
    text_method!();
    first_child_method!(template_args, TemplateArgList);

    /// The builtin keyword (`bit`, `int`, ...) if this is a builtin type.
    pub fn builtin(&self) -> Option<SyntaxKind> {
        significant_tokens(&self.0)
            .next()
            .map(|t| t.kind())
            .filter(|kind| kind.is_builtin_type())
    }

    /// Path of a user type without its template arguments: `pkg::reg_c`.
    pub fn path(&self) -> Option<String> {
        if self.builtin().is_some() {
            return None;
        }
        let path: String = significant_tokens(&self.0)
            .take_while(|t| matches!(t.kind(), SyntaxKind::IDENT | SyntaxKind::COLON_COLON))
            .map(|t| t.text().to_string())
            .collect();
        (!path.is_empty()).then_some(path)
    }

    /// Last segment of a user type path: `reg_c` for `pkg::reg_c<...>`.
    pub fn simple_name(&self) -> Option<String> {
        let path = self.path()?;
        path.rsplit("::").next().map(str::to_string)
    }

    /// Width expression of `bit[N]` / `int[N]`.
    pub fn width(&self) -> Option<String> {
        self.builtin()?;
        let mut tokens = self
            .0
            .descendants_with_tokens()
            .filter_map(|e| e.into_token())
            .skip_while(|t| t.kind() != SyntaxKind::L_BRACKET);
        tokens.next()?;
        let mut depth = 0usize;
        let text = join_tokens(tokens.take_while(|t| match t.kind() {
            SyntaxKind::L_BRACKET => {
                depth += 1;
                true
            }
            SyntaxKind::R_BRACKET if depth == 0 => false,
            SyntaxKind::R_BRACKET => {
                depth -= 1;
                true
            }
            SyntaxKind::IN_KW => depth > 0,
            _ => true,
        }));
        (!text.is_empty()).then_some(text)
    }
}

ast_node!(TemplateArgList, TEMPLATE_ARG_LIST);

impl TemplateArgList {
    children_method!(args, TemplateArg);
}

ast_node!(TemplateArg, TEMPLATE_ARG);

impl TemplateArg {
    text_method!();
    first_child_method!(type_ref, TypeRef);
}

// ============================================================================
// Template parameters
// ============================================================================

ast_node!(TemplateParamList, TEMPLATE_PARAM_LIST);

impl TemplateParamList {
    children_method!(params, TemplateParam);
}

ast_node!(TemplateParam, TEMPLATE_PARAM);

impl TemplateParam {
    first_child_method!(name, Name);
    first_child_method!(type_ref, TypeRef);
    first_child_method!(initializer, Initializer);

    /// Declared kind of the parameter: the category keyword for type
    /// parameters (`type`, `struct`, ...), otherwise the value type.
    pub fn param_type(&self) -> Option<String> {
        if let Some(token) = significant_tokens(&self.0).next() {
            if token.kind().is_keyword() && !token.kind().is_builtin_type() {
                return Some(token.text().to_string());
            }
        }
        self.type_ref().map(|t| t.text())
    }

    pub fn default_value(&self) -> Option<String> {
        self.initializer().and_then(|i| i.value())
    }
}

ast_node!(SuperSpec, SUPER_SPEC);

impl SuperSpec {
    first_child_method!(type_ref, TypeRef);
}

// ============================================================================
// Declarators
// ============================================================================

ast_node!(Declarator, DECLARATOR);

impl Declarator {
    first_child_method!(name, Name);
    first_child_method!(array_dim, ArrayDim);
    first_child_method!(initializer, Initializer);
}

ast_node!(ArrayDim, ARRAY_DIM);

impl ArrayDim {
    /// The size expression between the brackets.
    pub fn size(&self) -> Option<String> {
        self.0.children().find_map(Expr::cast).map(|e| e.text())
    }
}

ast_node!(Initializer, INITIALIZER);

impl Initializer {
    /// Everything after the `=`, trimmed.
    pub fn value(&self) -> Option<String> {
        text_after(&self.0, SyntaxKind::EQ)
    }
}
