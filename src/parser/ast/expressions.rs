use super::*;

ast_node!(Expr, EXPR);

impl Expr {
    text_method!();

    /// The call this expression consists of, if it is nothing but a call.
    ///
    /// `f(x)` qualifies; `f(x) + 1` and `(f(x))` do not.
    pub fn as_call(&self) -> Option<CallExpr> {
        if significant_tokens(&self.0).next().is_some() {
            return None;
        }
        let mut children = self.0.children();
        let first = children.next()?;
        if children.next().is_some() {
            return None;
        }
        CallExpr::cast(first)
    }
}

ast_node!(CallExpr, CALL_EXPR);

impl CallExpr {
    text_method!();
    first_child_method!(path, RefPath);
    first_child_method!(arg_list, ArgList);
    has_token_method!(is_super, SUPER_KW, "super.pre_solve();");

    pub fn args(&self) -> impl Iterator<Item = Arg> + '_ {
        self.arg_list()
            .into_iter()
            .flat_map(|list| list.args().collect::<Vec<_>>())
    }
}

ast_node!(RefPath, REF_PATH);

impl RefPath {
    text_method!();

    /// Last named segment: `f` for `a.b[2].f`.
    pub fn last_segment(&self) -> Option<String> {
        significant_tokens(&self.0)
            .filter(|t| {
                matches!(
                    t.kind(),
                    SyntaxKind::IDENT | SyntaxKind::THIS_KW | SyntaxKind::SUPER_KW
                )
            })
            .last()
            .map(|t| t.text().to_string())
    }
}

ast_node!(ArgList, ARG_LIST);

impl ArgList {
    children_method!(args, Arg);
}

ast_node!(Arg, ARG);

impl Arg {
    text_method!();
    first_child_method!(expr, Expr);
}
