use super::*;

ast_node!(Block, BLOCK);

impl Block {
    children_method!(statements, Stmt);
}

/// Any procedural statement
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stmt {
    Block(Block),
    VarDecl(VarDecl),
    Assign(AssignStmt),
    Call(CallStmt),
    If(IfStmt),
    Loop(LoopStmt),
    Match(MatchStmt),
    Return(ReturnStmt),
    Jump(JumpStmt),
}

impl AstNode for Stmt {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::BLOCK
                | SyntaxKind::VAR_DECL
                | SyntaxKind::ASSIGN_STMT
                | SyntaxKind::CALL_STMT
                | SyntaxKind::IF_STMT
                | SyntaxKind::LOOP_STMT
                | SyntaxKind::MATCH_STMT
                | SyntaxKind::RETURN_STMT
                | SyntaxKind::JUMP_STMT
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::BLOCK => Some(Self::Block(Block(node))),
            SyntaxKind::VAR_DECL => Some(Self::VarDecl(VarDecl(node))),
            SyntaxKind::ASSIGN_STMT => Some(Self::Assign(AssignStmt(node))),
            SyntaxKind::CALL_STMT => Some(Self::Call(CallStmt(node))),
            SyntaxKind::IF_STMT => Some(Self::If(IfStmt(node))),
            SyntaxKind::LOOP_STMT => Some(Self::Loop(LoopStmt(node))),
            SyntaxKind::MATCH_STMT => Some(Self::Match(MatchStmt(node))),
            SyntaxKind::RETURN_STMT => Some(Self::Return(ReturnStmt(node))),
            SyntaxKind::JUMP_STMT => Some(Self::Jump(JumpStmt(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Block(n) => &n.0,
            Self::VarDecl(n) => &n.0,
            Self::Assign(n) => &n.0,
            Self::Call(n) => &n.0,
            Self::If(n) => &n.0,
            Self::Loop(n) => &n.0,
            Self::Match(n) => &n.0,
            Self::Return(n) => &n.0,
            Self::Jump(n) => &n.0,
        }
    }
}

impl Stmt {
    /// Statements nested directly inside this one (branch and loop bodies).
    pub fn nested(&self) -> Vec<Stmt> {
        match self {
            Self::Block(block) => block.statements().collect(),
            Self::If(_) | Self::Loop(_) | Self::Match(_) => {
                self.syntax().children().filter_map(Stmt::cast).collect()
            }
            _ => Vec::new(),
        }
    }
}

ast_node!(VarDecl, VAR_DECL);

impl VarDecl {
    first_child_method!(type_ref, TypeRef);
    children_method!(declarators, Declarator);
}

ast_node!(AssignStmt, ASSIGN_STMT);

impl AssignStmt {
    first_child_method!(target, RefPath);
    first_child_method!(value, Expr);

    /// The assignment operator token kind (`=`, `+=`, ...).
    pub fn op(&self) -> Option<SyntaxKind> {
        significant_tokens(&self.0)
            .map(|t| t.kind())
            .find(|kind| kind.is_assign_op())
    }
}

ast_node!(CallStmt, CALL_STMT);

impl CallStmt {
    first_child_method!(call, CallExpr);
}

ast_node!(IfStmt, IF_STMT);
ast_node!(LoopStmt, LOOP_STMT);
ast_node!(MatchStmt, MATCH_STMT);
ast_node!(ReturnStmt, RETURN_STMT);
ast_node!(JumpStmt, JUMP_STMT);
