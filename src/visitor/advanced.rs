//! Typed model extraction.

use tracing::trace;

use super::{ModelError, TreeVisitor};
use crate::model::{AccessModifier, AssignOp, Parameter, PlatformQualifier, PssObject};
use crate::parser::{
    Arg, AstNode, Block, CallExpr, Component, Declarator, FieldDecl, FunctionDecl, Member, Param,
    SourceFile, Stmt, SyntaxKind, SyntaxNode, TemplateParam, TypeRef, VarDecl,
};

const REGISTER_TYPE: &str = "reg_c";
const REGISTER_GROUP_TYPE: &str = "reg_group_c";

/// Collects [`PssObject`]s from one source file.
#[derive(Debug)]
pub struct ModelVisitor {
    uri: String,
    objects: Vec<PssObject>,
}

impl ModelVisitor {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            objects: Vec::new(),
        }
    }

    fn visit_member(&mut self, member: &Member) {
        match member {
            Member::Package(pkg) => {
                if let Some(body) = pkg.body() {
                    self.visit_members(body.members());
                }
            }
            Member::Component(comp) => {
                self.objects.push(component_object(comp));
                self.visit_members(comp.members());
            }
            Member::Struct(decl) => self.visit_members(decl.members()),
            Member::Action(decl) => self.visit_members(decl.members()),
            Member::Monitor(decl) => self.visit_members(decl.members()),
            Member::Extend(decl) => self.visit_members(decl.members()),
            Member::Function(func) => {
                self.objects.push(function_object(func));
                if let Some(body) = func.body() {
                    self.visit_block(&body);
                }
            }
            Member::Field(field) => {
                for declarator in field.declarators() {
                    self.objects.push(field_object(field, &declarator));
                }
            }
            Member::Exec(exec) => {
                if let Some(body) = exec.body() {
                    self.visit_block(&body);
                }
            }
            Member::Import(_)
            | Member::Enum(_)
            | Member::Typedef(_)
            | Member::AccessLabel(_)
            | Member::Bind(_)
            | Member::Opaque(_) => {}
        }
    }

    fn visit_members(&mut self, members: impl Iterator<Item = Member>) {
        for member in members {
            self.visit_member(&member);
        }
    }

    fn visit_block(&mut self, block: &Block) {
        for stmt in block.statements() {
            self.visit_stmt(&stmt);
        }
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VarDecl(decl) => {
                for declarator in decl.declarators() {
                    self.objects.push(local_object(decl, &declarator));
                }
            }
            Stmt::Assign(assign) => self.objects.push(PssObject::Assignment {
                target: assign.target().map(|t| t.text()),
                operation: assign.op().and_then(assign_op),
                value: assign.value().map(|v| v.text()).filter(|v| !v.is_empty()),
                data_type: None,
            }),
            Stmt::Call(call) => {
                if let Some(call) = call.call() {
                    self.objects.push(call_object(&call));
                }
            }
            Stmt::Return(_) | Stmt::Jump(_) => {}
            Stmt::Block(_) | Stmt::If(_) | Stmt::Loop(_) | Stmt::Match(_) => {
                for nested in stmt.nested() {
                    self.visit_stmt(&nested);
                }
            }
        }
    }
}

impl TreeVisitor for ModelVisitor {
    type Output = Vec<PssObject>;

    fn visit(&mut self, root: &SyntaxNode) -> Result<(), ModelError> {
        let file = SourceFile::cast(root.clone()).ok_or(ModelError::UnexpectedRoot(root.kind()))?;
        for member in file.members() {
            self.visit_member(&member);
        }
        trace!(uri = %self.uri, objects = self.objects.len(), "model extracted");
        Ok(())
    }

    fn finish(self) -> Vec<PssObject> {
        self.objects
    }
}

// ============================================================================
// Object builders
// ============================================================================

fn component_object(comp: &Component) -> PssObject {
    let name = comp.name().map(|n| n.text());
    let super_type = comp.super_type();

    match super_type.as_ref().and_then(TypeRef::simple_name).as_deref() {
        Some(REGISTER_TYPE) => {
            let shape = super_type.as_ref().map(RegisterShape::of).unwrap_or_default();
            PssObject::RegisterComponent {
                name,
                access_type: shape.access_type,
                register_length: shape.register_length,
                based_on_struct: shape.based_on_struct,
            }
        }
        Some(REGISTER_GROUP_TYPE) => PssObject::RegisterGroup {
            name,
            base_address: super_type
                .as_ref()
                .and_then(|t| t.template_args())
                .and_then(|args| args.args().next())
                .map(|arg| arg.text()),
        },
        _ => PssObject::Component {
            name,
            is_pure: comp.is_pure(),
            template_params: comp
                .template_params()
                .map(|list| list.params().map(|p| template_parameter(&p)).collect())
                .unwrap_or_default(),
            super_spec: super_type.map(|t| t.text()),
        },
    }
}

fn field_object(field: &FieldDecl, declarator: &Declarator) -> PssObject {
    let name = declarator.name().map(|n| n.text());
    let array_count = declarator.array_dim().and_then(|d| d.size());
    let field_type = field.type_ref();

    if let Some(ty) = field_type
        .as_ref()
        .filter(|t| t.simple_name().as_deref() == Some(REGISTER_TYPE))
    {
        let shape = RegisterShape::of(ty);
        return PssObject::RegisterDefinition {
            name,
            access_type: shape.access_type,
            register_length: shape.register_length,
            based_on_struct: shape.based_on_struct,
            array_count,
        };
    }

    PssObject::Instance {
        name,
        instance_type: field_type.map(|t| t.text()),
        array_count,
        is_random: field.is_rand(),
        is_static_const: field.is_static() && field.is_const(),
        access_modifier: field.access().and_then(access_modifier),
        default_value: declarator.initializer().and_then(|i| i.value()),
    }
}

/// A procedural declaration: an Assignment when initialized, else an Instance.
fn local_object(decl: &VarDecl, declarator: &Declarator) -> PssObject {
    let name = declarator.name().map(|n| n.text());
    let data_type = decl.type_ref().map(|t| t.text());

    match declarator.initializer() {
        Some(init) => PssObject::Assignment {
            target: name,
            operation: Some(AssignOp::Assign),
            value: init.value(),
            data_type,
        },
        None => PssObject::Instance {
            name,
            instance_type: data_type,
            array_count: declarator.array_dim().and_then(|d| d.size()),
            is_random: false,
            is_static_const: false,
            access_modifier: None,
            default_value: None,
        },
    }
}

fn function_object(func: &FunctionDecl) -> PssObject {
    PssObject::Function {
        name: func.name().map(|n| n.text()),
        platform: func.platform().map(|kind| match kind {
            SyntaxKind::TARGET_KW => PlatformQualifier::Target,
            _ => PlatformQualifier::Solve,
        }),
        is_pure: func.is_pure(),
        is_static: func.is_static(),
        parameters: func.params().map(|p| function_parameter(&p)).collect(),
        return_type: func.return_type().map(|t| t.text()),
    }
}

fn call_object(call: &CallExpr) -> PssObject {
    let path = call.path();
    PssObject::FunctionCall {
        name: path.as_ref().and_then(|p| p.last_segment()),
        is_super: call.is_super(),
        ref_path: path.map(|p| p.text()),
        children: call.args().map(|arg| argument_object(&arg)).collect(),
    }
}

fn argument_object(arg: &Arg) -> PssObject {
    if let Some(call) = arg.expr().and_then(|e| e.as_call()) {
        return call_object(&call);
    }
    let text = arg.text();
    PssObject::Assignment {
        target: None,
        operation: None,
        value: (!text.is_empty()).then_some(text),
        data_type: None,
    }
}

fn template_parameter(param: &TemplateParam) -> Parameter {
    Parameter {
        name: param.name().map(|n| n.text()),
        param_type: param.param_type(),
        default: param.default_value(),
    }
}

fn function_parameter(param: &Param) -> Parameter {
    Parameter {
        name: param.name().map(|n| n.text()),
        param_type: param.param_type(),
        default: param.default_value(),
    }
}

fn access_modifier(kind: SyntaxKind) -> Option<AccessModifier> {
    match kind {
        SyntaxKind::PUBLIC_KW => Some(AccessModifier::Public),
        SyntaxKind::PRIVATE_KW => Some(AccessModifier::Private),
        SyntaxKind::PROTECTED_KW => Some(AccessModifier::Protected),
        _ => None,
    }
}

fn assign_op(kind: SyntaxKind) -> Option<AssignOp> {
    let op = match kind {
        SyntaxKind::EQ => AssignOp::Assign,
        SyntaxKind::PLUS_EQ => AssignOp::AddAssign,
        SyntaxKind::MINUS_EQ => AssignOp::SubAssign,
        SyntaxKind::STAR_EQ => AssignOp::MulAssign,
        SyntaxKind::SLASH_EQ => AssignOp::DivAssign,
        SyntaxKind::PERCENT_EQ => AssignOp::ModAssign,
        SyntaxKind::AMP_EQ => AssignOp::AndAssign,
        SyntaxKind::PIPE_EQ => AssignOp::OrAssign,
        SyntaxKind::CARET_EQ => AssignOp::XorAssign,
        SyntaxKind::SHL_EQ => AssignOp::ShlAssign,
        SyntaxKind::SHR_EQ => AssignOp::ShrAssign,
        _ => return None,
    };
    Some(op)
}

/// The three arguments of `reg_c<R, ACC, SZ>`.
#[derive(Debug, Default)]
struct RegisterShape {
    access_type: Option<String>,
    register_length: Option<String>,
    based_on_struct: Option<String>,
}

impl RegisterShape {
    /// `R` is either a user struct (recorded as the base) or `bit[N]`, whose
    /// width stands in for a missing `SZ`. A missing `ACC` stays absent.
    fn of(ty: &TypeRef) -> Self {
        let args: Vec<_> = ty
            .template_args()
            .map(|list| list.args().collect())
            .unwrap_or_default();

        let (based_on_struct, width) = match args.first() {
            Some(first) => match first.type_ref() {
                Some(r) if r.builtin().is_some() => (None, r.width()),
                Some(r) => (Some(r.text()), None),
                None => (Some(first.text()), None),
            },
            None => (None, None),
        };

        Self {
            access_type: args.get(1).map(|a| a.text()),
            register_length: args.get(2).map(|a| a.text()).or(width),
            based_on_struct,
        }
    }
}
