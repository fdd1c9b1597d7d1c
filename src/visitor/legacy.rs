//! Flat declaration records.

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use super::{ModelError, TreeVisitor};
use crate::model::{MetaData, MetaKind};
use crate::parser::{AstNode, Member, SourceFile, SyntaxNode};

/// Collects one [`MetaData`] per named declaration.
///
/// Identical records collapse; first-seen order is kept.
#[derive(Debug)]
pub struct MetaVisitor {
    uri: String,
    records: IndexSet<MetaData, FxBuildHasher>,
    scope: Vec<String>,
}

impl MetaVisitor {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            records: IndexSet::with_hasher(FxBuildHasher),
            scope: Vec::new(),
        }
    }

    fn record(&mut self, kind: MetaKind, name: Option<String>, type_name: Option<String>) {
        let Some(name) = name else {
            return;
        };
        let scope = (!self.scope.is_empty()).then(|| self.scope.join("::"));
        self.records.insert(MetaData {
            uri: self.uri.clone(),
            kind,
            name,
            type_name,
            scope,
        });
    }

    /// Record a declaration, then visit its members inside its scope.
    fn scoped(&mut self, kind: MetaKind, name: Option<String>, members: impl Iterator<Item = Member>) {
        self.record(kind, name.clone(), None);
        self.scope.push(name.unwrap_or_default());
        for member in members {
            self.visit_member(&member);
        }
        self.scope.pop();
    }

    fn visit_member(&mut self, member: &Member) {
        match member {
            Member::Package(pkg) => {
                let name = pkg.name().map(|n| n.text());
                let body = pkg.body();
                self.scoped(MetaKind::Package, name, body.iter().flat_map(|b| b.members()));
            }
            Member::Component(decl) => {
                self.scoped(MetaKind::Component, decl.name().map(|n| n.text()), decl.members())
            }
            Member::Action(decl) => {
                self.scoped(MetaKind::Action, decl.name().map(|n| n.text()), decl.members())
            }
            Member::Struct(decl) => {
                self.scoped(MetaKind::Struct, decl.name().map(|n| n.text()), decl.members())
            }
            Member::Monitor(decl) => {
                self.scoped(MetaKind::Monitor, decl.name().map(|n| n.text()), decl.members())
            }
            Member::Extend(decl) => {
                // Members of an extension belong to the extended type
                self.scope
                    .push(decl.target().and_then(|t| t.path()).unwrap_or_default());
                for child in decl.members() {
                    self.visit_member(&child);
                }
                self.scope.pop();
            }
            Member::Enum(decl) => self.record(MetaKind::Enum, decl.name().map(|n| n.text()), None),
            Member::Typedef(decl) => self.record(
                MetaKind::Typedef,
                decl.name().map(|n| n.text()),
                decl.type_ref().map(|t| t.text()),
            ),
            Member::Function(func) => self.record(
                MetaKind::Function,
                func.name().map(|n| n.text()),
                func.return_type().map(|t| t.text()),
            ),
            Member::Field(field) => {
                let type_name = field.type_ref().map(|t| t.text());
                for declarator in field.declarators() {
                    self.record(MetaKind::Field, declarator.name().map(|n| n.text()), type_name.clone());
                }
            }
            Member::Import(_)
            | Member::AccessLabel(_)
            | Member::Bind(_)
            | Member::Exec(_)
            | Member::Opaque(_) => {}
        }
    }
}

impl TreeVisitor for MetaVisitor {
    type Output = Vec<MetaData>;

    fn visit(&mut self, root: &SyntaxNode) -> Result<(), ModelError> {
        let file = SourceFile::cast(root.clone()).ok_or(ModelError::UnexpectedRoot(root.kind()))?;
        for member in file.members() {
            self.visit_member(&member);
        }
        Ok(())
    }

    fn finish(self) -> Vec<MetaData> {
        self.records.into_iter().collect()
    }
}
