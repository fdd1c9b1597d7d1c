//! Flat declaration records for the legacy extraction path.

use std::fmt;

/// Kind of a named declaration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetaKind {
    Package,
    Component,
    Action,
    /// `struct`, `buffer`, `stream`, `state` or `resource`
    Struct,
    Monitor,
    Enum,
    Typedef,
    Function,
    Field,
}

impl MetaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Package => "package",
            Self::Component => "component",
            Self::Action => "action",
            Self::Struct => "struct",
            Self::Monitor => "monitor",
            Self::Enum => "enum",
            Self::Typedef => "typedef",
            Self::Function => "function",
            Self::Field => "field",
        }
    }
}

impl fmt::Display for MetaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named declaration.
///
/// Records compare by value; identical records from the same file collapse
/// to one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MetaData {
    pub uri: String,
    pub kind: MetaKind,
    pub name: String,
    /// Declared type of fields and typedefs, return type of functions
    pub type_name: Option<String>,
    /// `::`-joined names of the enclosing declarations
    pub scope: Option<String>,
}
