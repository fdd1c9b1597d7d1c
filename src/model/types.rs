//! Domain objects extracted from PSS source.
//!
//! Contains the closed set of model objects (`PssObject`), their tag
//! (`ObjectKind`) and the small enums they carry.

use std::fmt;

// ============================================================================
// TAGS AND SMALL ENUMS
// ============================================================================

/// The kind of a model object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Component,
    Instance,
    Assignment,
    Function,
    FunctionCall,
    RegisterComponent,
    RegisterGroup,
    RegisterDefinition,
}

impl ObjectKind {
    /// Get a display string for this kind (capitalized for UI display).
    pub fn display(&self) -> &'static str {
        match self {
            Self::Component => "Component",
            Self::Instance => "Instance",
            Self::Assignment => "Assignment",
            Self::Function => "Function",
            Self::FunctionCall => "Function Call",
            Self::RegisterComponent => "Register Component",
            Self::RegisterGroup => "Register Group",
            Self::RegisterDefinition => "Register Definition",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// Access modifier written on a field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessModifier {
    Public,
    Private,
    Protected,
}

impl AccessModifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
        }
    }
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a function is implemented: on the target or at solve time
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlatformQualifier {
    Target,
    Solve,
}

impl PlatformQualifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Target => "target",
            Self::Solve => "solve",
        }
    }
}

impl fmt::Display for PlatformQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assignment operators of procedural statements
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    ShlAssign,
    ShrAssign,
}

impl AssignOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::ModAssign => "%=",
            Self::AndAssign => "&=",
            Self::OrAssign => "|=",
            Self::XorAssign => "^=",
            Self::ShlAssign => "<<=",
            Self::ShrAssign => ">>=",
        }
    }
}

impl fmt::Display for AssignOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PARAMETERS
// ============================================================================

/// A template parameter of a component or a parameter of a function
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub name: Option<String>,
    /// Declared type, or the category keyword (`type`, `struct`) for generic parameters
    pub param_type: Option<String>,
    /// Default value as written
    pub default: Option<String>,
}

// ============================================================================
// MODEL OBJECTS
// ============================================================================

/// A typed object extracted from a PSS source file.
///
/// Objects are created in one pass and never mutated afterwards. Every field
/// that is absent in the source is `None`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PssObject {
    /// `[pure] component N [<params>] [: S] { ... }`
    Component {
        name: Option<String>,
        is_pure: bool,
        template_params: Vec<Parameter>,
        /// Supertype reference as written
        super_spec: Option<String>,
    },

    /// A field of a type body, or a procedural declaration without initializer
    Instance {
        name: Option<String>,
        instance_type: Option<String>,
        array_count: Option<String>,
        is_random: bool,
        is_static_const: bool,
        access_modifier: Option<AccessModifier>,
        default_value: Option<String>,
    },

    /// A procedural assignment, declaration with initializer, or call argument.
    ///
    /// Call arguments carry only `value`.
    Assignment {
        target: Option<String>,
        operation: Option<AssignOp>,
        value: Option<String>,
        data_type: Option<String>,
    },

    Function {
        name: Option<String>,
        platform: Option<PlatformQualifier>,
        is_pure: bool,
        is_static: bool,
        parameters: Vec<Parameter>,
        /// `None` for `void`
        return_type: Option<String>,
    },

    /// A procedural call. Arguments become `children`: nested calls stay
    /// calls, anything else becomes a value-only `Assignment`.
    FunctionCall {
        name: Option<String>,
        is_super: bool,
        /// The called path exactly as written
        ref_path: Option<String>,
        children: Vec<PssObject>,
    },

    /// `component X : reg_c<R, ACC, SZ> { ... }`
    RegisterComponent {
        name: Option<String>,
        access_type: Option<String>,
        register_length: Option<String>,
        based_on_struct: Option<String>,
    },

    /// `component G : reg_group_c[<ADDR>] { ... }`
    RegisterGroup {
        name: Option<String>,
        base_address: Option<String>,
    },

    /// A field typed `reg_c<R, ACC, SZ>`
    RegisterDefinition {
        name: Option<String>,
        access_type: Option<String>,
        register_length: Option<String>,
        based_on_struct: Option<String>,
        array_count: Option<String>,
    },
}

impl PssObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Component { .. } => ObjectKind::Component,
            Self::Instance { .. } => ObjectKind::Instance,
            Self::Assignment { .. } => ObjectKind::Assignment,
            Self::Function { .. } => ObjectKind::Function,
            Self::FunctionCall { .. } => ObjectKind::FunctionCall,
            Self::RegisterComponent { .. } => ObjectKind::RegisterComponent,
            Self::RegisterGroup { .. } => ObjectKind::RegisterGroup,
            Self::RegisterDefinition { .. } => ObjectKind::RegisterDefinition,
        }
    }

    /// The object's name. For assignments this is the target.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Component { name, .. }
            | Self::Instance { name, .. }
            | Self::Function { name, .. }
            | Self::FunctionCall { name, .. }
            | Self::RegisterComponent { name, .. }
            | Self::RegisterGroup { name, .. }
            | Self::RegisterDefinition { name, .. } => name.as_deref(),
            Self::Assignment { target, .. } => target.as_deref(),
        }
    }

    /// Nested children. Only function calls have any.
    pub fn children(&self) -> &[PssObject] {
        match self {
            Self::FunctionCall { children, .. } => children,
            _ => &[],
        }
    }

    /// Call nesting depth: 1 for a call with no nested calls, 0 for non-calls.
    pub fn depth(&self) -> usize {
        match self {
            Self::FunctionCall { children, .. } => {
                1 + children.iter().map(PssObject::depth).max().unwrap_or(0)
            }
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str, children: Vec<PssObject>) -> PssObject {
        PssObject::FunctionCall {
            name: Some(name.to_string()),
            is_super: false,
            ref_path: Some(name.to_string()),
            children,
        }
    }

    fn arg(value: &str) -> PssObject {
        PssObject::Assignment {
            target: None,
            operation: None,
            value: Some(value.to_string()),
            data_type: None,
        }
    }

    #[test]
    fn test_call_depth() {
        let tree = call("a", vec![call("b", vec![call("c", vec![arg("1")])]), arg("2")]);
        assert_eq!(tree.depth(), 3);
        assert_eq!(arg("1").depth(), 0);
    }

    #[test]
    fn test_name_of_assignment_is_target() {
        let assign = PssObject::Assignment {
            target: Some("x".to_string()),
            operation: Some(AssignOp::AddAssign),
            value: Some("1".to_string()),
            data_type: None,
        };
        assert_eq!(assign.name(), Some("x"));
        assert_eq!(assign.kind(), ObjectKind::Assignment);
        assert_eq!(arg("1").name(), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ObjectKind::FunctionCall.to_string(), "Function Call");
        assert_eq!(AssignOp::ShrAssign.to_string(), ">>=");
        assert_eq!(PlatformQualifier::Solve.as_str(), "solve");
    }
}
