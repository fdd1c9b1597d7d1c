//! Hover markdown and doc-comment rendering for model objects.

use crate::model::{Parameter, PssObject};

const UNNAMED: &str = "Unnamed";
const UNKNOWN_TYPE: &str = "unknown type";

fn or_unnamed(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or(UNNAMED)
}

fn or_unknown_type(ty: &Option<String>) -> &str {
    ty.as_deref().unwrap_or(UNKNOWN_TYPE)
}

/// Markdown shown when hovering an object.
pub fn hover_markdown(object: &PssObject) -> String {
    let mut md = String::new();
    write_markdown(&mut md, object);
    md
}

fn write_markdown(md: &mut String, object: &PssObject) {
    match object {
        PssObject::Component {
            name,
            is_pure,
            template_params,
            super_spec,
        } => {
            md.push_str(&format!("### Component: {}\n\n", or_unnamed(name)));
            if *is_pure {
                md.push_str("- **Pure**: Yes\n");
            }
            if let Some(super_spec) = super_spec {
                md.push_str(&format!("- **Extends**: {super_spec}\n"));
            }
            write_parameter_list(md, "Template Parameters", template_params);
        }
        PssObject::Instance {
            name,
            instance_type,
            array_count,
            is_random,
            is_static_const,
            access_modifier,
            default_value,
        } => {
            md.push_str(&format!("### Instance: {}\n\n", or_unnamed(name)));
            md.push_str(&format!("- **Type**: {}\n", or_unknown_type(instance_type)));
            if let Some(count) = array_count {
                md.push_str(&format!("- **Array Count**: {count}\n"));
            }
            if *is_random {
                md.push_str("- **Random**: Yes\n");
            }
            if *is_static_const {
                md.push_str("- **Static Const**: Yes\n");
            }
            if let Some(access) = access_modifier {
                md.push_str(&format!("- **Access Modifier**: {access}\n"));
            }
            if let Some(value) = default_value {
                md.push_str(&format!("- **Default Value**: {value}\n"));
            }
        }
        PssObject::Assignment {
            target,
            operation,
            value,
            data_type,
        } => {
            md.push_str(&format!("### Assignment: {}\n\n", or_unnamed(target)));
            match operation {
                Some(op) => md.push_str(&format!("- **Operation**: {op}\n")),
                None => md.push_str("- **Operation**: unknown operation\n"),
            }
            md.push_str(&format!("- **Value**: {}\n", value.as_deref().unwrap_or("unknown value")));
            if let Some(data_type) = data_type {
                md.push_str(&format!("- **Data Type**: {data_type}\n"));
            }
        }
        PssObject::Function {
            name,
            platform,
            is_pure,
            is_static,
            parameters,
            return_type,
        } => {
            md.push_str(&format!("### Function: {}\n\n", or_unnamed(name)));
            if let Some(platform) = platform {
                md.push_str(&format!("- **Platform Qualifier**: **{platform}**\n"));
            }
            if *is_pure {
                md.push_str("- **Pure**: Yes\n");
            }
            if *is_static {
                md.push_str("- **Static**: Yes\n");
            }
            write_parameter_list(md, "Parameters", parameters);
            if let Some(ret) = return_type {
                md.push_str(&format!("#### Returns\n{ret}\n\n"));
            }
        }
        PssObject::FunctionCall { .. } => write_call(md, object, 0),
        PssObject::RegisterComponent {
            name,
            access_type,
            register_length,
            based_on_struct,
        } => {
            md.push_str(&format!("### Register Component: {}\n\n", or_unnamed(name)));
            write_register_lines(md, access_type, register_length, based_on_struct);
        }
        PssObject::RegisterGroup { name, base_address } => {
            md.push_str(&format!("### Register Group: {}\n\n", or_unnamed(name)));
            if let Some(address) = base_address {
                md.push_str(&format!("- **Base Address**: {address}\n"));
            }
        }
        PssObject::RegisterDefinition {
            name,
            access_type,
            register_length,
            based_on_struct,
            array_count,
        } => {
            md.push_str(&format!("### Register Definition: {}\n\n", or_unnamed(name)));
            write_register_lines(md, access_type, register_length, based_on_struct);
            if let Some(count) = array_count {
                md.push_str(&format!("- **Instance Array Count**: {count}\n"));
            }
        }
    }
}

fn write_parameter_list(md: &mut String, heading: &str, params: &[Parameter]) {
    if params.is_empty() {
        return;
    }
    md.push_str(&format!("#### {heading}\n"));
    for param in params {
        md.push_str(&format!(
            "- **{}** : {}",
            or_unnamed(&param.name),
            or_unknown_type(&param.param_type)
        ));
        if let Some(default) = &param.default {
            md.push_str(&format!(" (default: {default})"));
        }
        md.push('\n');
    }
    md.push('\n');
}

fn write_register_lines(
    md: &mut String,
    access_type: &Option<String>,
    register_length: &Option<String>,
    based_on_struct: &Option<String>,
) {
    if let Some(access) = access_type {
        md.push_str(&format!("- **Access Type**: {access}\n"));
    }
    if let Some(length) = register_length {
        md.push_str(&format!("- **Register Length**: {length}\n"));
    }
    if let Some(base) = based_on_struct {
        md.push_str(&format!("- **Based on Struct**: {base}\n"));
    }
}

/// Calls nest: each level indents two more spaces.
fn write_call(md: &mut String, call: &PssObject, depth: usize) {
    let PssObject::FunctionCall {
        name,
        is_super,
        ref_path,
        children,
    } = call
    else {
        return;
    };
    let indent = " ".repeat(depth * 2);

    if depth == 0 {
        md.push_str("### ");
    }
    md.push_str(&format!("{indent}Function Call: {}\n\n", or_unnamed(name)));
    if *is_super {
        md.push_str(&format!("{indent}- **Called using super**: Yes\n"));
    }
    if let Some(path) = ref_path.as_ref().filter(|path| Some(*path) != name.as_ref()) {
        md.push_str(&format!("{indent}- **Ref-path**: {path}\n"));
    }
    if !children.is_empty() {
        md.push_str(&format!("{indent}Parameters: \n"));
        for child in children {
            match child {
                PssObject::FunctionCall { .. } => write_call(md, child, depth + 1),
                PssObject::Assignment { value, .. } => {
                    md.push_str(&format!("{indent}   * {}\n", value.as_deref().unwrap_or_default()));
                }
                other => md.push_str(&format!("{indent}   * {}\n", other.name().unwrap_or(UNNAMED))),
            }
        }
    }
}

/// A source comment documenting an object: Doxygen blocks for declarations,
/// line comments for instances, assignments and calls.
pub fn doc_comment(object: &PssObject) -> String {
    let mut comment = String::new();
    write_doc_comment(&mut comment, object);
    comment
}

fn write_doc_comment(c: &mut String, object: &PssObject) {
    match object {
        PssObject::Component {
            name,
            is_pure,
            template_params,
            super_spec,
        } => {
            c.push_str(&format!("/**\n * @brief Component: {}\n", or_unnamed(name)));
            if *is_pure {
                c.push_str(" * This is a pure component.\n");
            }
            if !template_params.is_empty() {
                c.push_str(" * Template Parameters:\n");
                for param in template_params {
                    write_doc_param(c, param);
                    c.push('\n');
                }
            }
            if let Some(super_spec) = super_spec {
                c.push_str(&format!(" * Extends: {super_spec}\n"));
            }
            c.push_str(" */");
        }
        PssObject::Instance {
            name,
            instance_type,
            array_count,
            is_random,
            is_static_const,
            access_modifier,
            default_value,
        } => {
            c.push_str(&format!(
                "// Instance of {}: {}",
                or_unknown_type(instance_type),
                or_unnamed(name)
            ));
            if let Some(count) = array_count {
                c.push_str(&format!(" [{count}]"));
            }
            if *is_random {
                c.push_str(" (random)");
            }
            if *is_static_const {
                c.push_str(" (static const)");
            }
            if let Some(access) = access_modifier {
                c.push_str(&format!(" ({access})"));
            }
            if let Some(value) = default_value {
                c.push_str(&format!(" = {value}"));
            }
        }
        PssObject::Assignment {
            target,
            operation,
            value,
            data_type,
        } => {
            c.push_str(&format!(
                "// Assignment: {} {} {}",
                or_unnamed(target),
                operation.map(|op| op.as_str()).unwrap_or("unknown operation"),
                value.as_deref().unwrap_or("unknown value")
            ));
            if let Some(data_type) = data_type {
                c.push_str(&format!(" (type: {data_type})"));
            }
        }
        PssObject::Function {
            name,
            platform,
            is_pure,
            is_static,
            parameters,
            return_type,
        } => {
            c.push_str(&format!("/**\n * @brief Function: {}\n", or_unnamed(name)));
            if let Some(platform) = platform {
                c.push_str(&format!(" * Platform Qualifier: {platform}\n"));
            }
            if *is_pure {
                c.push_str(" * This is a pure function.\n");
            }
            if *is_static {
                c.push_str(" * This is a static function.\n");
            }
            if !parameters.is_empty() {
                c.push_str(" * Parameters:\n");
                for param in parameters {
                    write_doc_param(c, param);
                    c.push_str(" - No description\n");
                }
            }
            if let Some(ret) = return_type {
                c.push_str(&format!(" * @return {ret}\n"));
            }
            c.push_str(" */");
        }
        PssObject::RegisterComponent {
            name,
            access_type,
            register_length,
            based_on_struct,
        } => {
            c.push_str(&format!("/**\n * @brief Register Component: {}\n", or_unnamed(name)));
            write_doc_register_lines(c, access_type, register_length, based_on_struct);
            c.push_str(" */");
        }
        PssObject::RegisterGroup { name, base_address } => {
            c.push_str(&format!("/**\n * @brief Register Group: {}\n", or_unnamed(name)));
            if let Some(address) = base_address {
                c.push_str(&format!(" * Base Address: {address}\n"));
            }
            c.push_str(" */");
        }
        PssObject::RegisterDefinition {
            name,
            access_type,
            register_length,
            based_on_struct,
            array_count,
        } => {
            c.push_str(&format!("/**\n * @brief Register Definition: {}\n", or_unnamed(name)));
            write_doc_register_lines(c, access_type, register_length, based_on_struct);
            if let Some(count) = array_count {
                c.push_str(&format!(" * Instance Array Count: {count}\n"));
            }
            c.push_str(" */");
        }
        PssObject::FunctionCall { name, .. } => {
            c.push_str(&format!("// {}: {}", object.kind(), or_unnamed(name)));
        }
    }
}

fn write_doc_param(c: &mut String, param: &Parameter) {
    c.push_str(&format!(
        " * @param {} {}",
        or_unknown_type(&param.param_type),
        or_unnamed(&param.name)
    ));
    if let Some(default) = &param.default {
        c.push_str(&format!(" = {default}"));
    }
}

fn write_doc_register_lines(
    c: &mut String,
    access_type: &Option<String>,
    register_length: &Option<String>,
    based_on_struct: &Option<String>,
) {
    if let Some(access) = access_type {
        c.push_str(&format!(" * Access Type: {access}\n"));
    }
    if let Some(length) = register_length {
        c.push_str(&format!(" * Register Length: {length}\n"));
    }
    if let Some(base) = based_on_struct {
        c.push_str(&format!(" * Based on Struct: {base}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AssignOp;

    fn arg(value: &str) -> PssObject {
        PssObject::Assignment {
            target: None,
            operation: None,
            value: Some(value.to_string()),
            data_type: None,
        }
    }

    #[test]
    fn test_nested_call_indentation() {
        let call = PssObject::FunctionCall {
            name: Some("a".to_string()),
            is_super: false,
            ref_path: Some("a".to_string()),
            children: vec![PssObject::FunctionCall {
                name: Some("b".to_string()),
                is_super: true,
                ref_path: Some("x.b".to_string()),
                children: vec![arg("1")],
            }],
        };

        let md = hover_markdown(&call);
        assert_eq!(
            md,
            "### Function Call: a\n\n\
             Parameters: \n  \
             Function Call: b\n\n  \
             - **Called using super**: Yes\n  \
             - **Ref-path**: x.b\n  \
             Parameters: \n     \
             * 1\n"
        );
    }

    #[test]
    fn test_assignment_doc_comment() {
        let assign = PssObject::Assignment {
            target: Some("x".to_string()),
            operation: Some(AssignOp::Assign),
            value: Some("5".to_string()),
            data_type: Some("int".to_string()),
        };
        assert_eq!(doc_comment(&assign), "// Assignment: x = 5 (type: int)");
    }
}
