//! Hover markdown and doc comments for extracted objects.

mod helpers;

use helpers::source_fixtures::*;
use helpers::{URI, default_config};
use pss::ide::{doc_comment, hover_markdown};
use pss::model::{AccessModifier, PssObject};
use pss::pipeline::build_model_in;

fn objects(text: &str) -> Vec<PssObject> {
    build_model_in(URI, text, &default_config()).into_objects()
}

// =============================================================================
// HOVER MARKDOWN
// =============================================================================

#[test]
fn test_hover_component() {
    let objects = objects(PURE_TEMPLATE_COMPONENT);
    let md = hover_markdown(&objects[0]);

    assert_eq!(
        md,
        "### Component: C\n\n\
         - **Pure**: Yes\n\
         - **Extends**: base_c\n\
         #### Template Parameters\n\
         - **T** : type\n\
         - **N** : int (default: 4)\n\n"
    );
}

#[test]
fn test_hover_register_objects() {
    let objects = objects(REGISTER_BLOCK);

    let md = hover_markdown(&objects[2]);
    assert!(md.starts_with("### Register Component: ctrl_reg_c\n\n"));
    assert!(md.contains("- **Access Type**: READWRITE\n"));
    assert!(md.contains("- **Register Length**: 8\n"));
    assert!(md.contains("- **Based on Struct**: ctrl_s\n"));

    let md = hover_markdown(&objects[3]);
    assert_eq!(md, "### Register Group: dma_regs_c\n\n- **Base Address**: 0x4000_0000\n");

    let md = hover_markdown(&objects[6]);
    assert!(md.contains("- **Instance Array Count**: 4\n"));
    assert!(!md.contains("Access Type"), "absent fields are not printed: {md}");
}

#[test]
fn test_hover_function() {
    let objects = objects(FUNCTIONS);
    let md = hover_markdown(&objects[0]);

    assert!(md.starts_with("### Function: add\n\n- **Platform Qualifier**: **target**\n"));
    assert!(md.contains("#### Parameters\n- **a** : int\n- **b** : int (default: 1)\n"));
    assert!(md.ends_with("#### Returns\nint\n\n"));
}

#[test]
fn test_hover_call_hides_redundant_ref_path() {
    let objects = objects(DOTTED_PROCEDURAL);

    let write = hover_markdown(&objects[3]);
    assert!(write.starts_with("### Function Call: write_val\n\n"));
    assert!(write.contains("- **Ref-path**: regs.ctrl.write_val\n"));
    assert!(write.contains("   * 1\n"));

    let configure = hover_markdown(&objects[5]);
    assert!(!configure.contains("Ref-path**: configure"));
    // nested calls are indented two spaces per level
    assert!(configure.contains("\n  Function Call: lookup\n"));
    assert!(configure.contains("\n    Function Call: base\n"));
    assert!(configure.contains("\n    - **Ref-path**: regs.base\n"));
}

#[test]
fn test_hover_missing_names_and_types() {
    let object = PssObject::Instance {
        name: None,
        instance_type: None,
        array_count: None,
        is_random: false,
        is_static_const: false,
        access_modifier: None,
        default_value: None,
    };
    assert_eq!(
        hover_markdown(&object),
        "### Instance: Unnamed\n\n- **Type**: unknown type\n"
    );
}

// =============================================================================
// DOC COMMENTS
// =============================================================================

#[test]
fn test_doc_comment_component() {
    let objects = objects(PURE_TEMPLATE_COMPONENT);
    assert_eq!(
        doc_comment(&objects[0]),
        "/**\n\
         \x20* @brief Component: C\n\
         \x20* This is a pure component.\n\
         \x20* Template Parameters:\n\
         \x20* @param type T\n\
         \x20* @param int N = 4\n\
         \x20* Extends: base_c\n\
         \x20*/"
    );
}

#[test]
fn test_doc_comment_instance_line() {
    let object = PssObject::Instance {
        name: Some("buf".to_string()),
        instance_type: Some("data_s".to_string()),
        array_count: Some("8".to_string()),
        is_random: true,
        is_static_const: false,
        access_modifier: Some(AccessModifier::Protected),
        default_value: None,
    };
    assert_eq!(
        doc_comment(&object),
        "// Instance of data_s: buf [8] (random) (protected)"
    );
}

#[test]
fn test_doc_comment_function() {
    let objects = objects(FUNCTIONS);
    let comment = doc_comment(&objects[1]);

    assert!(comment.starts_with("/**\n * @brief Function: reset\n"));
    assert!(comment.contains(" * Platform Qualifier: solve\n"));
    assert!(comment.contains(" * This is a pure function.\n"));
    assert!(comment.contains(" * This is a static function.\n"));
    assert!(!comment.contains("@return"));
    assert!(comment.ends_with(" */"));
}

#[test]
fn test_doc_comment_call() {
    let objects = objects(DOTTED_PROCEDURAL);
    assert_eq!(doc_comment(&objects[3]), "// Function Call: write_val");
}
