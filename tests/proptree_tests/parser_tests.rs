//! Tests for the property tree parser
//!
//! These tests verify:
//! - Node names, properties and children for all nesting depths
//! - Depth bookkeeping (max/min)
//! - Grammar errors with offsets
//! - Canonical re-rendering

use tabledesc::proptree::PropTree;
use tabledesc::SchemaError;

// =============================================================================
// Helper Functions
// =============================================================================

fn assert_grammar_error(text: &str) {
    match PropTree::parse(text) {
        Err(SchemaError::Grammar { .. }) => {}
        other => panic!("expected grammar error for {:?}, got {:?}", text, other),
    }
}

// =============================================================================
// Structure Tests
// =============================================================================

#[test]
fn test_parse_bare_name() {
    let tree = PropTree::parse("table1").unwrap();

    assert_eq!(tree.root().name, "table1");
    assert!(tree.root().properties.is_empty());
    assert!(tree.root().children.is_empty());
    assert_eq!(tree.max_depth(), 1);
    assert_eq!(tree.min_depth(), 1);
}

#[test]
fn test_parse_properties_keep_source_order() {
    let tree = PropTree::parse("table1<splitsize=1024, storage=flash>").unwrap();

    assert_eq!(
        tree.root().properties,
        vec![
            ("splitsize".to_string(), "1024".to_string()),
            ("storage".to_string(), "flash".to_string()),
        ]
    );
    assert_eq!(tree.max_depth(), 1);
}

#[test]
fn test_parse_two_levels() {
    let tree = PropTree::parse("table1{cf1, cf2<ttl=100>, cf3}").unwrap();

    let names: Vec<&str> = tree.root().children.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["cf1", "cf2", "cf3"]);
    assert_eq!(
        tree.root().children[1].properties,
        vec![("ttl".to_string(), "100".to_string())]
    );
    assert_eq!(tree.max_depth(), 2);
    assert_eq!(tree.min_depth(), 2);
}

#[test]
fn test_parse_three_levels_multiline() {
    let text = "table1<mergesize=100>{
        lg0<storage=memory>{
            cf1<maxversions=3>,
            cf2<ttl=100>
        },
        lg1{cf3}
    }";
    let tree = PropTree::parse(text).unwrap();

    assert_eq!(tree.max_depth(), 3);
    assert_eq!(tree.min_depth(), 3);
    assert_eq!(tree.root().children.len(), 2);
    assert_eq!(tree.root().children[0].children.len(), 2);
    assert_eq!(tree.root().children[1].children[0].name, "cf3");
}

#[test]
fn test_mixed_depth_is_reported() {
    let tree = PropTree::parse("t{lg0{cf1},lg1}").unwrap();

    assert_eq!(tree.max_depth(), 3);
    assert_eq!(tree.min_depth(), 2);
}

#[test]
fn test_empty_braces_mean_no_children() {
    let tree = PropTree::parse("t{}").unwrap();

    assert!(tree.root().children.is_empty());
    assert_eq!(tree.max_depth(), 1);
}

#[test]
fn test_empty_property_list() {
    let tree = PropTree::parse("t<>{cf1}").unwrap();

    assert!(tree.root().properties.is_empty());
    assert_eq!(tree.max_depth(), 2);
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_empty_input_fails() {
    assert_grammar_error("");
    assert_grammar_error("   ");
}

#[test]
fn test_unclosed_brackets_fail() {
    assert_grammar_error("t<a=1");
    assert_grammar_error("t{cf1");
    assert_grammar_error("t{cf1,}");
}

#[test]
fn test_missing_key_or_value_fails() {
    assert_grammar_error("t<=1>");
    assert_grammar_error("t<a=>");
    assert_grammar_error("t<a>");
}

#[test]
fn test_duplicate_property_fails() {
    assert_grammar_error("t<ttl=1,ttl=2>");
}

#[test]
fn test_trailing_input_fails() {
    assert_grammar_error("t{cf1} extra");
    assert_grammar_error("t1,t2");
}

#[test]
fn test_name_charset_matches_alter_grammar() {
    assert_grammar_error("t{lg-a{cf1}}");
    assert_grammar_error("t{lg0{cf.x}}");
    assert_grammar_error("t<split-size=1>");

    let tree = PropTree::parse("t_1{lg_0{cf_1}}").unwrap();
    assert_eq!(tree.root().children[0].name, "lg_0");
}

#[test]
fn test_nesting_limit() {
    let text = format!("{}leaf{}", "n{".repeat(20), "}".repeat(20));
    assert_grammar_error(&text);
}

#[test]
fn test_error_reports_offset() {
    let err = PropTree::parse("t{cf1;cf2}").unwrap_err();
    let message = err.to_string();

    assert!(message.contains("offset 5"), "unexpected message: {}", message);
}

// =============================================================================
// Rendering Tests
// =============================================================================

#[test]
fn test_display_is_compact() {
    let tree = PropTree::parse("t1 < a=1 , b=x > { cf1 , cf2<ttl=5> }").unwrap();

    assert_eq!(tree.to_string(), "t1<a=1,b=x>{cf1,cf2<ttl=5>}");
}

#[test]
fn test_display_reparses_to_same_tree() {
    let tree = PropTree::parse("t{lg0<storage=flash>{cf1,cf2},lg1{cf3<type=int64>}}").unwrap();
    let again = PropTree::parse(&tree.to_string()).unwrap();

    assert_eq!(tree, again);
}
