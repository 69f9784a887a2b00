//! Tests for the scan expression parser
//!
//! These tests verify:
//! - Column family and qualified column projections
//! - `*` and the empty projection
//! - Filter pass-through after `WHERE`
//! - Rejection of malformed expressions

use tabledesc::descriptor::ColumnSelection;
use tabledesc::schema::parse_scan_expression;
use tabledesc::SchemaError;

fn family(name: &str) -> ColumnSelection {
    ColumnSelection::Family(name.to_string())
}

fn column(family: &str, qualifier: &str) -> ColumnSelection {
    ColumnSelection::Column {
        family: family.to_string(),
        qualifier: qualifier.to_string(),
    }
}

// =============================================================================
// Projection Tests
// =============================================================================

#[test]
fn test_select_families_and_columns() {
    let scan = parse_scan_expression("SELECT cf1,cf2:col WHERE age>10").unwrap();

    assert_eq!(scan.selections(), &[family("cf1"), column("cf2", "col")]);
    assert_eq!(scan.filter_string(), Some("age>10"));
    assert!(!scan.selects_all());
}

#[test]
fn test_select_star() {
    let scan = parse_scan_expression("SELECT *").unwrap();

    assert!(scan.selects_all());
    assert!(scan.selections().is_empty());
    assert_eq!(scan.filter_string(), None);
}

#[test]
fn test_select_star_with_filter() {
    let scan = parse_scan_expression("SELECT * WHERE name=\"bob\"").unwrap();

    assert!(scan.selects_all());
    assert_eq!(scan.filter_string(), Some("name=\"bob\""));
}

#[test]
fn test_column_list_whitespace_ignored() {
    let scan = parse_scan_expression("SELECT  cf1 , cf2 : q1 ,\tcf3").unwrap();

    assert_eq!(
        scan.selections(),
        &[family("cf1"), column("cf2", "q1"), family("cf3")]
    );
}

#[test]
fn test_empty_items_skipped() {
    let scan = parse_scan_expression("SELECT cf1,,cf2,").unwrap();

    assert_eq!(scan.selections(), &[family("cf1"), family("cf2")]);
}

#[test]
fn test_qualifier_keeps_later_colons() {
    let scan = parse_scan_expression("SELECT cf1:a:b").unwrap();

    assert_eq!(scan.selections(), &[column("cf1", "a:b")]);
}

#[test]
fn test_filter_passed_verbatim() {
    let scan = parse_scan_expression("SELECT cf1 WHERE a > 1 WHERE b").unwrap();

    assert_eq!(scan.selections(), &[family("cf1")]);
    assert_eq!(scan.filter_string(), Some("a > 1 WHERE b"));
}

// =============================================================================
// Rejection Tests
// =============================================================================

#[test]
fn test_missing_select_rejected() {
    for expr in ["cf1,cf2", "select cf1", "SELECTcf1", ""] {
        let err = parse_scan_expression(expr).unwrap_err();
        assert!(matches!(err, SchemaError::Grammar { .. }), "{:?}", expr);
    }
}

#[test]
fn test_empty_filter_rejected() {
    let err = parse_scan_expression("SELECT cf1 WHERE ").unwrap_err();

    assert!(matches!(err, SchemaError::Grammar { .. }));
}

#[test]
fn test_empty_family_or_qualifier_rejected() {
    for expr in ["SELECT :col", "SELECT cf1:", "SELECT cf1,:"] {
        let err = parse_scan_expression(expr).unwrap_err();
        assert!(matches!(err, SchemaError::Grammar { .. }), "{:?}", expr);
    }
}
