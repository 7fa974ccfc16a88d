// tests/output_tests.rs

use caustic_syntax::combinators::*;
use caustic_syntax::output::{NotationPrinter, from_json, to_json, to_json_pretty};
use caustic_syntax::{Record, SyntaxError};

// ============================================================================
// Wire JSON
// ============================================================================

#[test]
fn test_literal_wire_shape() {
    assert_eq!(to_json(&flag(true)).unwrap(), r#"{"literal":{"flag":true}}"#);
    assert_eq!(to_json(&real(10)).unwrap(), r#"{"literal":{"real":10.0}}"#);
    assert_eq!(to_json(&text("a")).unwrap(), r#"{"literal":{"text":"a"}}"#);
}

#[test]
fn test_read_wire_shape() {
    assert_eq!(
        to_json(&read("k")).unwrap(),
        r#"{"expression":{"read":{"key":{"literal":{"text":"k"}}}}}"#
    );
}

#[test]
fn test_branch_field_order() {
    let json = to_json(&branch(true, 1, 2)).unwrap();
    let condition = json.find("\"condition\"").unwrap();
    let pass = json.find("\"pass\"").unwrap();
    let fail = json.find("\"fail\"").unwrap();
    assert!(condition < pass && pass < fail);
}

#[test]
fn test_camel_case_case_name() {
    let json = to_json(&index_of("abc", "b")).unwrap();
    assert!(json.starts_with(r#"{"expression":{"indexOf":{"value":"#));
    assert!(json.contains(r#""query":"#));
}

#[test]
fn test_mod_case_name() {
    let json = to_json(&modulo(7, 2)).unwrap();
    assert!(json.starts_with(r#"{"expression":{"mod":{"lhs":"#));
}

#[test]
fn test_decode_resolved_record_key() {
    let field = Record::new("root")
        .and_then(|r| r.field("a"))
        .and_then(|a| a.attribute("b"))
        .unwrap();
    let tree = cons(field.set(field.get()), rollback("done"));

    let decoded = from_json(&to_json(&tree).unwrap()).unwrap();
    assert_eq!(decoded, tree);

    let decoded = from_json(&to_json_pretty(&tree).unwrap()).unwrap();
    assert_eq!(decoded, tree);
}

#[test]
fn test_decode_rejects_unknown_case() {
    let err = from_json(r#"{"expression":{"tanh":{"value":{"literal":{"real":1.0}}}}}"#)
        .unwrap_err();
    assert!(matches!(err, SyntaxError::Json(_)));
}

#[test]
fn test_decode_rejects_both_arms() {
    let json = r#"{"literal":{"flag":true},"expression":{"read":{"key":{"literal":{"text":"k"}}}}}"#;
    assert!(from_json(json).is_err());
}

#[test]
fn test_encode_rejects_non_finite_real() {
    let err = to_json(&write("x", real(f64::NAN))).unwrap_err();
    assert!(matches!(err, SyntaxError::NonFiniteReal { .. }));

    let err = to_json_pretty(&real(f64::INFINITY)).unwrap_err();
    assert!(matches!(err, SyntaxError::NonFiniteReal { value } if value == f64::INFINITY));

    let err = to_json(&branch(true, 1, add(1, f64::NEG_INFINITY))).unwrap_err();
    assert!(matches!(err, SyntaxError::NonFiniteReal { .. }));
}

#[test]
fn test_decode_long_block() {
    let tree = block(
        write("k0", 0),
        (1..200).map(|i| write(format!("k{}", i), i)),
    );
    let decoded = from_json(&to_json(&tree).unwrap()).unwrap();
    assert_eq!(decoded, tree);
}

#[test]
fn test_decode_deep_record_chain() {
    let mut record = Record::new("root").unwrap();
    for i in 0..12 {
        record = record.field(&format!("f{}", i)).unwrap();
    }
    let field = record.attribute("leaf").unwrap();
    let tree = field.set(field.get());

    let decoded = from_json(&to_json(&tree).unwrap()).unwrap();
    assert_eq!(decoded, tree);

    let decoded = from_json(&to_json_pretty(&tree).unwrap()).unwrap();
    assert_eq!(decoded, tree);
}

// ============================================================================
// Call Notation
// ============================================================================

#[test]
fn test_compact_notation() {
    let tree = branch(less(read("n"), 10), write("n", add(read("n"), 1.5)), rollback("limit"));
    assert_eq!(
        tree.to_string(),
        r#"branch(less(read("n"), 10), write("n", add(read("n"), 1.5)), rollback("limit"))"#
    );
}

#[test]
fn test_notation_escapes_text() {
    assert_eq!(text("say \"hi\"").to_string(), r#""say \"hi\"""#);
    assert_eq!(flag(false).to_string(), "false");
}

#[test]
fn test_pretty_notation() {
    let tree = branch(less(read("n"), 10), "yes", "no");
    let expected = "branch(\n  less(\n    read(\"n\"),\n    10\n  ),\n  \"yes\",\n  \"no\"\n)";
    assert_eq!(format!("{:#}", tree), expected);
    assert_eq!(NotationPrinter::new(true).print(&tree), expected);
}

#[test]
fn test_pretty_notation_keeps_leaf_calls_inline() {
    assert_eq!(format!("{:#}", read("n")), r#"read("n")"#);
}
