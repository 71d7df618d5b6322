//! Integration tests for the coercion boundary
//! Tests operand construction and string-to-integer conversion together

use addup_coerce::{as_int, parse_int};
use addup_value::{AddError, Operand, Span};

#[test]
fn test_integer_operand_is_identity() {
    assert_eq!(as_int(&Operand::Int(7)).unwrap(), 7);
    assert_eq!(as_int(&Operand::Int(-7)).unwrap(), -7);
}

#[test]
fn test_text_operand_is_parsed() {
    assert_eq!(as_int(&Operand::from("7")).unwrap(), 7);
    assert_eq!(as_int(&Operand::from("-7")).unwrap(), -7);
    assert_eq!(as_int(&Operand::from("+7")).unwrap(), 7);
}

#[test]
fn test_whitespace_padding_accepted() {
    assert_eq!(as_int(&Operand::from(" 42 ")).unwrap(), 42);
    assert_eq!(as_int(&Operand::from("\t42\n")).unwrap(), 42);
}

#[test]
fn test_invalid_text_reports_offending_span() {
    match as_int(&Operand::from("12x")) {
        Err(AddError::InvalidOperand { text, span }) => {
            assert_eq!(text, "12x");
            assert_eq!(span, Span::new(2, 3));
        }
        other => panic!("Expected InvalidOperand error, got {other:?}"),
    }
}

#[test]
fn test_float_text_rejected() {
    match parse_int("1.5") {
        Err(AddError::InvalidOperand { .. }) => {}
        other => panic!("Expected InvalidOperand error, got {other:?}"),
    }
}

#[test]
fn test_empty_text_rejected() {
    assert_eq!(
        as_int(&Operand::from("")).unwrap_err(),
        AddError::EmptyOperand
    );
}

#[test]
fn test_out_of_range_literal() {
    // One past i64::MAX
    match parse_int("9223372036854775808") {
        Err(AddError::OutOfRange { .. }) => {}
        other => panic!("Expected OutOfRange error, got {other:?}"),
    }
}

#[test]
fn test_json_operands_coerce_end_to_end() {
    let a = Operand::try_from(&serde_json::json!(40)).unwrap();
    let b = Operand::try_from(&serde_json::json!("2")).unwrap();

    assert_eq!(as_int(&a).unwrap(), 40);
    assert_eq!(as_int(&b).unwrap(), 2);
}

#[test]
fn test_json_float_never_reaches_coercion() {
    let result = Operand::try_from(&serde_json::json!(1.5));

    assert!(result.is_err());
    match result.unwrap_err() {
        AddError::UnsupportedJson { text } => assert_eq!(text, "1.5"),
        other => panic!("Expected UnsupportedJson error, got {other:?}"),
    }
}
