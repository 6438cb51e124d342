use pretty_assertions::assert_eq;

use crate::utils::{UtilsError, digit_counts, group_value, validate_digit_string};

#[test]
fn test_validate_digit_string_valid() {
    assert!(validate_digit_string("12345").is_ok());
    assert!(validate_digit_string("0").is_ok());
    assert!(validate_digit_string("999").is_ok());
}

#[test]
fn test_validate_digit_string_invalid() {
    assert!(validate_digit_string("").is_err());
    assert!(validate_digit_string("12a45").is_err());
    assert!(validate_digit_string("12.45").is_err());
    assert!(validate_digit_string("12-45").is_err());
}

#[test]
fn test_group_value() {
    assert_eq!(group_value("123"), Ok(123.0));
    assert_eq!(group_value("0"), Ok(0.0));
    assert_eq!(group_value("7"), Ok(7.0));
}

#[test]
fn test_group_value_rejects_leading_zero() {
    assert_eq!(
        group_value("05"),
        Err(UtilsError::LeadingZero("05".to_string()))
    );
    assert_eq!(
        group_value("007"),
        Err(UtilsError::LeadingZero("007".to_string()))
    );
}

#[test]
fn test_group_value_rejects_non_digits() {
    assert!(group_value("").is_err());
    assert!(group_value("1a2").is_err());
}

#[test]
fn test_digit_counts() {
    let counts = digit_counts("1*2*3+4+5+6+7+8*9");
    let mut expected = [0usize; 10];
    for d in 1..=9 {
        expected[d] = 1;
    }
    assert_eq!(counts, expected);

    assert_eq!(digit_counts(""), [0usize; 10]);
    assert_eq!(digit_counts("(+-)")[0], 0);
}

#[test]
fn test_digit_counts_ignore_order() {
    assert_eq!(digit_counts("123"), digit_counts("3+2+1"));
}
