//! 표시용 숫자 정규화 테스트.
use unit_converter::format::{format_number, format_value, to_fixed};

#[test]
fn strips_only_fractional_zeros() {
    assert_eq!(format_number("1.500"), "1.5");
    assert_eq!(format_number("0.0010"), "0.001");
    assert_eq!(format_number("100"), "100");
    assert_eq!(format_number("100.00"), "100");
    assert_eq!(format_number("1e3"), "1000");
}

#[test]
fn negative_zero_prints_as_zero() {
    assert_eq!(format_number("-0"), "0");
    assert_eq!(format_value(-0.0), "0");
}

#[test]
fn unparsable_input_is_empty() {
    assert_eq!(format_number(""), "");
    assert_eq!(format_number("abc"), "");
    assert_eq!(format_number("-"), "");
}

#[test]
fn format_number_is_idempotent() {
    for raw in ["1.500", "0.0010", "100", "-3.25", "12abc", "  .5", "266.7", "4046.86"] {
        let once = format_number(raw);
        assert_eq!(format_number(&once), once, "{raw}");
    }
}

#[test]
fn fixed_strings_match_stored_history() {
    assert_eq!(to_fixed(1.0, 2), "1.00");
    assert_eq!(to_fixed(0.001, 4), "0.0010");
    assert_eq!(to_fixed(3.305785, 2), "3.31");
}
