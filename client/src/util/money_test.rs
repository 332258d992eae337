use super::*;

#[test]
fn formats_zero_with_two_decimals() {
    assert_eq!(format_price(0.0), "$0.00");
}

#[test]
fn formats_plain_amounts() {
    assert_eq!(format_price(5.0), "$5.00");
    assert_eq!(format_price(1250.5), "$1,250.50");
}

#[test]
fn groups_thousands() {
    assert_eq!(format_price(1000.0), "$1,000.00");
    assert_eq!(format_price(1234567.89), "$1,234,567.89");
}

#[test]
fn rounds_to_cents() {
    assert_eq!(format_price(999.999), "$1,000.00");
    assert_eq!(format_price(0.005), "$0.01");
}

#[test]
fn negative_amounts_keep_the_sign_outside() {
    assert_eq!(format_price(-5.0), "-$5.00");
    assert_eq!(format_price(-1234.5), "-$1,234.50");
}
