use super::*;

#[test]
fn round_paise_rounds_to_two_places() {
    assert_eq!(round_paise(8884.8843), 8884.88);
    assert_eq!(round_paise(8884.8891), 8884.89);
    assert_eq!(round_paise(-1.234), -1.23);
}

#[test]
fn format_inr_uses_indian_grouping() {
    assert_eq!(format_inr(0.0), "₹0.00");
    assert_eq!(format_inr(500.0), "₹500.00");
    assert_eq!(format_inr(1000.0), "₹1,000.00");
    assert_eq!(format_inr(100_000.0), "₹1,00,000.00");
    assert_eq!(format_inr(1_234_567.89), "₹12,34,567.89");
    assert_eq!(format_inr(10_000_000.0), "₹1,00,00,000.00");
}

#[test]
fn format_inr_handles_negatives_and_non_finite() {
    assert_eq!(format_inr(-8884.88), "-₹8,884.88");
    assert_eq!(format_inr(f64::NAN), "₹–");
}

#[test]
fn parse_amount_tolerates_display_symbols() {
    assert_eq!(parse_amount("₹1,00,000.50"), Ok(100_000.50));
    assert_eq!(parse_amount("8884.88"), Ok(8884.88));
    assert_eq!(parse_amount(" 12 000 "), Ok(12_000.0));
}

#[test]
fn parse_amount_rejects_blank_and_non_positive() {
    assert!(parse_amount("").is_err());
    assert!(parse_amount("₹,").is_err());
    assert!(parse_amount("abc").is_err());
    assert!(parse_amount("0").is_err());
    assert!(parse_amount("-500").is_err());
}

#[test]
fn format_and_parse_round_trip() {
    for amount in [1.0, 999.99, 84_500.0, 1_234_567.89] {
        assert_eq!(parse_amount(&format_inr(amount)), Ok(amount));
    }
}
