use super::*;

#[test]
fn recovers_twelve_percent_from_textbook_emi() {
    // emi(100000, 12%, 12) = 8884.88, so the implied rate is ~12% annualized.
    let rate = annual_rate_from_emi(100_000.0, 8884.88, 12).unwrap();
    assert!((rate - 12.0).abs() < 0.05, "got {rate}");
}

#[test]
fn solver_is_monotonic_in_emi() {
    let low = annual_rate_from_emi(100_000.0, 8_700.0, 12).unwrap();
    let mid = annual_rate_from_emi(100_000.0, 8_884.88, 12).unwrap();
    let high = annual_rate_from_emi(100_000.0, 9_200.0, 12).unwrap();
    assert!(low < mid && mid < high, "{low} {mid} {high}");
}

#[test]
fn round_trips_emi_for_varied_terms() {
    for (principal, rate, months) in [
        (50_000.0, 9.5, 24u32),
        (250_000.0, 14.0, 36),
        (1_000_000.0, 8.25, 120),
    ] {
        let emi = crate::util::emi::emi(principal, rate, months).unwrap();
        let recovered = annual_rate_from_emi(principal, emi, months).unwrap();
        assert!((recovered - rate).abs() < 0.05, "{rate}% came back as {recovered}%");
    }
}

#[test]
fn rejects_repayment_below_loan() {
    // 12 x 8000 = 96000 < 100000: no positive rate solves this.
    assert!(annual_rate_from_emi(100_000.0, 8_000.0, 12).is_err());
    // Exactly equal is 0%, outside the bracket.
    assert!(annual_rate_from_emi(96_000.0, 8_000.0, 12).is_err());
}

#[test]
fn rejects_non_positive_inputs() {
    assert!(annual_rate_from_emi(0.0, 8_000.0, 12).is_err());
    assert!(annual_rate_from_emi(100_000.0, 0.0, 12).is_err());
    assert!(annual_rate_from_emi(100_000.0, 8_000.0, 0).is_err());
    assert!(annual_rate_from_emi(f64::NAN, 8_000.0, 12).is_err());
}

#[test]
fn absurd_emi_converges_to_bracket_ceiling() {
    // EMI far above any sane rate: the solver pins at the top of the bracket
    // rather than diverging. 1.0 monthly is 1200% annualized.
    let rate = annual_rate_from_emi(1_000.0, 10_000.0, 12).unwrap();
    assert!(rate <= RATE_BRACKET_HI * 12.0 * 100.0);
    assert!(rate > 1100.0);
}
