use super::*;

#[test]
fn emi_matches_standard_reducing_balance_figure() {
    // 1 lakh at 12% over 12 months is the textbook 8884.88.
    let value = emi(100_000.0, 12.0, 12).unwrap();
    assert!((value - 8884.88).abs() < 0.01, "got {value}");
}

#[test]
fn emi_is_monotonic_in_rate() {
    let mut previous = 0.0;
    for rate in [6.0, 9.0, 12.0, 18.0, 24.0] {
        let value = emi(100_000.0, rate, 12).unwrap();
        assert!(value > previous, "rate {rate} gave {value} <= {previous}");
        previous = value;
    }
}

#[test]
fn zero_rate_splits_principal_evenly() {
    assert_eq!(emi(120_000.0, 0.0, 12).unwrap(), 10_000.0);
}

#[test]
fn invalid_inputs_are_user_facing_errors() {
    assert!(emi(0.0, 12.0, 12).is_err());
    assert!(emi(-5.0, 12.0, 12).is_err());
    assert!(emi(100_000.0, 12.0, 0).is_err());
    assert!(emi(100_000.0, -1.0, 12).is_err());
    assert!(emi(f64::NAN, 12.0, 12).is_err());
}

#[test]
fn breakdown_totals_are_consistent() {
    let b = breakdown(100_000.0, 12.0, 12).unwrap();
    assert!((b.total_payable - b.emi * 12.0).abs() < 0.01);
    assert!((b.total_interest - (b.total_payable - 100_000.0)).abs() < 0.01);
    assert!(b.total_interest > 0.0);
}

#[test]
fn schedule_closes_to_exactly_zero() {
    let periods = schedule(100_000.0, 12.0, 12).unwrap();
    assert_eq!(periods.len(), 12);
    assert_eq!(periods.last().unwrap().closing, 0.0);
}

#[test]
fn schedule_principal_parts_sum_to_principal() {
    let periods = schedule(250_000.0, 14.5, 36).unwrap();
    let total_principal: f64 = periods.iter().map(|p| p.principal).sum();
    assert!((total_principal - 250_000.0).abs() < 0.01, "got {total_principal}");
}

#[test]
fn schedule_interest_declines_month_over_month() {
    let periods = schedule(100_000.0, 12.0, 12).unwrap();
    for pair in periods.windows(2) {
        assert!(pair[1].interest < pair[0].interest);
    }
}

#[test]
fn zero_rate_schedule_has_no_interest() {
    let periods = schedule(120_000.0, 0.0, 12).unwrap();
    assert!(periods.iter().all(|p| p.interest == 0.0));
    assert_eq!(periods.last().unwrap().closing, 0.0);
}
