//! Implied-rate solver for declared liabilities.
//!
//! DESIGN
//! ======
//! Applicants know their EMI and remaining tenure, not the contracted rate.
//! The monthly rate is the root of `NPV(r) = Σ EMI/(1+r)^t − loan` on
//! `[0.0001, 1.0]`, found by bisection. NPV is strictly decreasing in `r`,
//! so the bracket halves cleanly; the iteration cap is a hard stop, not the
//! expected exit.

#[cfg(test)]
#[path = "irr_test.rs"]
mod irr_test;

/// Lower edge of the monthly-rate bracket (0.01% per month).
pub const RATE_BRACKET_LO: f64 = 0.0001;
/// Upper edge of the monthly-rate bracket (100% per month).
pub const RATE_BRACKET_HI: f64 = 1.0;
/// Hard iteration cap; convergence takes under 30 halvings.
pub const MAX_ITERATIONS: u32 = 1000;
/// Stop once the bracket is narrower than this.
pub const CONVERGENCE_TOLERANCE: f64 = 1e-5;

/// Net present value of `tenure_months` installments of `emi` discounted at
/// monthly rate `rate`, less the loan amount.
fn npv(loan: f64, emi: f64, tenure_months: u32, rate: f64) -> f64 {
    let mut discounted = 0.0;
    let mut factor = 1.0;
    for _ in 0..tenure_months {
        factor *= 1.0 + rate;
        discounted += emi / factor;
    }
    discounted - loan
}

/// Annualized nominal rate (percent) implied by repaying `loan` in
/// `tenure_months` installments of `emi`.
///
/// Returns `monthly_rate * 12 * 100`, matching how quoted flat rates are
/// displayed; no effective-compounding conversion.
///
/// # Errors
///
/// Returns a user-facing message for non-positive inputs or when total
/// repayment does not exceed the loan (no positive rate exists).
pub fn annual_rate_from_emi(loan: f64, emi: f64, tenure_months: u32) -> Result<f64, String> {
    if !loan.is_finite() || loan <= 0.0 {
        return Err("Outstanding amount must be greater than zero".to_owned());
    }
    if !emi.is_finite() || emi <= 0.0 {
        return Err("EMI must be greater than zero".to_owned());
    }
    if tenure_months == 0 {
        return Err("Tenure must be at least 1 month".to_owned());
    }
    if emi * f64::from(tenure_months) <= loan {
        return Err("EMI times tenure must exceed the outstanding amount".to_owned());
    }

    let mut lo = RATE_BRACKET_LO;
    let mut hi = RATE_BRACKET_HI;
    for _ in 0..MAX_ITERATIONS {
        if hi - lo < CONVERGENCE_TOLERANCE {
            break;
        }
        let mid = (lo + hi) / 2.0;
        if npv(loan, emi, tenure_months, mid) > 0.0 {
            // Discounted installments still exceed the loan: rate is higher.
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let monthly = (lo + hi) / 2.0;
    Ok(monthly * 12.0 * 100.0)
}
