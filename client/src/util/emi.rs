//! Reducing-balance EMI math for the calculator dialog and loan step.
//!
//! DESIGN
//! ======
//! Standard closed form: with monthly rate `r = R/12/100` over `n` months,
//! `EMI = P·r·(1+r)^n / ((1+r)^n − 1)`. A zero rate degenerates to a
//! straight principal split instead of dividing by zero. All figures are
//! rupees as `f64`; display rounding to paise happens here so the schedule's
//! final row closes to exactly zero.

#[cfg(test)]
#[path = "emi_test.rs"]
mod emi_test;

use crate::util::money::round_paise;

/// EMI plus the totals the calculator screen displays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmiBreakdown {
    /// Fixed monthly installment, rounded to paise.
    pub emi: f64,
    /// `emi * tenure`, rounded to paise.
    pub total_payable: f64,
    /// `total_payable - principal`, rounded to paise.
    pub total_interest: f64,
}

/// One month of the amortization preview.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmiPeriod {
    /// Month number, 1-based.
    pub month: u32,
    /// Balance at the start of the month.
    pub opening: f64,
    /// Interest portion of the installment.
    pub interest: f64,
    /// Principal portion of the installment.
    pub principal: f64,
    /// Balance after the installment.
    pub closing: f64,
}

/// Fixed monthly installment for `principal` at `annual_rate_pct` over
/// `tenure_months`.
///
/// A zero rate yields a straight `principal / tenure` split.
///
/// # Errors
///
/// Returns a user-facing message for non-positive principal, zero tenure, or
/// a negative/non-finite rate.
pub fn emi(principal: f64, annual_rate_pct: f64, tenure_months: u32) -> Result<f64, String> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err("Principal must be greater than zero".to_owned());
    }
    if tenure_months == 0 {
        return Err("Tenure must be at least 1 month".to_owned());
    }
    if !annual_rate_pct.is_finite() || annual_rate_pct < 0.0 {
        return Err("Rate must be zero or positive".to_owned());
    }
    if annual_rate_pct == 0.0 {
        return Ok(round_paise(principal / f64::from(tenure_months)));
    }
    let r = annual_rate_pct / 12.0 / 100.0;
    let factor = (1.0 + r).powi(i32::try_from(tenure_months).unwrap_or(i32::MAX));
    Ok(round_paise(principal * r * factor / (factor - 1.0)))
}

/// EMI plus total payable and total interest.
///
/// # Errors
///
/// Same conditions as [`emi`].
pub fn breakdown(principal: f64, annual_rate_pct: f64, tenure_months: u32) -> Result<EmiBreakdown, String> {
    let installment = emi(principal, annual_rate_pct, tenure_months)?;
    let total_payable = round_paise(installment * f64::from(tenure_months));
    Ok(EmiBreakdown {
        emi: installment,
        total_payable,
        total_interest: round_paise(total_payable - principal),
    })
}

/// Month-by-month amortization preview.
///
/// Each month accrues interest on the opening balance; the remainder of the
/// installment retires principal. The final row absorbs accumulated rounding
/// so its closing balance is exactly zero.
///
/// # Errors
///
/// Same conditions as [`emi`].
pub fn schedule(principal: f64, annual_rate_pct: f64, tenure_months: u32) -> Result<Vec<EmiPeriod>, String> {
    let installment = emi(principal, annual_rate_pct, tenure_months)?;
    let r = annual_rate_pct / 12.0 / 100.0;
    let mut periods = Vec::with_capacity(tenure_months as usize);
    let mut balance = principal;
    for month in 1..=tenure_months {
        let interest = round_paise(balance * r);
        let principal_part = if month == tenure_months {
            // Last row closes the loan exactly; rounding drift lands here.
            round_paise(balance)
        } else {
            round_paise(installment - interest)
        };
        let closing = round_paise(balance - principal_part);
        periods.push(EmiPeriod {
            month,
            opening: round_paise(balance),
            interest,
            principal: principal_part,
            closing,
        });
        balance = closing;
    }
    Ok(periods)
}
