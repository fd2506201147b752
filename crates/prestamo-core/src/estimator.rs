//! Periodic-payment estimation for level-payment (French amortization) loans.
//!
//! Pure, closed-form functions: given principal, annual rate, term, and
//! installment frequency, compute the level payment that retires the loan.
//! An undefined estimate is `None`, never an error; the caller hides the
//! payment preview when no estimate exists. All math uses
//! `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{round_display, Money, PaymentFrequency, Rate};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const PERCENT_DIVISOR: Decimal = dec!(100);
const MONTHS_PER_YEAR: u64 = 12;

// ---------------------------------------------------------------------------
// Input / Output Types
// ---------------------------------------------------------------------------

/// Terms of a loan as captured on the intake form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed, in currency units.
    pub principal: Money,
    /// Annual interest rate as a percentage (12.5 = 12.5%/year).
    pub annual_rate_pct: Decimal,
    /// Term of the loan in months.
    pub term_months: u32,
    /// Installment frequency.
    pub payment_frequency: PaymentFrequency,
}

/// A computed payment estimate.
///
/// The payment is kept at full precision; rounding happens only when the
/// value is displayed or submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEstimate {
    /// Level payment per installment, full precision.
    pub periodic_payment: Money,
    /// Interest rate per installment period.
    pub periodic_rate: Rate,
    /// Number of installments over the life of the loan.
    pub total_payments: u32,
}

impl PaymentEstimate {
    /// Payment rounded to two places for display or submission.
    pub fn display_payment(&self) -> Money {
        round_display(self.periodic_payment)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Estimate the level installment payment for the given terms.
///
/// Returns `None` whenever the estimate is undefined: non-positive
/// principal, a zero periodic rate (the annuity denominator vanishes at
/// r = 0), or a zero installment count.
pub fn estimate_payment(terms: &LoanTerms) -> Option<PaymentEstimate> {
    let payments_per_year = terms.payment_frequency.payments_per_year();
    let periodic_rate =
        terms.annual_rate_pct / PERCENT_DIVISOR / Decimal::from(payments_per_year);
    let total_payments = installment_count(terms.term_months, payments_per_year);

    if terms.principal <= Decimal::ZERO
        || periodic_rate <= Decimal::ZERO
        || total_payments == 0
    {
        return None;
    }

    let growth = (Decimal::ONE + periodic_rate).powd(Decimal::from(total_payments));
    let denominator = growth - Decimal::ONE;
    if denominator <= Decimal::ZERO {
        return None;
    }

    let periodic_payment = terms.principal * periodic_rate * growth / denominator;

    Some(PaymentEstimate {
        periodic_payment,
        periodic_rate,
        total_payments,
    })
}

/// Estimate directly from form-field strings.
///
/// Empty or non-numeric fields yield no estimate rather than an error.
/// An unrecognized frequency label falls back to monthly.
pub fn estimate_from_fields(
    principal: &str,
    annual_rate_pct: &str,
    term_months: &str,
    payment_frequency: &str,
) -> Option<PaymentEstimate> {
    let principal: Decimal = principal.trim().parse().ok()?;
    let annual_rate_pct: Decimal = annual_rate_pct.trim().parse().ok()?;
    let term_months: i64 = term_months.trim().parse().ok()?;
    let term_months = u32::try_from(term_months).ok()?;

    estimate_payment(&LoanTerms {
        principal,
        annual_rate_pct,
        term_months,
        payment_frequency: PaymentFrequency::from_label(payment_frequency),
    })
}

/// Number of installments: the term in years times the payment frequency,
/// rounded up to a whole installment.
pub fn installment_count(term_months: u32, payments_per_year: u32) -> u32 {
    let periods = u64::from(term_months) * u64::from(payments_per_year);
    ((periods + MONTHS_PER_YEAR - 1) / MONTHS_PER_YEAR) as u32
}

/// Payment amount for a loan-creation payload.
///
/// The backend requires a numeric `payment_amount`, so a missing estimate
/// coalesces to zero here. The display state is different: it stays empty
/// when no estimate exists.
pub fn submission_payment_amount(estimate: Option<&PaymentEstimate>) -> Money {
    estimate
        .map(PaymentEstimate::display_payment)
        .unwrap_or(Decimal::ZERO)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
