//! Installment schedule generation.
//!
//! Expands a set of loan terms into a dated installment schedule, splitting
//! each level payment into principal and interest under one of three
//! allocation modes: `fixed` (total interest spread evenly), `variable`
//! (declining balance at the periodic rate), and `variable_rd` (declining
//! balance at the undivided annual rate). All math in
//! `rust_decimal::Decimal`.

use chrono::{Days, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::PrestamoError;
use crate::estimator::{estimate_payment, LoanTerms};
use crate::types::{
    with_metadata, ComputationOutput, InterestType, Money, PaymentFrequency, Rate,
};
use crate::PrestamoResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const PERCENT_DIVISOR: Decimal = Decimal::ONE_HUNDRED;

// ---------------------------------------------------------------------------
// Input / Output Types
// ---------------------------------------------------------------------------

/// Input for schedule generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub terms: LoanTerms,
    pub interest_type: InterestType,
    /// Due date of the first installment.
    pub first_due_date: NaiveDate,
}

/// A single installment row. Amounts are full precision; rounding is a
/// presentation concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Installment {
    /// 1-based installment number.
    pub number: u32,
    pub due_date: NaiveDate,
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    /// Outstanding balance after this installment.
    pub balance: Money,
}

/// Output of schedule generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutput {
    /// Level payment from the estimator (final installment may differ).
    pub periodic_payment: Money,
    pub total_payments: u32,
    pub installments: Vec<Installment>,
    pub total_interest: Money,
    pub total_principal: Money,
    pub total_paid: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate the installment schedule for a loan.
///
/// The level payment comes from the annuity estimator; the interest type
/// controls only how each payment splits into principal and interest. The
/// final installment repays the exact remaining balance, so every schedule
/// retires the loan.
pub fn generate_schedule(
    input: &ScheduleInput,
) -> PrestamoResult<ComputationOutput<ScheduleOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_schedule_input(input)?;

    let estimate = estimate_payment(&input.terms).ok_or_else(|| PrestamoError::InvalidInput {
        field: "terms".into(),
        reason: "No level payment is defined for these terms".into(),
    })?;

    let payment = estimate.periodic_payment;
    let n = estimate.total_payments;

    // Fixed mode spreads the whole interest load evenly across installments.
    let total_interest_level = payment * Decimal::from(n) - input.terms.principal;
    let level_interest = total_interest_level / Decimal::from(n);

    let period_rate = declining_balance_rate(&input.terms, input.interest_type);

    let mut installments: Vec<Installment> = Vec::with_capacity(n as usize);
    let mut balance = input.terms.principal;
    let mut coverage_warned = false;

    for number in 1..=n {
        let due_date =
            due_date_for(input.first_due_date, input.terms.payment_frequency, number - 1)?;

        let interest = match input.interest_type {
            InterestType::Fixed => level_interest,
            InterestType::Variable | InterestType::VariableRd => balance * period_rate,
        };

        let (installment_payment, principal) = if number == n {
            // Final installment settles whatever remains.
            (balance + interest, balance)
        } else {
            let principal = payment - interest;
            if principal <= Decimal::ZERO && !coverage_warned {
                warnings.push(format!(
                    "Installment {number}: level payment {payment} does not cover period \
                     interest {interest}; balance grows until final settlement"
                ));
                coverage_warned = true;
            }
            (payment, principal)
        };

        balance -= principal;

        installments.push(Installment {
            number,
            due_date,
            payment: installment_payment,
            interest,
            principal,
            balance,
        });
    }

    let total_interest: Money = installments.iter().map(|i| i.interest).sum();
    let total_principal: Money = installments.iter().map(|i| i.principal).sum();
    let total_paid: Money = installments.iter().map(|i| i.payment).sum();

    let output = ScheduleOutput {
        periodic_payment: payment,
        total_payments: n,
        installments,
        total_interest,
        total_principal,
        total_paid,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        methodology(input.interest_type),
        &serde_json::json!({
            "principal": input.terms.principal.to_string(),
            "annual_rate_pct": input.terms.annual_rate_pct.to_string(),
            "term_months": input.terms.term_months,
            "payment_frequency": input.terms.payment_frequency,
            "interest_type": input.interest_type,
            "first_due_date": input.first_due_date,
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_schedule_input(input: &ScheduleInput) -> PrestamoResult<()> {
    if input.terms.principal <= Decimal::ZERO {
        return Err(PrestamoError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    if input.terms.term_months == 0 {
        return Err(PrestamoError::InvalidInput {
            field: "term_months".into(),
            reason: "Term must be at least 1 month".into(),
        });
    }
    if input.terms.annual_rate_pct <= Decimal::ZERO {
        // Mirrors the estimator: a zero rate has no defined level payment.
        return Err(PrestamoError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Annual rate must be positive; zero-rate loans have no level payment".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Per-period rate used for declining-balance interest. The `variable_rd`
/// mode applies the full annual rate each period, undivided.
fn declining_balance_rate(terms: &LoanTerms, interest_type: InterestType) -> Rate {
    let annual = terms.annual_rate_pct / PERCENT_DIVISOR;
    match interest_type {
        InterestType::VariableRd => annual,
        InterestType::Fixed | InterestType::Variable => {
            annual / Decimal::from(terms.payment_frequency.payments_per_year())
        }
    }
}

/// Due date of the installment `steps` periods after the first.
///
/// Daily, weekly, and biweekly frequencies step in whole days; monthly
/// steps in calendar months, clamping to the last day of shorter months.
fn due_date_for(
    first: NaiveDate,
    frequency: PaymentFrequency,
    steps: u32,
) -> PrestamoResult<NaiveDate> {
    let date = match frequency {
        PaymentFrequency::Daily => first.checked_add_days(Days::new(u64::from(steps))),
        PaymentFrequency::Weekly => first.checked_add_days(Days::new(u64::from(steps) * 7)),
        PaymentFrequency::Biweekly => first.checked_add_days(Days::new(u64::from(steps) * 14)),
        PaymentFrequency::Monthly => first.checked_add_months(Months::new(steps)),
    };
    date.ok_or_else(|| {
        PrestamoError::DateError(format!("Due date overflows {steps} periods after {first}"))
    })
}

fn methodology(interest_type: InterestType) -> &'static str {
    match interest_type {
        InterestType::Fixed => "French Amortization Schedule — interest spread evenly",
        InterestType::Variable => "French Amortization Schedule — declining balance, periodic rate",
        InterestType::VariableRd => {
            "French Amortization Schedule — declining balance, undivided annual rate"
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_due_date_stepping() {
        let first = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

        let d = due_date_for(first, PaymentFrequency::Daily, 3).unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());

        let d = due_date_for(first, PaymentFrequency::Weekly, 2).unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2026, 1, 29).unwrap());

        let d = due_date_for(first, PaymentFrequency::Biweekly, 1).unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2026, 1, 29).unwrap());

        let d = due_date_for(first, PaymentFrequency::Monthly, 11).unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2026, 12, 15).unwrap());
    }

    #[test]
    fn test_monthly_due_dates_clamp_to_month_end() {
        let first = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let d = due_date_for(first, PaymentFrequency::Monthly, 1).unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
        let d = due_date_for(first, PaymentFrequency::Monthly, 2).unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());
    }

    #[test]
    fn test_declining_balance_rate_modes() {
        let terms = LoanTerms {
            principal: dec!(10_000),
            annual_rate_pct: dec!(12),
            term_months: 12,
            payment_frequency: PaymentFrequency::Monthly,
        };
        assert_eq!(
            declining_balance_rate(&terms, InterestType::Variable),
            dec!(0.01)
        );
        // variable_rd applies the annual rate per period, undivided
        assert_eq!(
            declining_balance_rate(&terms, InterestType::VariableRd),
            dec!(0.12)
        );
    }
}
