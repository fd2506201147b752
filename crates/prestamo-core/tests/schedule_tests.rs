use chrono::NaiveDate;
use prestamo_core::estimator::LoanTerms;
use prestamo_core::schedule::{generate_schedule, ScheduleInput};
use prestamo_core::types::{InterestType, PaymentFrequency};
use prestamo_core::PrestamoError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Schedule generation tests
// ===========================================================================

fn standard_input(interest_type: InterestType) -> ScheduleInput {
    ScheduleInput {
        terms: LoanTerms {
            principal: dec!(10_000),
            annual_rate_pct: dec!(12),
            term_months: 12,
            payment_frequency: PaymentFrequency::Monthly,
        },
        interest_type,
        first_due_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    }
}

#[test]
fn test_installment_count_and_due_dates() {
    let result = generate_schedule(&standard_input(InterestType::Fixed)).unwrap();
    let out = &result.result;

    assert_eq!(out.total_payments, 12);
    assert_eq!(out.installments.len(), 12);

    assert_eq!(
        out.installments[0].due_date,
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    );
    assert_eq!(
        out.installments[11].due_date,
        NaiveDate::from_ymd_opt(2026, 12, 15).unwrap()
    );
}

#[test]
fn test_fixed_mode_splits_evenly() {
    let result = generate_schedule(&standard_input(InterestType::Fixed)).unwrap();
    let out = &result.result;

    // Every non-final installment carries the same interest and principal
    let first = &out.installments[0];
    for installment in &out.installments[..11] {
        assert_eq!(installment.interest, first.interest);
        assert_eq!(installment.principal, first.principal);
        assert_eq!(installment.payment, out.periodic_payment);
    }

    // Level interest = payment - principal/n, so principal splits evenly
    let expected_principal = dec!(10_000) / dec!(12);
    assert!((first.principal - expected_principal).abs() < dec!(0.0000001));

    // Schedule retires the loan exactly
    assert_eq!(out.installments.last().unwrap().balance, Decimal::ZERO);
}

#[test]
fn test_variable_mode_interest_declines() {
    let result = generate_schedule(&standard_input(InterestType::Variable)).unwrap();
    let out = &result.result;

    // First period: 10,000 * 0.01 = 100 of interest
    assert_eq!(out.installments[0].interest, dec!(100));

    for pair in out.installments.windows(2) {
        assert!(
            pair[1].interest < pair[0].interest,
            "declining-balance interest should fall each period: {} then {}",
            pair[0].interest,
            pair[1].interest
        );
    }

    assert_eq!(out.installments.last().unwrap().balance, Decimal::ZERO);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_variable_rd_applies_undivided_annual_rate() {
    let rd = generate_schedule(&standard_input(InterestType::VariableRd)).unwrap();
    let plain = generate_schedule(&standard_input(InterestType::Variable)).unwrap();

    // Period-1 interest is the variable mode's times payments per year:
    // 10,000 * 0.12 = 1,200 vs 10,000 * 0.01 = 100
    assert_eq!(rd.result.installments[0].interest, dec!(1_200));
    assert_eq!(
        rd.result.installments[0].interest,
        plain.result.installments[0].interest * dec!(12)
    );
}

#[test]
fn test_variable_rd_warns_when_payment_does_not_cover_interest() {
    let result = generate_schedule(&standard_input(InterestType::VariableRd)).unwrap();

    // Payment ~888.49 against 1,200 of period interest: balance grows
    assert!(
        result
            .warnings
            .iter()
            .any(|w| w.contains("does not cover period interest")),
        "expected a coverage warning, got {:?}",
        result.warnings
    );

    let out = &result.result;
    assert!(
        out.installments[1].balance > out.installments[0].balance,
        "balance should grow while payments do not cover interest"
    );

    // The final installment still settles the loan in full
    assert_eq!(out.installments.last().unwrap().balance, Decimal::ZERO);
}

#[test]
fn test_totals_are_consistent() {
    for interest_type in [
        InterestType::Fixed,
        InterestType::Variable,
        InterestType::VariableRd,
    ] {
        let result = generate_schedule(&standard_input(interest_type)).unwrap();
        let out = &result.result;

        assert_eq!(
            out.total_principal,
            dec!(10_000),
            "total principal should equal the amount borrowed ({interest_type:?})"
        );
        assert_eq!(
            out.total_paid,
            out.total_principal + out.total_interest,
            "paid = principal + interest ({interest_type:?})"
        );
    }
}

#[test]
fn test_weekly_schedule_steps_seven_days() {
    let mut input = standard_input(InterestType::Variable);
    input.terms.payment_frequency = PaymentFrequency::Weekly;
    input.terms.term_months = 3;

    let result = generate_schedule(&input).unwrap();
    let out = &result.result;

    // 3 months weekly: ceil(3/12 * 52) = 13 installments
    assert_eq!(out.total_payments, 13);
    assert_eq!(
        out.installments[1].due_date,
        NaiveDate::from_ymd_opt(2026, 1, 22).unwrap()
    );
    assert_eq!(
        out.installments[12].due_date,
        NaiveDate::from_ymd_opt(2026, 4, 9).unwrap()
    );
}

#[test]
fn test_envelope_metadata() {
    let result = generate_schedule(&standard_input(InterestType::Fixed)).unwrap();

    assert!(result.methodology.contains("French Amortization"));
    assert_eq!(result.metadata.precision, "rust_decimal_128bit");
    assert_eq!(
        result.assumptions.get("term_months").and_then(|v| v.as_u64()),
        Some(12)
    );
}

#[test]
fn test_validation_rejects_non_positive_principal() {
    let mut input = standard_input(InterestType::Fixed);
    input.terms.principal = Decimal::ZERO;

    let err = generate_schedule(&input).unwrap_err();
    match err {
        PrestamoError::InvalidInput { field, .. } => assert_eq!(field, "principal"),
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_zero_rate() {
    let mut input = standard_input(InterestType::Fixed);
    input.terms.annual_rate_pct = Decimal::ZERO;

    let err = generate_schedule(&input).unwrap_err();
    match err {
        PrestamoError::InvalidInput { field, .. } => assert_eq!(field, "annual_rate_pct"),
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_zero_term() {
    let mut input = standard_input(InterestType::Fixed);
    input.terms.term_months = 0;

    let err = generate_schedule(&input).unwrap_err();
    match err {
        PrestamoError::InvalidInput { field, .. } => assert_eq!(field, "term_months"),
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
}
