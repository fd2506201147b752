use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use prestamo_core::estimator::{self, LoanTerms};
use prestamo_core::types::{Currency, PaymentFrequency};

use crate::input;

/// Arguments for payment estimation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct EstimateArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as a percentage (12.5 = 12.5%)
    #[arg(long, alias = "rate")]
    pub annual_rate_pct: Option<Decimal>,

    /// Loan term in months
    #[arg(long, alias = "term")]
    pub term_months: Option<u32>,

    /// Installment frequency: daily, weekly, biweekly, or monthly.
    /// Unrecognized values fall back to monthly.
    #[arg(long, default_value = "monthly")]
    pub frequency: String,

    /// Currency code for the formatted display amount
    #[arg(long, default_value = "DOP")]
    pub currency: String,
}

pub fn run_estimate(args: EstimateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms: LoanTerms = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanTerms {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_pct: args
                .annual_rate_pct
                .ok_or("--annual-rate-pct is required (or provide --input)")?,
            term_months: args
                .term_months
                .ok_or("--term-months is required (or provide --input)")?,
            payment_frequency: PaymentFrequency::from_label(&args.frequency),
        }
    };

    let currency = currency_from_code(&args.currency);
    let estimate = estimator::estimate_payment(&terms);
    let payment_amount = estimator::submission_payment_amount(estimate.as_ref());

    // The display value is null when no estimate exists; payment_amount is
    // always numeric, matching the loan-creation payload contract.
    Ok(match estimate {
        Some(est) => json!({
            "periodic_payment": est.display_payment().to_string(),
            "periodic_rate": est.periodic_rate.to_string(),
            "total_payments": est.total_payments,
            "display": currency.format(est.periodic_payment),
            "payment_amount": payment_amount.to_string(),
        }),
        None => json!({
            "periodic_payment": Value::Null,
            "payment_amount": payment_amount.to_string(),
        }),
    })
}

fn currency_from_code(code: &str) -> Currency {
    match code.to_uppercase().as_str() {
        "DOP" => Currency::DOP,
        "USD" => Currency::USD,
        "EUR" => Currency::EUR,
        other => Currency::Other(other.to_string()),
    }
}
