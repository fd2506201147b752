use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use prestamo_core::estimator::LoanTerms;
use prestamo_core::schedule::{self, ScheduleInput};
use prestamo_core::types::{InterestType, PaymentFrequency};

use crate::input;

/// Arguments for schedule generation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ScheduleArgs {
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

    /// Interest allocation: fixed, variable, or variable_rd
    #[arg(long, default_value = "fixed")]
    pub interest_type: String,

    /// Due date of the first installment (YYYY-MM-DD)
    #[arg(long)]
    pub first_due_date: Option<NaiveDate>,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule_input: ScheduleInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let interest_type = InterestType::from_label(&args.interest_type)
            .ok_or("--interest-type must be one of: fixed, variable, variable_rd")?;
        ScheduleInput {
            terms: LoanTerms {
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
            },
            interest_type,
            first_due_date: args
                .first_due_date
                .ok_or("--first-due-date is required (or provide --input)")?,
        }
    };

    let result = schedule::generate_schedule(&schedule_input)?;
    Ok(serde_json::to_value(result)?)
}
