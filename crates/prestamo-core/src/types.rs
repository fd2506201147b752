use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.01 = 1% per period). Never as percentages.
pub type Rate = Decimal;

/// Decimal places for money at the display/submission boundary.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Round a monetary amount for display or submission.
///
/// The single rounding point in the crate. Calculations keep full precision;
/// amounts are reduced to two places only when presented or submitted.
pub fn round_display(amount: Money) -> Money {
    amount.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Currency code
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    DOP,
    USD,
    EUR,
    Other(String),
}

impl Currency {
    /// Symbol shown next to inline amounts.
    pub fn symbol(&self) -> &str {
        match self {
            Currency::DOP => "RD$",
            Currency::USD => "US$",
            Currency::EUR => "€",
            Currency::Other(code) => code.as_str(),
        }
    }

    /// Format an amount for inline display: symbol plus two decimals.
    pub fn format(&self, amount: Money) -> String {
        format!("{}{:.2}", self.symbol(), round_display(amount))
    }
}

/// Installment frequency.
///
/// Unrecognized labels fall back to monthly, both here and when
/// deserializing. The fallback is load-bearing: intake forms submit the
/// frequency as free text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFrequency {
    Daily,
    Weekly,
    Biweekly,
    #[default]
    Monthly,
}

impl PaymentFrequency {
    /// Number of installments per year for this frequency.
    pub fn payments_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Daily => 365,
            PaymentFrequency::Weekly => 52,
            PaymentFrequency::Biweekly => 26,
            PaymentFrequency::Monthly => 12,
        }
    }

    /// Parse a textual label, falling back to monthly for anything
    /// unrecognized.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "daily" => PaymentFrequency::Daily,
            "weekly" => PaymentFrequency::Weekly,
            "biweekly" => PaymentFrequency::Biweekly,
            _ => PaymentFrequency::Monthly,
        }
    }
}

impl<'de> Deserialize<'de> for PaymentFrequency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(PaymentFrequency::from_label(&label))
    }
}

/// How interest is allocated across installments in a schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestType {
    /// Total interest spread evenly across all installments.
    #[default]
    Fixed,
    /// Interest on the declining balance at the periodic rate.
    Variable,
    /// Interest on the declining balance at the full annual rate,
    /// not divided by payments per year.
    VariableRd,
}

impl InterestType {
    /// Parse a textual label. No fallback here: an unknown interest type is
    /// a caller error, unlike the frequency field.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "fixed" => Some(InterestType::Fixed),
            "variable" => Some(InterestType::Variable),
            "variable_rd" => Some(InterestType::VariableRd),
            _ => None,
        }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
