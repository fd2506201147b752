//! Validators for Dominican identity and tax document numbers.
//!
//! Cédula and RNC carry check digits; NCF and NSS are validated
//! structurally. All validators are stateless, accept common separators
//! (dashes, spaces), and return `bool` rather than errors.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Mod-11 weights over the first eight RNC digits.
const RNC_WEIGHTS: [u32; 8] = [7, 9, 8, 6, 5, 4, 3, 2];

/// DGII receipt type codes valid in a paper NCF (series B).
const NCF_TYPE_CODES: [&str; 11] = [
    "01", "02", "03", "04", "11", "12", "13", "14", "15", "16", "17",
];

/// DGII receipt type codes valid in an electronic e-CF (series E).
const ECF_TYPE_CODES: [&str; 10] = [
    "31", "32", "33", "34", "41", "43", "44", "45", "46", "47",
];

const CEDULA_LEN: usize = 11;
const RNC_LEN: usize = 9;
const NSS_LEN: usize = 9;

// ---------------------------------------------------------------------------
// Document kinds
// ---------------------------------------------------------------------------

/// The document kinds this module can validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Cedula,
    Rnc,
    Ncf,
    Nss,
}

impl DocumentKind {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "cedula" => Some(DocumentKind::Cedula),
            "rnc" => Some(DocumentKind::Rnc),
            "ncf" => Some(DocumentKind::Ncf),
            "nss" => Some(DocumentKind::Nss),
            _ => None,
        }
    }
}

/// Validate a document number of the given kind.
pub fn validate_document(kind: DocumentKind, value: &str) -> bool {
    match kind {
        DocumentKind::Cedula => validate_cedula(value),
        DocumentKind::Rnc => validate_rnc(value),
        DocumentKind::Ncf => validate_ncf(value),
        DocumentKind::Nss => validate_nss(value),
    }
}

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// Validate a cédula (national ID): 11 digits with a Luhn-style check digit.
///
/// Weights alternate 1, 2 over the first ten digits; two-digit products are
/// reduced by digit sum; the check digit is `(10 - sum mod 10) mod 10`.
pub fn validate_cedula(value: &str) -> bool {
    let digits = match digits_of(value) {
        Some(d) => d,
        None => return false,
    };
    if digits.len() != CEDULA_LEN {
        return false;
    }

    let mut sum = 0u32;
    for (i, d) in digits[..CEDULA_LEN - 1].iter().enumerate() {
        let weight = if i % 2 == 0 { 1 } else { 2 };
        let mut product = d * weight;
        if product > 9 {
            product -= 9;
        }
        sum += product;
    }

    digits[CEDULA_LEN - 1] == (10 - sum % 10) % 10
}

/// Validate an RNC (taxpayer registry number): 9 digits, weighted mod-11.
///
/// Remainder 0 maps to check digit 2, remainder 1 to 1, anything else to
/// `11 - remainder`.
pub fn validate_rnc(value: &str) -> bool {
    let digits = match digits_of(value) {
        Some(d) => d,
        None => return false,
    };
    if digits.len() != RNC_LEN {
        return false;
    }

    let sum: u32 = digits[..RNC_LEN - 1]
        .iter()
        .zip(RNC_WEIGHTS)
        .map(|(d, w)| d * w)
        .sum();

    let check = match sum % 11 {
        0 => 2,
        1 => 1,
        r => 11 - r,
    };

    digits[RNC_LEN - 1] == check
}

/// Validate an NCF (fiscal receipt number) structurally.
///
/// Series B: `B` + 2-digit type code + 8-digit sequence (11 chars).
/// Series E (e-CF): `E` + 2-digit type code + 10-digit sequence (13 chars).
/// Type codes are checked against the DGII series tables; NCF numbers carry
/// no check digit.
pub fn validate_ncf(value: &str) -> bool {
    let normalized: String = value
        .chars()
        .filter(|c| *c != '-' && *c != ' ')
        .collect::<String>()
        .to_uppercase();

    if !normalized.is_ascii() {
        return false;
    }

    let (type_codes, sequence_len): (&[&str], usize) = match normalized.chars().next() {
        Some('B') => (&NCF_TYPE_CODES, 8),
        Some('E') => (&ECF_TYPE_CODES, 10),
        _ => return false,
    };

    if normalized.len() != 3 + sequence_len {
        return false;
    }
    if !type_codes.contains(&&normalized[1..3]) {
        return false;
    }

    normalized[3..].chars().all(|c| c.is_ascii_digit())
}

/// Validate an NSS (social security number) structurally: 9 digits, not all
/// zero. The NSS has no published check digit.
pub fn validate_nss(value: &str) -> bool {
    let digits = match digits_of(value) {
        Some(d) => d,
        None => return false,
    };
    digits.len() == NSS_LEN && digits.iter().any(|&d| d != 0)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Extract digits, tolerating dash and space separators. Any other
/// non-digit character invalidates the input.
fn digits_of(value: &str) -> Option<Vec<u32>> {
    let mut digits = Vec::with_capacity(value.len());
    for c in value.chars() {
        if c == '-' || c == ' ' {
            continue;
        }
        digits.push(c.to_digit(10)?);
    }
    Some(digits)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
