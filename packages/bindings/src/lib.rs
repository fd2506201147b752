use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Payment estimation
// ---------------------------------------------------------------------------

/// Estimate the periodic payment for a set of loan terms.
///
/// Returns `{ estimate, payment_amount }`: `estimate` is null when the
/// terms produce no estimate, while `payment_amount` is always numeric
/// (zero-coalesced) for loan-creation payloads.
#[napi]
pub fn estimate_payment(terms_json: String) -> NapiResult<String> {
    let terms: prestamo_core::estimator::LoanTerms =
        serde_json::from_str(&terms_json).map_err(to_napi_error)?;
    let estimate = prestamo_core::estimator::estimate_payment(&terms);
    let payment_amount = prestamo_core::estimator::submission_payment_amount(estimate.as_ref());

    serde_json::to_string(&serde_json::json!({
        "estimate": estimate,
        "payment_amount": payment_amount.to_string(),
    }))
    .map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Schedule generation
// ---------------------------------------------------------------------------

#[napi]
pub fn generate_schedule(input_json: String) -> NapiResult<String> {
    let input: prestamo_core::schedule::ScheduleInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = prestamo_core::schedule::generate_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Document validation
// ---------------------------------------------------------------------------

#[napi]
pub fn validate_cedula(value: String) -> bool {
    prestamo_core::dominican_id::validate_cedula(&value)
}

#[napi]
pub fn validate_rnc(value: String) -> bool {
    prestamo_core::dominican_id::validate_rnc(&value)
}

#[napi]
pub fn validate_ncf(value: String) -> bool {
    prestamo_core::dominican_id::validate_ncf(&value)
}

#[napi]
pub fn validate_nss(value: String) -> bool {
    prestamo_core::dominican_id::validate_nss(&value)
}
