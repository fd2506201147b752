use prestamo_core::dominican_id::{
    validate_cedula, validate_document, validate_ncf, validate_nss, validate_rnc, DocumentKind,
};

// ===========================================================================
// Cédula
// ===========================================================================

#[test]
fn test_cedula_valid_check_digit() {
    // Weighted sum over 0011122233 is 23, so the check digit is 7
    assert!(validate_cedula("00111222337"));
    assert!(validate_cedula("001-1122233-7"));
    assert!(validate_cedula("001 1122233 7"));
}

#[test]
fn test_cedula_corrupted_check_digit() {
    assert!(!validate_cedula("00111222338"));
    assert!(!validate_cedula("00111222330"));
}

#[test]
fn test_cedula_structure() {
    assert!(!validate_cedula("0011122233"));
    assert!(!validate_cedula("001112223370"));
    assert!(!validate_cedula("0011122233X"));
    assert!(!validate_cedula(""));
}

// ===========================================================================
// RNC
// ===========================================================================

#[test]
fn test_rnc_valid_check_digit() {
    // 1*7 + 3*9 + 0*8 + 5*6 + 6*5 + 2*4 + 4*3 + 6*2 = 126, 126 % 11 = 5,
    // check digit 11 - 5 = 6
    assert!(validate_rnc("130562466"));
    assert!(validate_rnc("1-30-56246-6"));

    // 1*7 + 1*8 = 15, 15 % 11 = 4, check digit 7
    assert!(validate_rnc("101000007"));
}

#[test]
fn test_rnc_mod11_remainder_edges() {
    // Weighted sum 22: remainder 0 maps to check digit 2
    assert!(validate_rnc("020001002"));
    // Weighted sum 12: remainder 1 maps to check digit 1
    assert!(validate_rnc("000003001"));
}

#[test]
fn test_rnc_corrupted_check_digit() {
    assert!(!validate_rnc("130562465"));
    assert!(!validate_rnc("101000001"));
}

#[test]
fn test_rnc_structure() {
    assert!(!validate_rnc("13056246"));
    assert!(!validate_rnc("1305624660"));
    assert!(!validate_rnc("13056246A"));
}

// ===========================================================================
// NCF
// ===========================================================================

#[test]
fn test_ncf_series_b() {
    assert!(validate_ncf("B0100000001"));
    assert!(validate_ncf("B0400000251"));
    assert!(validate_ncf("b1700000001"));
}

#[test]
fn test_ncf_series_e() {
    assert!(validate_ncf("E310000000005"));
    assert!(validate_ncf("E440000000120"));
}

#[test]
fn test_ncf_invalid_type_codes() {
    // 05 is not a DGII series-B type code
    assert!(!validate_ncf("B0500000001"));
    // 01 is a paper code, not an e-CF code
    assert!(!validate_ncf("E010000000005"));
}

#[test]
fn test_ncf_structure() {
    assert!(!validate_ncf("B010000001"));
    assert!(!validate_ncf("B01000000012"));
    assert!(!validate_ncf("A0100000001"));
    assert!(!validate_ncf("B01000000X1"));
    assert!(!validate_ncf(""));
}

// ===========================================================================
// NSS
// ===========================================================================

#[test]
fn test_nss_structure() {
    assert!(validate_nss("123456789"));
    assert!(validate_nss("12-3456789"));
    assert!(!validate_nss("000000000"));
    assert!(!validate_nss("12345678"));
    assert!(!validate_nss("1234567890"));
    assert!(!validate_nss("12345678X"));
}

// ===========================================================================
// Dispatch
// ===========================================================================

#[test]
fn test_validate_document_dispatch() {
    assert!(validate_document(DocumentKind::Cedula, "00111222337"));
    assert!(validate_document(DocumentKind::Rnc, "130562466"));
    assert!(validate_document(DocumentKind::Ncf, "B0100000001"));
    assert!(validate_document(DocumentKind::Nss, "123456789"));

    assert!(!validate_document(DocumentKind::Cedula, "130562466"));
    assert!(!validate_document(DocumentKind::Rnc, "00111222337"));
}
