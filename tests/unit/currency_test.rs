use pesapay::core::Currency;
use rust_decimal_macros::dec;

#[test]
fn test_supported_currencies_round_trip_through_display() {
    for currency in [Currency::KES, Currency::UGX, Currency::TZS, Currency::USD] {
        assert_eq!(currency.to_string().parse::<Currency>().unwrap(), currency);
    }
}

#[test]
fn test_scale_limits() {
    assert!(Currency::KES.validate_amount(dec!(0.01)).is_ok());
    assert!(Currency::KES.validate_amount(dec!(0.001)).is_err());
    assert!(Currency::TZS.validate_amount(dec!(1500.50)).is_ok());
    assert!(Currency::UGX.validate_amount(dec!(1500)).is_ok());
    assert!(Currency::UGX.validate_amount(dec!(1500.5)).is_err());
}

#[test]
fn test_error_messages_name_currency() {
    let err = Currency::UGX.validate_amount(dec!(10.25)).unwrap_err();
    assert!(err.contains("UGX"));
    assert!(err.contains("0 decimal places"));

    let err = Currency::USD.validate_amount(dec!(-1)).unwrap_err();
    assert_eq!(err, "Amount must be greater than zero");
}

#[test]
fn test_serde_uses_uppercase_codes() {
    assert_eq!(serde_json::to_string(&Currency::KES).unwrap(), "\"KES\"");
    let parsed: Currency = serde_json::from_str("\"TZS\"").unwrap();
    assert_eq!(parsed, Currency::TZS);
}
