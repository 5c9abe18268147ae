use pesapay::core::{AppError, Currency};
use pesapay::payments::PaymentRequest;
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;

/// Property-based tests for payment request validation
///
/// Validates:
/// - Any positive amount with currency precision is accepted as-is
/// - Zero and negative amounts are always rejected
/// - Non-numeric strings are always rejected
/// - A missing email is rejected regardless of the amount

fn request(amount: serde_json::Value, email: Option<&str>) -> PaymentRequest {
    serde_json::from_value(json!({
        "amount": amount,
        "customer": { "email": email }
    }))
    .unwrap()
}

#[cfg(test)]
mod payment_validation_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_positive_amounts_are_accepted(cents in 1u64..100_000_000u64) {
            let amount = Decimal::from(cents) / Decimal::from(100);
            let payment = request(json!(amount.to_string()), Some("jane@example.com"))
                .validate(Currency::KES)
                .unwrap();

            prop_assert_eq!(payment.amount, amount);
            prop_assert!(payment.amount > Decimal::ZERO);
        }

        #[test]
        fn test_non_positive_amounts_are_rejected(value in -1_000_000i64..=0i64) {
            let result = request(json!(value), Some("jane@example.com")).validate(Currency::KES);
            prop_assert!(matches!(result, Err(AppError::Validation(_))));
        }

        #[test]
        fn test_non_numeric_amounts_are_rejected(text in "[a-zA-Z ]{1,12}") {
            let result = request(json!(text), Some("jane@example.com")).validate(Currency::KES);
            prop_assert!(matches!(result, Err(AppError::Validation(ref m)) if m == "Invalid amount"));
        }

        #[test]
        fn test_missing_email_is_rejected(whole in 1u64..1_000_000u64) {
            let result = request(json!(whole), None).validate(Currency::KES);
            prop_assert!(matches!(result, Err(AppError::Validation(ref m)) if m.contains("email")));
        }

        #[test]
        fn test_whole_shillings_only_for_ugx(whole in 1u64..1_000_000u64, cents in 1u64..100u64) {
            let whole_amount = request(json!(whole), Some("jane@example.com")).validate(Currency::UGX);
            prop_assert!(whole_amount.is_ok());

            let fractional = format!("{}.{:02}", whole, cents);
            let fractional = fractional.trim_end_matches('0').to_string();
            let result = request(json!(fractional), Some("jane@example.com")).validate(Currency::UGX);
            prop_assert!(result.is_err());
        }
    }
}
