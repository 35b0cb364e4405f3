use crate::domain::request::PaymentRequest;
use rust_decimal_macros::dec;

/// The four fixed requests run by the CLI when no input file is given.
///
/// Processing them yields `[true, false, false, true]`: the 16-digit card is
/// approved, the wallet with an `@` address is declined, the 4-digit card is
/// declined and the wallet without `@` is approved.
pub fn sample_requests() -> Vec<PaymentRequest> {
    vec![
        PaymentRequest::credit_card(dec!(150.0), "1234567812345678", "12/24", "123"),
        PaymentRequest::wallet(dec!(75.0), "customer@example.com"),
        PaymentRequest::credit_card(dec!(200.0), "1234", "01/23", "999"),
        PaymentRequest::wallet(dec!(50.0), "customerexample.com"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::PaymentMethod;

    #[test]
    fn test_sample_order_and_amounts() {
        let samples = sample_requests();

        let amounts: Vec<_> = samples.iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![dec!(150.0), dec!(75.0), dec!(200.0), dec!(50.0)]);
        assert!(matches!(samples[0].method, PaymentMethod::CreditCard(_)));
        assert!(matches!(samples[1].method, PaymentMethod::Wallet(_)));
        assert!(matches!(samples[2].method, PaymentMethod::CreditCard(_)));
        assert!(matches!(samples[3].method, PaymentMethod::Wallet(_)));
    }
}
