use crate::domain::ports::PaymentCheck;
use crate::domain::request::{PaymentMethod, PaymentRequest};

/// Dispatches payment requests to the check of their variant.
///
/// `PaymentProcessor` holds no state. Every outcome is a plain `bool`; there is
/// no distinction between an invalid request and a declined one.
#[derive(Debug, Default, Clone, Copy)]
pub struct PaymentProcessor;

impl PaymentProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Processes a single request and returns whether it was approved.
    pub fn process(&self, request: &PaymentRequest) -> bool {
        let approved = request.method.approve();

        match &request.method {
            PaymentMethod::CreditCard(card) => tracing::debug!(
                method = request.method.kind(),
                amount = %request.amount,
                card = %card.masked(),
                approved,
                "Processed payment"
            ),
            PaymentMethod::Wallet(wallet) => tracing::debug!(
                method = request.method.kind(),
                amount = %request.amount,
                email = %wallet.masked(),
                approved,
                "Processed payment"
            ),
        }

        approved
    }

    /// Processes every request in order, returning one result per request.
    pub fn process_all<'a, I>(&self, requests: I) -> Vec<bool>
    where
        I: IntoIterator<Item = &'a PaymentRequest>,
    {
        requests
            .into_iter()
            .map(|request| self.process(request))
            .collect()
    }
}
