use super::ports::PaymentCheck;
use rust_decimal::Decimal;

/// Number of characters a card number must have to be accepted.
pub const CARD_NUMBER_LEN: usize = 16;

/// Card details for a `PaymentMethod::CreditCard` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetails {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl CardDetails {
    pub fn new(
        card_number: impl Into<String>,
        expiry_date: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiry_date: expiry_date.into(),
            cvv: cvv.into(),
        }
    }

    /// Last four characters of the card number, for log output.
    pub fn masked(&self) -> String {
        let len = self.card_number.chars().count();
        let tail: String = self.card_number.chars().skip(len.saturating_sub(4)).collect();
        format!("****{tail}")
    }
}

impl PaymentCheck for CardDetails {
    /// Only the length of the number is checked: no Luhn, no expiry, no cvv.
    fn approve(&self) -> bool {
        self.card_number.chars().count() == CARD_NUMBER_LEN
    }
}

/// Account details for a `PaymentMethod::Wallet` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletDetails {
    pub email: String,
}

impl WalletDetails {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// First character of the address plus its domain, for log output.
    pub fn masked(&self) -> String {
        let head: String = self.email.chars().take(1).collect();
        match self.email.split_once('@') {
            Some((_, domain)) => format!("{head}***@{domain}"),
            None => format!("{head}***"),
        }
    }

    pub fn has_valid_email(&self) -> bool {
        self.email.contains('@')
    }
}

impl PaymentCheck for WalletDetails {
    /// Approves when the email does NOT look valid.
    ///
    /// This is inverted from what the check is presumably meant to do, and is
    /// kept that way on purpose so existing results stay reproducible. An
    /// address such as `customer@example.com` is declined while
    /// `customerexample.com` goes through.
    fn approve(&self) -> bool {
        !self.has_valid_email()
    }
}

/// The payment kind together with its variant-specific fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard(CardDetails),
    Wallet(WalletDetails),
}

impl PaymentMethod {
    pub fn kind(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard(_) => "credit_card",
            PaymentMethod::Wallet(_) => "wallet",
        }
    }
}

impl PaymentCheck for PaymentMethod {
    fn approve(&self) -> bool {
        match self {
            PaymentMethod::CreditCard(card) => card.approve(),
            PaymentMethod::Wallet(wallet) => wallet.approve(),
        }
    }
}

/// A single payment to process. Built at call time and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    pub amount: Decimal,
    pub method: PaymentMethod,
}

impl PaymentRequest {
    pub fn credit_card(
        amount: Decimal,
        card_number: impl Into<String>,
        expiry_date: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            method: PaymentMethod::CreditCard(CardDetails::new(card_number, expiry_date, cvv)),
        }
    }

    pub fn wallet(amount: Decimal, email: impl Into<String>) -> Self {
        Self {
            amount,
            method: PaymentMethod::Wallet(WalletDetails::new(email)),
        }
    }
}
