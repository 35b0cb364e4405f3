use crate::domain::request::PaymentRequest;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
enum MethodKind {
    CreditCard,
    Wallet,
}

/// One CSV row as written: `method,amount,card_number,expiry_date,cvv,email`.
///
/// Which optional columns are required depends on `method`.
#[derive(Debug, Deserialize)]
struct RequestRecord {
    method: MethodKind,
    amount: Decimal,
    card_number: Option<String>,
    expiry_date: Option<String>,
    cvv: Option<String>,
    email: Option<String>,
}

fn required(value: Option<String>, field: &str, method: &str) -> Result<String> {
    value.ok_or_else(|| PaymentError::InvalidRequest(format!("{method} request is missing `{field}`")))
}

impl TryFrom<RequestRecord> for PaymentRequest {
    type Error = PaymentError;

    fn try_from(record: RequestRecord) -> Result<Self> {
        match record.method {
            MethodKind::CreditCard => Ok(PaymentRequest::credit_card(
                record.amount,
                required(record.card_number, "card_number", "credit_card")?,
                required(record.expiry_date, "expiry_date", "credit_card")?,
                required(record.cvv, "cvv", "credit_card")?,
            )),
            MethodKind::Wallet => Ok(PaymentRequest::wallet(
                record.amount,
                required(record.email, "email", "wallet")?,
            )),
        }
    }
}

/// Reads payment requests from a CSV source.
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record lengths, so
/// a row may omit trailing columns its method does not use.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and converts requests.
    ///
    /// A bad row yields an `Err` for that row only; iteration continues.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize::<RequestRecord>()
            .map(|result| result.map_err(PaymentError::from).and_then(PaymentRequest::try_from))
    }
}

impl RequestReader<File> {
    /// Opens a CSV file of payment requests.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}
