/// A variant-specific rule that decides whether a payment goes through.
///
/// Implemented by the payload of every `PaymentMethod` variant. The check never
/// fails with an error; a rejected payment is simply `false`.
pub trait PaymentCheck {
    fn approve(&self) -> bool;
}
