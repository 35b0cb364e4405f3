//! Domain layer: payment requests and the checks each payment method applies.

pub mod ports;
pub mod request;
