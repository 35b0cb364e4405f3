//! Application layer.
//!
//! This module defines the `PaymentProcessor`, which dispatches each request to
//! the check of its payment method and collects the outcomes in order.

pub mod processor;
