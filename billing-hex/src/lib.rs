//! # Billing Hex
//!
//! The payment facade: validates caller input, sequences provider calls and
//! reports a uniform result.
//!
//! The facade is generic over `P: PaymentProvider`, so the Stripe adapter is
//! injected by the caller and tests run against an in-memory provider.

pub mod facade;


pub use facade::{DEFAULT_CURRENCY, PaymentFacade, trial_end};
