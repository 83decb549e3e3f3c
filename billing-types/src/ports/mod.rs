//! Port traits (interfaces for adapters).
//!
//! The facade depends on this trait, not on a concrete provider client.

mod provider;

pub use provider::PaymentProvider;
