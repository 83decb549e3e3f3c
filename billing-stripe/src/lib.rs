//! # Billing Stripe
//!
//! `PaymentProvider` adapter for the Stripe REST API.
//!
//! Requests are form-encoded with Stripe's bracket notation, authenticated
//! with the secret key as a bearer token and pinned to one API version.

mod client;
mod config;
mod error;

pub use client::StripeClient;
pub use config::{API_VERSION, DEFAULT_API_BASE, DEFAULT_TIMEOUT, StripeConfig};
