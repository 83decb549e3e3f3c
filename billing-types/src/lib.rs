//! # Billing Types
//!
//! Provider payloads, port traits and the result envelope for the billing
//! facade. This crate has no IO of its own - only data structures, the error
//! taxonomy and the trait the provider adapter implements.
//!
//! ## Layout
//!
//! - `domain/` - Typed provider objects (Customer, Subscription, Invoice, ...)
//! - `ports/` - The `PaymentProvider` trait adapters must implement
//! - `dto/` - Caller-facing request types
//! - `envelope/` - The `{status, data | error}` result shape
//! - `error/` - Facade and provider error types

pub mod domain;
pub mod dto;
pub mod envelope;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Customer, CustomerId, DeletedCustomer, Expandable, Invoice, InvoiceId, InvoiceItem,
    InvoiceItemId, InvoiceSettings, InvoiceStatus, PaymentIntent, PaymentIntentId,
    PaymentIntentStatus, PaymentMethod, PaymentMethodId, Price, PriceId, ProviderObject,
    Subscription, SubscriptionId, SubscriptionItem, SubscriptionItemId, SubscriptionItems,
    SubscriptionStatus,
};
pub use dto::*;
pub use envelope::{Envelope, EnvelopePayload};
pub use error::{FacadeError, Field, ProviderError};
pub use ports::PaymentProvider;
