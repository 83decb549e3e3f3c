//! Typed provider objects.
//!
//! Only the fields the facade reads are typed; everything else the provider
//! returns is kept in an `extra` map so callers still see the full payload.

pub mod customer;
pub mod expandable;
pub mod ids;
pub mod invoice;
pub mod payment;
pub mod subscription;

pub use customer::{Customer, DeletedCustomer, InvoiceSettings};
pub use expandable::{Expandable, ProviderObject};
pub use ids::{
    CustomerId, InvoiceId, InvoiceItemId, PaymentIntentId, PaymentMethodId, PriceId,
    SubscriptionId, SubscriptionItemId,
};
pub use invoice::{Invoice, InvoiceItem, InvoiceStatus};
pub use payment::{PaymentIntent, PaymentIntentStatus, PaymentMethod};
pub use subscription::{Price, Subscription, SubscriptionItem, SubscriptionItems, SubscriptionStatus};
