//! Payment methods and payment intents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::customer::Customer;
use super::expandable::{Expandable, ProviderObject};
use super::ids::{PaymentIntentId, PaymentMethodId};

/// A stored payment instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub customer: Option<Expandable<Customer>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProviderObject for PaymentMethod {
    fn object_id(&self) -> &str {
        self.id.as_str()
    }
}

/// Lifecycle of a payment intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    RequiresCapture,
    Canceled,
    Succeeded,
    #[serde(other)]
    Unknown,
}

/// A single attempt to collect an amount from a payment method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: PaymentIntentId,
    /// Amount in minor currency units.
    pub amount: u64,
    pub currency: String,
    pub status: PaymentIntentStatus,
    #[serde(default)]
    pub payment_method: Option<Expandable<PaymentMethod>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProviderObject for PaymentIntent {
    fn object_id(&self) -> &str {
        self.id.as_str()
    }
}
