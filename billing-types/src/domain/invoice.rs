//! Invoices and invoice items.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::customer::Customer;
use super::expandable::{Expandable, ProviderObject};
use super::ids::{InvoiceId, InvoiceItemId};
use super::payment::PaymentIntent;
use super::subscription::{Price, Subscription};

/// Invoice lifecycle: draft, then finalized to open, then paid or closed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Open,
    Paid,
    Uncollectible,
    Void,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    #[serde(default)]
    pub customer: Option<Expandable<Customer>>,
    #[serde(default)]
    pub subscription: Option<Expandable<Subscription>>,
    #[serde(default)]
    pub status: Option<InvoiceStatus>,
    #[serde(default)]
    pub amount_due: Option<i64>,
    #[serde(default)]
    pub payment_intent: Option<Expandable<PaymentIntent>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Invoice {
    pub fn is_open(&self) -> bool {
        self.status == Some(InvoiceStatus::Open)
    }
}

impl ProviderObject for Invoice {
    fn object_id(&self) -> &str {
        self.id.as_str()
    }
}

/// A one-off line added to an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub id: InvoiceItemId,
    #[serde(default)]
    pub invoice: Option<Expandable<Invoice>>,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub quantity: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
