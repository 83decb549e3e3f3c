//! Customer objects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::expandable::{Expandable, ProviderObject};
use super::ids::{CustomerId, PaymentMethodId};
use super::payment::PaymentMethod;

/// A customer as returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub invoice_settings: InvoiceSettings,
    /// Set when the customer was deleted; the rest of the object is then absent.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deleted: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Customer {
    /// Id of the payment method invoices are charged against, if one is set.
    pub fn default_payment_method(&self) -> Option<PaymentMethodId> {
        self.invoice_settings
            .default_payment_method
            .as_ref()
            .map(|pm| PaymentMethodId::new(pm.id()))
    }
}

impl ProviderObject for Customer {
    fn object_id(&self) -> &str {
        self.id.as_str()
    }
}

/// Invoice defaults stored on the customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSettings {
    #[serde(default)]
    pub default_payment_method: Option<Expandable<PaymentMethod>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Confirmation returned when a customer is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedCustomer {
    pub id: CustomerId,
    #[serde(default)]
    pub deleted: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
