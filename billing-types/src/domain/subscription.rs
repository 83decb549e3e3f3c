//! Subscription objects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::customer::Customer;
use super::expandable::{Expandable, ProviderObject};
use super::ids::{PriceId, SubscriptionId, SubscriptionItemId};
use super::invoice::Invoice;

/// Provider-side subscription status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Incomplete,
    IncompleteExpired,
    Trialing,
    Active,
    PastDue,
    Canceled,
    Unpaid,
    Paused,
    #[serde(other)]
    Unknown,
}

/// A recurring price a subscription item is billed at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub id: PriceId,
    #[serde(default)]
    pub unit_amount: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One line of a subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionItem {
    pub id: SubscriptionItemId,
    pub price: Price,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The provider's list wrapper around subscription items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionItems {
    #[serde(default)]
    pub data: Vec<SubscriptionItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A customer's recurring billing agreement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub customer: Expandable<Customer>,
    pub status: SubscriptionStatus,
    #[serde(default)]
    pub cancel_at_period_end: bool,
    #[serde(default)]
    pub items: SubscriptionItems,
    /// Trial end in epoch seconds.
    #[serde(default)]
    pub trial_end: Option<i64>,
    #[serde(default)]
    pub latest_invoice: Option<Expandable<Invoice>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Subscription {
    /// True once cancellation has been scheduled for the end of the period.
    pub fn is_canceling(&self) -> bool {
        self.cancel_at_period_end
    }

    pub fn is_active(&self) -> bool {
        self.status == SubscriptionStatus::Active
    }

    /// Whether the subscription belongs to the given customer.
    pub fn is_owned_by(&self, customer_id: &str) -> bool {
        self.customer.id() == customer_id
    }

    /// The item plan changes apply to. Single-item subscriptions only.
    pub fn primary_item(&self) -> Option<&SubscriptionItem> {
        self.items.data.first()
    }

    pub fn current_price(&self) -> Option<&PriceId> {
        self.primary_item().map(|item| &item.price.id)
    }
}

impl ProviderObject for Subscription {
    fn object_id(&self) -> &str {
        self.id.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscription_json() -> serde_json::Value {
        serde_json::json!({
            "id": "sub_1",
            "object": "subscription",
            "customer": "cus_1",
            "status": "active",
            "cancel_at_period_end": false,
            "items": {
                "object": "list",
                "data": [
                    { "id": "si_1", "price": { "id": "price_basic", "unit_amount": 1000 } }
                ]
            }
        })
    }

    #[test]
    fn test_subscription_accessors() {
        let sub: Subscription = serde_json::from_value(subscription_json()).unwrap();

        assert!(sub.is_active());
        assert!(!sub.is_canceling());
        assert!(sub.is_owned_by("cus_1"));
        assert!(!sub.is_owned_by("cus_2"));
        assert_eq!(sub.current_price().map(PriceId::as_str), Some("price_basic"));
        assert_eq!(sub.primary_item().unwrap().id, "si_1");
    }

    #[test]
    fn test_expanded_customer_owner_check() {
        let mut raw = subscription_json();
        raw["customer"] = serde_json::json!({ "id": "cus_9", "email": "x@example.com" });
        let sub: Subscription = serde_json::from_value(raw).unwrap();
        assert!(sub.is_owned_by("cus_9"));
    }

    #[test]
    fn test_status_snake_case() {
        let mut raw = subscription_json();
        raw["status"] = "past_due".into();
        let sub: Subscription = serde_json::from_value(raw).unwrap();
        assert_eq!(sub.status, SubscriptionStatus::PastDue);
        assert!(!sub.is_active());
    }
}
