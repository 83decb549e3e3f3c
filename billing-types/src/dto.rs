//! Caller-facing request types.

use serde::{Deserialize, Serialize};

use crate::error::FacadeError;

/// Details for a new customer. Both fields must be non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerInput {
    pub name: String,
    pub email: String,
}

/// Request to start a subscription for a customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    pub customer_id: String,
    pub price_id: String,
    /// Must match the customer's default payment method.
    pub payment_method_id: String,
    /// Free trial length in days. `None` or `0` starts billing immediately.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_days: Option<u32>,
}

/// Parses a textual trial length as received from an untyped source.
///
/// Blank input means no trial.
pub fn parse_trial_days(raw: &str) -> Result<Option<u32>, FacadeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| FacadeError::TrialDaysNotNumber)
}

// ─────────────────────────────────────────────────────────────────────────────
// Provider call parameters
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters for creating a subscription at the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubscription {
    pub customer_id: String,
    pub price_id: String,
    /// Trial end in epoch seconds.
    pub trial_end: Option<i64>,
}

/// Parameters for creating a payment intent.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPaymentIntent {
    /// Amount in minor currency units.
    pub amount: u64,
    pub currency: String,
    pub payment_method_id: String,
    /// Confirm immediately instead of leaving the intent for the client.
    pub confirm: bool,
}

/// Parameters for adding a line to a draft invoice.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoiceItem {
    pub customer_id: String,
    pub invoice_id: String,
    pub price_id: String,
    pub quantity: u64,
}
