//! Error types for the billing facade.

use std::fmt;

/// Input fields the facade requires before calling the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    CustomerId,
    SubscriptionId,
    PriceId,
    PaymentMethodId,
    Token,
    InvoiceId,
    Amount,
}

impl Field {
    /// Caller-facing field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::CustomerId => "customerId",
            Field::SubscriptionId => "subscriptionId",
            Field::PriceId => "priceId",
            Field::PaymentMethodId => "paymentMethodId",
            Field::Token => "token",
            Field::InvoiceId => "invoiceId",
            Field::Amount => "amount",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures reported by the provider adapter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    /// The provider answered with an error object. Displays its message verbatim.
    #[error("{message}")]
    Api {
        status: u16,
        kind: Option<String>,
        code: Option<String>,
        message: String,
    },

    #[error("{0}")]
    Transport(String),

    #[error("Failed to decode provider response: {0}")]
    Decode(String),

    #[error("{0}")]
    Config(String),
}

impl ProviderError {
    /// Shorthand for an API error without type or code.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ProviderError::Api {
            status,
            kind: None,
            code: None,
            message: message.into(),
        }
    }
}

/// Everything a facade operation can fail with.
///
/// Validation and state errors are detected before (or between) provider
/// calls; `Provider` wraps whatever the remote call reported.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FacadeError {
    #[error("{0} field is required.")]
    MissingField(Field),

    #[error("trialDays field must be a number.")]
    TrialDaysNotNumber,

    #[error("trialDays field is out of range.")]
    TrialDaysOutOfRange,

    #[error(
        "User has different default payment method. Either attach new  payment method to user or change user default payment methodId.{}",
        .on_file.as_deref().unwrap_or_default()
    )]
    PaymentMethodMismatch { on_file: Option<String> },

    #[error(
        "Your subscription is already canceled(to use any feature first reactivate your subscription)."
    )]
    SubscriptionCanceled,

    #[error("CustomerId does not match with subscription customerId.")]
    CustomerMismatch,

    #[error("Cannot upgrade to same priceId.")]
    SamePrice,

    #[error("Subscription has no items.")]
    EmptySubscription,

    #[error("This customer has no default payment method set.")]
    NoDefaultPaymentMethod,

    #[error("Invoice status is not open.")]
    InvoiceNotOpen,

    #[error("Invoice has no payment intent to confirm.")]
    MissingPaymentIntent,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_messages() {
        assert_eq!(
            FacadeError::MissingField(Field::Email).to_string(),
            "email field is required."
        );
        assert_eq!(
            FacadeError::MissingField(Field::SubscriptionId).to_string(),
            "subscriptionId field is required."
        );
    }

    #[test]
    fn test_mismatch_appends_on_file_method() {
        let err = FacadeError::PaymentMethodMismatch {
            on_file: Some("pm_old".into()),
        };
        assert!(err.to_string().ends_with("methodId.pm_old"));

        let err = FacadeError::PaymentMethodMismatch { on_file: None };
        assert!(err.to_string().ends_with("methodId."));
    }

    #[test]
    fn test_provider_message_is_verbatim() {
        let err: FacadeError = ProviderError::api(402, "Your card was declined.").into();
        assert_eq!(err.to_string(), "Your card was declined.");
    }
}
