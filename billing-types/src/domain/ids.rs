//! Provider object identifiers.
//!
//! The provider owns id generation; these newtypes only keep a customer id
//! from being passed where a price id is expected.

use serde::{Deserialize, Serialize};

macro_rules! provider_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a provider-issued id.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

provider_id!(
    /// Customer id (`cus_...`).
    CustomerId
);
provider_id!(
    /// Subscription id (`sub_...`).
    SubscriptionId
);
provider_id!(
    /// Subscription item id (`si_...`).
    SubscriptionItemId
);
provider_id!(
    /// Price id (`price_...`).
    PriceId
);
provider_id!(
    /// Payment method id (`pm_...`).
    PaymentMethodId
);
provider_id!(
    /// Invoice id (`in_...`).
    InvoiceId
);
provider_id!(
    /// Invoice item id (`ii_...`).
    InvoiceItemId
);
provider_id!(
    /// Payment intent id (`pi_...`).
    PaymentIntentId
);
