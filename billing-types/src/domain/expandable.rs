//! Fields the provider returns either as an id or as the expanded object.

use serde::{Deserialize, Serialize};

/// Provider objects that carry their own id.
pub trait ProviderObject {
    fn object_id(&self) -> &str;
}

/// Either a bare id or the full object, depending on the `expand[]` params
/// of the request that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    Id(String),
    Object(Box<T>),
}

impl<T: ProviderObject> Expandable<T> {
    /// Returns the referenced id regardless of expansion.
    pub fn id(&self) -> &str {
        match self {
            Expandable::Id(id) => id,
            Expandable::Object(obj) => obj.object_id(),
        }
    }

    /// Returns the expanded object, if the field was expanded.
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Expandable::Id(_) => None,
            Expandable::Object(obj) => Some(obj),
        }
    }
}

impl<T> From<&str> for Expandable<T> {
    fn from(id: &str) -> Self {
        Expandable::Id(id.to_string())
    }
}
