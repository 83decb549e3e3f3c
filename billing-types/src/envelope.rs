//! The `{status, data | error}` result shape returned to callers.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::{
    Customer, CustomerId, DeletedCustomer, Invoice, PaymentIntent, Subscription,
};
use crate::error::FacadeError;

/// Payload types an envelope can carry, with the key they serialize under.
pub trait EnvelopePayload: Serialize {
    const KEY: &'static str = "data";
}

impl EnvelopePayload for Customer {}
impl EnvelopePayload for DeletedCustomer {}
impl EnvelopePayload for Subscription {}
impl EnvelopePayload for PaymentIntent {}
impl EnvelopePayload for Invoice {}

impl EnvelopePayload for CustomerId {
    const KEY: &'static str = "customerId";
}

impl EnvelopePayload for Vec<Invoice> {
    const KEY: &'static str = "invoices";
}

/// Outcome of one facade operation.
///
/// Serializes as `{"status": true, "<key>": payload}` or
/// `{"status": false, "error": message}`.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Success(T),
    Failure(String),
}

impl<T> Envelope<T> {
    pub fn status(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Envelope::Success(data) => Some(data),
            Envelope::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Envelope::Success(_) => None,
            Envelope::Failure(msg) => Some(msg),
        }
    }
}

impl<T> From<Result<T, FacadeError>> for Envelope<T> {
    fn from(result: Result<T, FacadeError>) -> Self {
        match result {
            Ok(data) => Envelope::Success(data),
            Err(e) => Envelope::Failure(e.to_string()),
        }
    }
}

impl<T: EnvelopePayload> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            Envelope::Success(data) => {
                map.serialize_entry("status", &true)?;
                map.serialize_entry(T::KEY, data)?;
            }
            Envelope::Failure(error) => {
                map.serialize_entry("status", &false)?;
                map.serialize_entry("error", error)?;
            }
        }
        map.end()
    }
}
