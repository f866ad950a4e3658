use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Geographical point of a pickup or dropoff.
///
/// The service emits both the long `latitude`/`longitude` field names and the
/// short `lat`/`lng` ones; both are accepted and normalized to the long form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng")]
    pub longitude: f64,
}

/// Arguments of a ride request call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideRequestArgs {
    #[serde(alias = "pickup_location")]
    pub pickup: Coordinates,
    #[serde(alias = "dropoff_location")]
    pub dropoff: Coordinates,
    pub fare: u64,
}

/// A tagged function call as received from the service. The arguments stay
/// untyped JSON until the call type is dispatched on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallPayload {
    #[serde(rename = "type", alias = "function_call_type")]
    pub call_type: String,
    /// Variant arguments. Some service responses inline the argument fields
    /// next to the tag instead of nesting them here; those land in
    /// `inline_arguments` and [`Self::arguments_value`] merges the two forms.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub arguments: Value,
    #[serde(flatten)]
    pub inline_arguments: Map<String, Value>,
}

impl CallPayload {
    pub fn new(call_type: &str, arguments: Value) -> Self {
        Self {
            call_type: call_type.to_string(),
            arguments,
            inline_arguments: Map::new(),
        }
    }

    /// The effective arguments object, whichever form the payload used.
    pub fn arguments_value(&self) -> Value {
        if self.arguments.is_null() {
            Value::Object(self.inline_arguments.clone())
        } else {
            self.arguments.clone()
        }
    }
}

/// Transaction fetched from the service, ready to be encoded and signed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnsignedTransaction {
    pub from: String,
    pub nonce: u64,
    #[serde(alias = "data")]
    pub call: CallPayload,
}

/// Signature fields and the final transmittable envelope, all hex with a
/// `0x` display prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedTransaction {
    pub r: String,
    pub s: String,
    pub v: u64,
    pub raw_transaction: String,
}

/// Lifecycle states the service reports for a submitted transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Confirmed,
    Failed,
    Cancelled,
}
