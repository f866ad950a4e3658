use super::error::SignTransactionError;
use super::float_bits::float_to_bits;
use super::rlp::{self, Item};
use crate::models::{CallPayload, Coordinates, RideRequestArgs};

/// Wire tag of the `RideRequest` call variant. Tags are part of the signed
/// byte format and must never be renumbered.
pub const RIDE_REQUEST_TAG: u64 = 1;

/// A typed, tagged function call. Adding a variant means adding a tag
/// constant, an enum case and its argument encoding; existing tags and
/// encodings stay untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionCall {
    RideRequest(RideRequestArgs),
}

impl FunctionCall {
    /// Dispatch an untyped boundary payload into a typed call.
    ///
    /// Unknown call types and missing or mistyped arguments are rejected
    /// here, before any encoding work happens.
    pub fn from_payload(payload: &CallPayload) -> Result<Self, SignTransactionError> {
        match payload.call_type.as_str() {
            "RideRequest" => {
                let args: RideRequestArgs = serde_json::from_value(payload.arguments_value())
                    .map_err(|e| SignTransactionError::MalformedArguments(e.to_string()))?;
                Ok(FunctionCall::RideRequest(args))
            }
            other => Err(SignTransactionError::UnsupportedCallType(other.to_string())),
        }
    }

    pub fn tag(&self) -> u64 {
        match self {
            FunctionCall::RideRequest(_) => RIDE_REQUEST_TAG,
        }
    }

    /// The call as a `[tag, arguments]` value tree.
    pub fn to_item(&self) -> Item {
        let arguments = match self {
            FunctionCall::RideRequest(args) => Item::List(vec![
                coordinates_item(&args.pickup),
                coordinates_item(&args.dropoff),
                Item::uint(args.fare),
            ]),
        };
        Item::List(vec![Item::uint(self.tag()), arguments])
    }

    /// Canonical `call_bytes` of this call.
    pub fn encode(&self) -> Vec<u8> {
        rlp::encode(&self.to_item())
    }
}

/// Coordinates travel as a two-element list of binary64 bit patterns, each
/// embedded as an unsigned integer.
fn coordinates_item(coordinates: &Coordinates) -> Item {
    Item::List(vec![
        Item::uint(float_to_bits(coordinates.latitude)),
        Item::uint(float_to_bits(coordinates.longitude)),
    ])
}
