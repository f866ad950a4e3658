// Deterministic encode-and-sign pipeline for ride request transactions.
// Everything under this module is pure computation; all I/O lives in `api`.

pub mod envelope;
pub mod error;
pub mod float_bits;
pub mod function_call;
pub mod hasher;
pub mod rlp;
pub mod signer;

pub use error::SignTransactionError;
pub use function_call::FunctionCall;

use crate::models::{SignedTransaction, UnsignedTransaction};
use crate::utils::{ensure_hex_prefix, strip_hex_prefix};

/// Encode and sign an unsigned transaction into its transmittable form.
///
/// The pipeline runs strictly downward: the call is typed and encoded, the
/// `[from, nonce, call_bytes]` digest is computed, the digest is signed and
/// the signed envelope is assembled. Any failure aborts the whole pipeline;
/// there is no partial output.
pub fn sign_transaction(
    unsigned_tx: &UnsignedTransaction,
    private_key_hex: &str,
) -> Result<SignedTransaction, SignTransactionError> {
    let call = FunctionCall::from_payload(&unsigned_tx.call)?;
    let call_bytes = call.encode();

    let from = strip_hex_prefix(&unsigned_tx.from);
    let digest = hasher::hash_unsigned_transaction(from, unsigned_tx.nonce, &call_bytes);

    let signing_key = signer::parse_private_key(private_key_hex)?;
    let signature = signer::sign_digest(&signing_key, digest.as_slice())?;

    let raw_transaction = envelope::assemble_signed_envelope(
        from,
        unsigned_tx.nonce,
        &signature,
        &digest,
        &call_bytes,
    );

    Ok(SignedTransaction {
        r: ensure_hex_prefix(&hex::encode(signature.r)),
        s: ensure_hex_prefix(&hex::encode(signature.s)),
        v: u64::from(signature.recovery_id) + envelope::RECOVERY_ID_OFFSET,
        raw_transaction: ensure_hex_prefix(&hex::encode(raw_transaction)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLE_PRIVATE_KEY: &str =
        "d2c446110cfcecbdf05b2be528e72483de5b6f7ef9c7856df2f81f48e9f2748f";
    const SAMPLE_RAW_TRANSACTION: &str = "0xf8dca86465623463666236336462313334363938653138373965613234393034646630373437323663633002a0398b3d8cbd56ca0ae7016947feae3ab5c98207c342ff1b79808cdc571bba65f4a01a46ca6c9e49ba6867463a3cce5d01b07e8f3621887ad64101531844407625a91cb84064313636656465386563653664383564316566353239633835393436333630326465633064333039613830626630346336303836366231323832333734343764aceb01e9d288403b300b626d50c988404c2529f6b47e10d288403b35ac4197d81888404c2b187e7693508203e8";

    fn sample_unsigned_transaction() -> UnsignedTransaction {
        serde_json::from_value(json!({
            "from": "0xdeb4cfb63db134698e1879ea24904df074726cc0",
            "nonce": 2,
            "data": {
                "function_call_type": "RideRequest",
                "arguments": {
                    "pickup_location": {"latitude": 27.18767371338689, "longitude": 56.29034313023669},
                    "dropoff_location": {"latitude": 27.209659671374624, "longitude": 56.336684997461475},
                    "fare": 1000
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_sample_trip_matches_recorded_vector() {
        let signed_tx =
            sign_transaction(&sample_unsigned_transaction(), SAMPLE_PRIVATE_KEY).unwrap();
        assert_eq!(
            signed_tx.r,
            "0x398b3d8cbd56ca0ae7016947feae3ab5c98207c342ff1b79808cdc571bba65f4"
        );
        assert_eq!(
            signed_tx.s,
            "0x1a46ca6c9e49ba6867463a3cce5d01b07e8f3621887ad64101531844407625a9"
        );
        assert_eq!(signed_tx.v, 28);
        assert_eq!(signed_tx.raw_transaction, SAMPLE_RAW_TRANSACTION);
    }

    #[test]
    fn test_signing_twice_yields_identical_output() {
        let first = sign_transaction(&sample_unsigned_transaction(), SAMPLE_PRIVATE_KEY).unwrap();
        let second = sign_transaction(&sample_unsigned_transaction(), SAMPLE_PRIVATE_KEY).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sender_prefix_does_not_change_the_bytes() {
        let mut unsigned_tx = sample_unsigned_transaction();
        unsigned_tx.from = "deb4cfb63db134698e1879ea24904df074726cc0".to_string();
        let unprefixed = sign_transaction(&unsigned_tx, SAMPLE_PRIVATE_KEY).unwrap();
        let prefixed =
            sign_transaction(&sample_unsigned_transaction(), SAMPLE_PRIVATE_KEY).unwrap();
        assert_eq!(unprefixed, prefixed);
    }

    #[test]
    fn test_fare_change_invalidates_digest_and_signature() {
        let original = sign_transaction(&sample_unsigned_transaction(), SAMPLE_PRIVATE_KEY).unwrap();
        let mut unsigned_tx = sample_unsigned_transaction();
        unsigned_tx.call.arguments["fare"] = json!(1001);
        let tampered = sign_transaction(&unsigned_tx, SAMPLE_PRIVATE_KEY).unwrap();
        assert_ne!(tampered.raw_transaction, original.raw_transaction);
        assert_ne!(tampered.r, original.r);
    }

    #[test]
    fn test_unknown_call_type_fails_before_signing() {
        let mut unsigned_tx = sample_unsigned_transaction();
        unsigned_tx.call.call_type = "TripCancel".to_string();
        let err = sign_transaction(&unsigned_tx, SAMPLE_PRIVATE_KEY).unwrap_err();
        assert!(matches!(err, SignTransactionError::UnsupportedCallType(_)));
    }

    #[test]
    fn test_invalid_private_key_is_rejected() {
        let err = sign_transaction(&sample_unsigned_transaction(), "zz").unwrap_err();
        assert!(matches!(err, SignTransactionError::InvalidKeyOrDigest(_)));
    }
}
