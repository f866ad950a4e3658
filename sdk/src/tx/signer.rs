use super::error::SignTransactionError;
use k256::ecdsa::SigningKey;

/// An ECDSA signature over secp256k1 plus the recovery id identifying which
/// of the candidate public keys produced it. `r` and `s` are fixed-width
/// 32-byte big-endian values, left-padded with zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoverableSignature {
    pub r: [u8; 32],
    pub s: [u8; 32],
    pub recovery_id: u8,
}

/// Parse a hex private key, with or without the `0x` prefix, into a signing
/// key. Values outside the valid scalar range of the curve are rejected.
pub fn parse_private_key(private_key_hex: &str) -> Result<SigningKey, SignTransactionError> {
    let key_bytes = hex::decode(private_key_hex.trim_start_matches("0x")).map_err(|e| {
        SignTransactionError::InvalidKeyOrDigest(format!("private key is not valid hex: {e}"))
    })?;
    SigningKey::from_slice(&key_bytes).map_err(|e| {
        SignTransactionError::InvalidKeyOrDigest(format!(
            "private key is not a valid secp256k1 scalar: {e}"
        ))
    })
}

/// Sign a 32-byte digest, producing `(r, s, recovery_id)`.
///
/// Nonce generation is deterministic per RFC 6979, so the same digest and
/// key always produce the same signature. `s` is normalized to the low half
/// of the curve order, with the recovery id flipped to match whenever the
/// normalization negates `s`.
pub fn sign_digest(
    signing_key: &SigningKey,
    digest: &[u8],
) -> Result<RecoverableSignature, SignTransactionError> {
    let digest: [u8; 32] = digest.try_into().map_err(|_| {
        SignTransactionError::InvalidKeyOrDigest(format!(
            "digest must be exactly 32 bytes, got {}",
            digest.len()
        ))
    })?;

    let (signature, recovery_id) = signing_key
        .sign_prehash_recoverable(&digest)
        .map_err(|e| SignTransactionError::InvalidKeyOrDigest(format!("signing failed: {e}")))?;

    Ok(RecoverableSignature {
        r: signature.r().to_bytes().into(),
        s: signature.s().to_bytes().into(),
        recovery_id: recovery_id.to_byte(),
    })
}
