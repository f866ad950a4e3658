use super::rlp::{self, Item};
use alloy::primitives::{B256, keccak256};

/// Keccak-256 digest of the encoded `[from, nonce, call_bytes]` list. This
/// digest is the exact message that gets signed.
///
/// `from` must already be stripped of its display prefix; its hex characters
/// enter the encoding as plain ASCII bytes, not as decoded address bytes.
/// `call_bytes` is embedded as one opaque byte string.
pub fn hash_unsigned_transaction(from: &str, nonce: u64, call_bytes: &[u8]) -> B256 {
    keccak256(signing_preimage(from, nonce, call_bytes))
}

fn signing_preimage(from: &str, nonce: u64, call_bytes: &[u8]) -> Vec<u8> {
    rlp::encode(&Item::List(vec![
        Item::Bytes(from.as_bytes().to_vec()),
        Item::uint(nonce),
        Item::Bytes(call_bytes.to_vec()),
    ]))
}
