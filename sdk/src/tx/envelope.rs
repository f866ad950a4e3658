use super::rlp::{self, Item};
use super::signer::RecoverableSignature;
use alloy::primitives::B256;

/// Offset added to the raw recovery id when it leaves the signer for the
/// envelope, a convention the verifying side shares.
pub const RECOVERY_ID_OFFSET: u64 = 27;

/// Encode the final transmittable list
/// `[from, nonce, r, s, v, digest_hex, call_bytes]`.
///
/// `call_bytes` is already encoded and enters the list as one opaque byte
/// string; re-encoding it as a nested structure would change the bytes that
/// were hashed. The digest is embedded as its unprefixed hex text, and `r`
/// and `s` keep their full 32 bytes including leading zeros.
pub fn assemble_signed_envelope(
    from: &str,
    nonce: u64,
    signature: &RecoverableSignature,
    digest: &B256,
    call_bytes: &[u8],
) -> Vec<u8> {
    rlp::encode(&Item::List(vec![
        Item::Bytes(from.as_bytes().to_vec()),
        Item::uint(nonce),
        Item::Bytes(signature.r.to_vec()),
        Item::Bytes(signature.s.to_vec()),
        Item::uint(u64::from(signature.recovery_id) + RECOVERY_ID_OFFSET),
        Item::Bytes(hex::encode(digest).into_bytes()),
        Item::Bytes(call_bytes.to_vec()),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FROM: &str = "deb4cfb63db134698e1879ea24904df074726cc0";
    const DIGEST_HEX: &str = "d166ede8ece6d85d1ef529c859463602dec0d309a80bf04c60866b128237447d";
    const CALL_BYTES_HEX: &str =
        "eb01e9d288403b300b626d50c988404c2529f6b47e10d288403b35ac4197d81888404c2b187e7693508203e8";
    const RAW_TRANSACTION_HEX: &str = "f8dca86465623463666236336462313334363938653138373965613234393034646630373437323663633002a0398b3d8cbd56ca0ae7016947feae3ab5c98207c342ff1b79808cdc571bba65f4a01a46ca6c9e49ba6867463a3cce5d01b07e8f3621887ad64101531844407625a91cb84064313636656465386563653664383564316566353239633835393436333630326465633064333039613830626630346336303836366231323832333734343764aceb01e9d288403b300b626d50c988404c2529f6b47e10d288403b35ac4197d81888404c2b187e7693508203e8";

    fn sample_signature() -> RecoverableSignature {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(
            &hex::decode("398b3d8cbd56ca0ae7016947feae3ab5c98207c342ff1b79808cdc571bba65f4")
                .unwrap(),
        );
        s.copy_from_slice(
            &hex::decode("1a46ca6c9e49ba6867463a3cce5d01b07e8f3621887ad64101531844407625a9")
                .unwrap(),
        );
        RecoverableSignature {
            r,
            s,
            recovery_id: 1,
        }
    }

    #[test]
    fn test_sample_trip_envelope() {
        let call_bytes = hex::decode(CALL_BYTES_HEX).unwrap();
        let digest = B256::from_slice(&hex::decode(DIGEST_HEX).unwrap());
        let envelope =
            assemble_signed_envelope(FROM, 2, &sample_signature(), &digest, &call_bytes);
        assert_eq!(hex::encode(envelope), RAW_TRANSACTION_HEX);
    }

    #[test]
    fn test_envelope_fields_decode_in_order() {
        let call_bytes = hex::decode(CALL_BYTES_HEX).unwrap();
        let digest = B256::from_slice(&hex::decode(DIGEST_HEX).unwrap());
        let signature = sample_signature();
        let envelope = assemble_signed_envelope(FROM, 2, &signature, &digest, &call_bytes);

        let fields = match rlp::decode(&envelope).unwrap() {
            Item::List(fields) => fields,
            Item::Bytes(_) => panic!("envelope must decode as a list"),
        };
        assert_eq!(fields.len(), 7);
        assert_eq!(fields[0], Item::Bytes(FROM.as_bytes().to_vec()));
        assert_eq!(fields[1], Item::uint(2));
        assert_eq!(fields[2], Item::Bytes(signature.r.to_vec()));
        assert_eq!(fields[3], Item::Bytes(signature.s.to_vec()));
        assert_eq!(fields[4], Item::Bytes(vec![28]));
        assert_eq!(fields[5], Item::Bytes(DIGEST_HEX.as_bytes().to_vec()));
        // The already encoded call bytes come back exactly as they went in.
        assert_eq!(fields[6], Item::Bytes(call_bytes));
    }

    #[test]
    fn test_r_and_s_stay_fixed_width() {
        // Leading zeros in r and s must survive. The fields are fixed
        // 32-byte strings, not minimal integers.
        let signature = RecoverableSignature {
            r: [0u8; 32],
            s: [0u8; 32],
            recovery_id: 0,
        };
        let envelope = assemble_signed_envelope("ab", 0, &signature, &B256::ZERO, &[0xc0]);

        let fields = match rlp::decode(&envelope).unwrap() {
            Item::List(fields) => fields,
            Item::Bytes(_) => panic!("envelope must decode as a list"),
        };
        assert_eq!(fields[2], Item::Bytes(vec![0u8; 32]));
        assert_eq!(fields[3], Item::Bytes(vec![0u8; 32]));
        assert_eq!(fields[4], Item::Bytes(vec![27]));
    }
}
