// Canonical value tree for the ride request wire format.
//
// `alloy_rlp` supplies the header machinery and enforces the canonical-form
// rules on decode (single-byte threshold, minimal big-endian lengths), so a
// given value has exactly one byte representation and byte equality of two
// encodings is equality of the values themselves.

use alloy_rlp::{BufMut, Decodable, Encodable, Header, length_of_length};

/// A value in the wire format: an opaque byte string or an ordered list of
/// nested values. Unsigned integers travel as their minimal big-endian byte
/// strings, see [`Item::uint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Bytes(Vec<u8>),
    List(Vec<Item>),
}

impl Item {
    /// Byte-string item holding the minimal big-endian form of `value`.
    /// Zero becomes the empty string, the canonical integer zero.
    pub fn uint(value: u64) -> Self {
        let bytes = value.to_be_bytes();
        let skip = bytes.iter().take_while(|&&byte| byte == 0).count();
        Self::Bytes(bytes[skip..].to_vec())
    }

    fn payload_length(&self) -> usize {
        match self {
            Self::Bytes(bytes) => bytes.len(),
            Self::List(items) => items.iter().map(Encodable::length).sum(),
        }
    }
}

impl Encodable for Item {
    fn encode(&self, out: &mut dyn BufMut) {
        match self {
            Self::Bytes(bytes) => bytes.as_slice().encode(out),
            Self::List(items) => {
                Header {
                    list: true,
                    payload_length: self.payload_length(),
                }
                .encode(out);
                for item in items {
                    item.encode(out);
                }
            }
        }
    }

    fn length(&self) -> usize {
        match self {
            Self::Bytes(bytes) => bytes.as_slice().length(),
            Self::List(_) => {
                let payload_length = self.payload_length();
                payload_length + length_of_length(payload_length)
            }
        }
    }
}

impl Decodable for Item {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let header = Header::decode(buf)?;
        let (mut payload, rest) = buf.split_at(header.payload_length);
        *buf = rest;
        if header.list {
            let mut items = Vec::new();
            while !payload.is_empty() {
                items.push(Self::decode(&mut payload)?);
            }
            Ok(Self::List(items))
        } else {
            Ok(Self::Bytes(payload.to_vec()))
        }
    }
}

/// Encode `item` into its canonical byte representation.
pub fn encode(item: &Item) -> Vec<u8> {
    let mut out = Vec::with_capacity(item.length());
    item.encode(&mut out);
    out
}

/// Decode a single item, rejecting non-canonical forms and trailing bytes.
pub fn decode(bytes: &[u8]) -> alloy_rlp::Result<Item> {
    let mut buf = bytes;
    let item = Item::decode(&mut buf)?;
    if !buf.is_empty() {
        return Err(alloy_rlp::Error::UnexpectedLength);
    }
    Ok(item)
}
