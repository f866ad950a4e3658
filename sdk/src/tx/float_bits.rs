/// Reinterpret an `f64` as its IEEE 754 binary64 bit pattern.
///
/// This is a pure reinterpretation, not a numeric conversion: the sign of
/// zero and NaN payloads survive unchanged, and values that differ in any
/// bit map to distinct patterns. Written big-endian, the returned integer is
/// the exact byte layout every signer must agree on.
pub fn float_to_bits(value: f64) -> u64 {
    value.to_bits()
}

/// Inverse of [`float_to_bits`].
pub fn bits_to_float(bits: u64) -> f64 {
    f64::from_bits(bits)
}
