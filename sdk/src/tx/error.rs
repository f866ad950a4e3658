use std::fmt;

/// Terminal failures of the encode-and-sign pipeline. A transaction is
/// either fully and correctly encoded or not produced at all; none of these
/// leave partial state behind.
#[derive(Debug)]
pub enum SignTransactionError {
    /// The function call tag does not match any known variant.
    UnsupportedCallType(String),
    /// Required call arguments are missing or of the wrong kind.
    MalformedArguments(String),
    /// The private key or the digest is outside its expected domain.
    InvalidKeyOrDigest(String),
}

impl fmt::Display for SignTransactionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignTransactionError::UnsupportedCallType(call_type) => {
                write!(f, "Unsupported function call type: {call_type}")
            }
            SignTransactionError::MalformedArguments(msg) => {
                write!(f, "Invalid function call arguments: {msg}")
            }
            SignTransactionError::InvalidKeyOrDigest(msg) => {
                write!(f, "Invalid signing key or digest: {msg}")
            }
        }
    }
}

impl std::error::Error for SignTransactionError {}
