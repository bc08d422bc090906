use thiserror::Error;

/// Errors that can occur at the protocol boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// Inbound message could not be decoded
    #[error("Failed to decode inbound message: {detail}. This may indicate a malformed or incompatible peer")]
    MalformedMessage {
        detail: String,
    },

    /// Outbound message could not be encoded
    #[error("Failed to encode outbound message: {detail}")]
    EncodeFailed {
        detail: String,
    },
}
