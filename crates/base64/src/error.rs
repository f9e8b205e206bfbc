use thiserror::Error;

/// Error type for base64 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Base64Error {
    /// The encoded length leaves a remainder of 1 when divided by 4.
    /// No encoder output has that shape.
    #[error("invalid base64 length {length}: length % 4 == 1")]
    MalformedLength { length: usize },

    /// A byte outside the alphabet, or a padding byte in a position
    /// where padding is not allowed.
    #[error("invalid base64 character 0x{byte:02x} at position {position}")]
    InvalidCharacter { byte: u8, position: usize },

    /// The caller-supplied output buffer cannot hold the result.
    #[error("output buffer too small: {required} bytes required, {available} available")]
    BufferTooSmall { required: usize, available: usize },
}
