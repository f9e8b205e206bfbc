//! Output size calculations.

use crate::constants::PAD_BYTE;
use crate::Base64Error;

/// Returns the exact length of the encoding of `byte_len` bytes.
///
/// # Example
///
/// ```
/// use b64_codec::encoded_len;
///
/// assert_eq!(encoded_len(1, true), 4);
/// assert_eq!(encoded_len(1, false), 2);
/// assert_eq!(encoded_len(6, false), 8);
/// ```
pub fn encoded_len(byte_len: usize, add_padding: bool) -> usize {
    let full = (byte_len / 3) * 4;
    match byte_len % 3 {
        0 => full,
        _ if add_padding => full + 4,
        1 => full + 2,
        _ => full + 3,
    }
}

/// Returns the number of bytes `encoded` decodes to.
///
/// Trailing padding is discounted. Characters are not validated, so the
/// count is only meaningful for input the decoder would accept. The result
/// never exceeds `encoded.len()`.
///
/// # Errors
///
/// Returns [`Base64Error::MalformedLength`] if the length leaves a
/// remainder of 1 when divided by 4.
///
/// # Example
///
/// ```
/// use b64_codec::decoded_len;
///
/// assert_eq!(decoded_len("Zm9v").unwrap(), 3);
/// assert_eq!(decoded_len("Zm8=").unwrap(), 2);
/// assert_eq!(decoded_len("Zm8").unwrap(), 2);
/// assert!(decoded_len("Zm9vY").is_err());
/// ```
pub fn decoded_len(encoded: impl AsRef<[u8]>) -> Result<usize, Base64Error> {
    let encoded = encoded.as_ref();
    let length = encoded.len();
    if length % 4 == 1 {
        return Err(Base64Error::MalformedLength { length });
    }
    let symbols = length - trailing_padding(encoded);
    Ok((symbols / 4) * 3 + (symbols % 4) * 3 / 4)
}

/// Counts the padding bytes (0 to 2) at the end of `encoded`.
pub(crate) fn trailing_padding(encoded: &[u8]) -> usize {
    match encoded {
        [.., PAD_BYTE, PAD_BYTE] => 2,
        [.., PAD_BYTE] => 1,
        _ => 0,
    }
}
