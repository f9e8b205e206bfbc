//! Binary base64 encoding function.

use crate::to_base64::encode_symbols;
use crate::{encoded_len, Base64Error};

/// Encodes bytes into a destination byte slice using standard base64.
///
/// # Arguments
///
/// * `bytes` - The source bytes to encode.
/// * `add_padding` - Whether to pad the output with `=` to a multiple of 4.
/// * `dest` - The destination byte slice.
///
/// # Returns
///
/// The number of bytes written to the front of `dest`.
///
/// # Errors
///
/// Returns [`Base64Error::BufferTooSmall`] if `dest` is shorter than
/// [`encoded_len`]; `dest` is left untouched.
///
/// # Example
///
/// ```
/// use b64_codec::encode_base64_into;
///
/// let mut dest = [0u8; 16];
/// let len = encode_base64_into(b"hello", true, &mut dest).unwrap();
/// assert_eq!(&dest[..len], b"aGVsbG8=");
/// ```
pub fn encode_base64_into(
    bytes: &[u8],
    add_padding: bool,
    dest: &mut [u8],
) -> Result<usize, Base64Error> {
    let required = encoded_len(bytes.len(), add_padding);
    if dest.len() < required {
        return Err(Base64Error::BufferTooSmall {
            required,
            available: dest.len(),
        });
    }

    let mut offset = 0;
    encode_symbols(bytes, add_padding, |symbol| {
        dest[offset] = symbol;
        offset += 1;
    });
    Ok(offset)
}
