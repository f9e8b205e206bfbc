//! Standard base64 encoding function.

use crate::constants::{ENCODE_TABLE, PAD_BYTE};
use crate::encoded_len;

/// Feeds the encoding of `bytes` to `emit`, one ASCII symbol at a time.
///
/// Each 3-byte chunk is packed big-endian into 24 bits and split into four
/// 6-bit groups, most significant first. A trailing chunk of 1 or 2 bytes is
/// zero-extended and yields 2 or 3 symbols, followed by padding when
/// `add_padding` is set.
pub(crate) fn encode_symbols(bytes: &[u8], add_padding: bool, mut emit: impl FnMut(u8)) {
    let mut chunks = bytes.chunks_exact(3);
    for chunk in &mut chunks {
        let uint24 = (chunk[0] as u32) << 16 | (chunk[1] as u32) << 8 | chunk[2] as u32;
        emit(ENCODE_TABLE[(uint24 >> 18) as usize & 63]);
        emit(ENCODE_TABLE[(uint24 >> 12) as usize & 63]);
        emit(ENCODE_TABLE[(uint24 >> 6) as usize & 63]);
        emit(ENCODE_TABLE[uint24 as usize & 63]);
    }

    match *chunks.remainder() {
        [o1, o2] => {
            let uint24 = (o1 as u32) << 16 | (o2 as u32) << 8;
            emit(ENCODE_TABLE[(uint24 >> 18) as usize & 63]);
            emit(ENCODE_TABLE[(uint24 >> 12) as usize & 63]);
            emit(ENCODE_TABLE[(uint24 >> 6) as usize & 63]);
            if add_padding {
                emit(PAD_BYTE);
            }
        }
        [o1] => {
            let uint24 = (o1 as u32) << 16;
            emit(ENCODE_TABLE[(uint24 >> 18) as usize & 63]);
            emit(ENCODE_TABLE[(uint24 >> 12) as usize & 63]);
            if add_padding {
                emit(PAD_BYTE);
                emit(PAD_BYTE);
            }
        }
        _ => {}
    }
}

/// Encodes a byte slice to a standard base64 string.
///
/// # Arguments
///
/// * `bytes` - The bytes to encode.
/// * `add_padding` - Whether to pad the output with `=` to a multiple of 4.
///
/// # Returns
///
/// The encoded string. Without padding, a trailing 1-byte chunk yields 2
/// symbols and a 2-byte chunk yields 3.
///
/// # Example
///
/// ```
/// use b64_codec::encode_base64;
///
/// assert_eq!(encode_base64(b"fo", true), "Zm8=");
/// assert_eq!(encode_base64(b"fo", false), "Zm8");
/// ```
pub fn encode_base64(bytes: &[u8], add_padding: bool) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(encoded_len(bytes.len(), add_padding));
    encode_symbols(bytes, add_padding, |symbol| out.push(symbol as char));
    out
}

/// Encodes a byte slice to a padded standard base64 string.
///
/// # Example
///
/// ```
/// use b64_codec::to_base64;
///
/// let encoded = to_base64(b"hello world");
/// assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(bytes: &[u8]) -> String {
    encode_base64(bytes, true)
}
