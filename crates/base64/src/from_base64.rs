//! Standard base64 decoding functions.

use crate::{decode_base64_bin, decode_base64_bin_into, Base64Error};

/// Decodes a standard base64 string.
///
/// Trailing padding is optional. Positions reported in
/// [`Base64Error::InvalidCharacter`] are byte offsets into `encoded`.
///
/// # Example
///
/// ```
/// use b64_codec::decode_base64;
///
/// assert_eq!(decode_base64("Zm9v").unwrap(), b"foo");
/// assert_eq!(decode_base64("Zm8").unwrap(), b"fo");
/// assert!(decode_base64("Zm9vY").is_err());
/// ```
pub fn decode_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    decode_base64_bin(encoded.as_bytes())
}

/// Decodes a standard base64 string into a caller-owned buffer and returns
/// the written prefix.
///
/// A buffer at least `encoded.len()` bytes long always suffices. On error
/// nothing has been written to `buf`.
///
/// # Example
///
/// ```
/// use b64_codec::decode_base64_into;
///
/// let mut buf = vec![0u8; 64];
/// let decoded = decode_base64_into("aGVsbG8gd29ybGQ=", &mut buf).unwrap();
/// assert_eq!(decoded, b"hello world");
/// ```
pub fn decode_base64_into<'a>(
    encoded: &str,
    buf: &'a mut [u8],
) -> Result<&'a [u8], Base64Error> {
    decode_base64_bin_into(encoded.as_bytes(), buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_world() {
        assert_eq!(decode_base64("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
        assert_eq!(decode_base64("aGVsbG8gd29ybGQ").unwrap(), b"hello world");
    }

    #[test]
    fn test_non_ascii_position_is_byte_offset() {
        assert_eq!(
            decode_base64("Zmé9"),
            Err(Base64Error::MalformedLength { length: 5 })
        );
        assert_eq!(
            decode_base64("Zmé"),
            Err(Base64Error::InvalidCharacter {
                byte: 0xc3,
                position: 2
            })
        );
    }

    #[test]
    fn test_into_untouched_on_error() {
        let mut buf = [0u8; 12];
        assert!(decode_base64_into("Zm9vYmFy!A==", &mut buf).is_err());
        assert_eq!(buf, [0; 12]);
    }

    #[test]
    fn test_into_matches_allocating() {
        let mut buf = [0u8; 16];
        for encoded in ["", "Zg==", "Zm8", "Zm9vYmFy", "Zm9vYmE="] {
            let owned = decode_base64(encoded).unwrap();
            let borrowed = decode_base64_into(encoded, &mut buf).unwrap();
            assert_eq!(borrowed, owned.as_slice());
        }
    }
}
