//! Binary base64 decoding functions.
//!
//! Input is ASCII held as bytes. Missing trailing padding is implied, so
//! `Zg`, `Zg=` and `Zg==` all decode to `f`. Every byte is checked against
//! the alphabet; padding is accepted only at the end of the final group.

use tracing::trace;

use crate::constants::{DECODE_TABLE, INVALID, PAD_BYTE};
use crate::len::trailing_padding;
use crate::{decoded_len, Base64Error};

/// Looks up the 6-bit value of the symbol at `position`.
#[inline]
fn sextet(encoded: &[u8], position: usize) -> Result<u32, Base64Error> {
    let byte = encoded[position];
    match DECODE_TABLE[byte as usize] {
        INVALID => Err(Base64Error::InvalidCharacter { byte, position }),
        value => Ok(value as u32),
    }
}

fn decode_symbols(encoded: &[u8], buf: &mut [u8]) -> Result<usize, Base64Error> {
    if encoded.is_empty() {
        return Ok(0);
    }

    let required = decoded_len(encoded)?;
    if buf.len() < required {
        return Err(Base64Error::BufferTooSmall {
            required,
            available: buf.len(),
        });
    }

    // Symbols before the trailing padding; the padded length rounds up to 4.
    let symbols = encoded.len() - trailing_padding(encoded);
    let padded_length = encoded.len().div_ceil(4) * 4;
    if padded_length - symbols > 2 {
        return Err(Base64Error::InvalidCharacter {
            byte: PAD_BYTE,
            position: symbols,
        });
    }

    if let Some(position) = (0..symbols).find(|&i| DECODE_TABLE[encoded[i] as usize] == INVALID) {
        return Err(Base64Error::InvalidCharacter {
            byte: encoded[position],
            position,
        });
    }

    let mut write_offset = 0;
    let mut read_offset = 0;
    while read_offset + 4 <= symbols {
        let uint24 = sextet(encoded, read_offset)? << 18
            | sextet(encoded, read_offset + 1)? << 12
            | sextet(encoded, read_offset + 2)? << 6
            | sextet(encoded, read_offset + 3)?;

        buf[write_offset] = (uint24 >> 16) as u8;
        buf[write_offset + 1] = (uint24 >> 8) as u8;
        buf[write_offset + 2] = uint24 as u8;
        write_offset += 3;
        read_offset += 4;
    }

    match symbols - read_offset {
        3 => {
            let uint24 = sextet(encoded, read_offset)? << 18
                | sextet(encoded, read_offset + 1)? << 12
                | sextet(encoded, read_offset + 2)? << 6;
            buf[write_offset] = (uint24 >> 16) as u8;
            buf[write_offset + 1] = (uint24 >> 8) as u8;
            write_offset += 2;
        }
        2 => {
            let uint24 =
                sextet(encoded, read_offset)? << 18 | sextet(encoded, read_offset + 1)? << 12;
            buf[write_offset] = (uint24 >> 16) as u8;
            write_offset += 1;
        }
        _ => {}
    }

    Ok(write_offset)
}

/// Decodes base64 bytes into a caller-owned buffer.
///
/// # Arguments
///
/// * `encoded` - The base64-encoded bytes, with or without trailing padding.
/// * `buf` - The output buffer. A buffer at least `encoded.len()` bytes long
///   always suffices; [`decoded_len`] gives the exact requirement.
///
/// # Returns
///
/// The prefix of `buf` holding the decoded bytes.
///
/// # Errors
///
/// * [`Base64Error::MalformedLength`] if `encoded.len() % 4 == 1`.
/// * [`Base64Error::BufferTooSmall`] if `buf` cannot hold the output.
/// * [`Base64Error::InvalidCharacter`] for a byte outside the alphabet or
///   misplaced padding.
///
/// On error nothing has been written to `buf`.
///
/// # Example
///
/// ```
/// use b64_codec::decode_base64_bin_into;
///
/// let encoded = b"aGVsbG8=";
/// let mut buf = [0u8; 8];
/// let decoded = decode_base64_bin_into(encoded, &mut buf).unwrap();
/// assert_eq!(decoded, b"hello");
/// ```
pub fn decode_base64_bin_into<'a>(
    encoded: &[u8],
    buf: &'a mut [u8],
) -> Result<&'a [u8], Base64Error> {
    let written = decode_symbols(encoded, buf).inspect_err(|err| {
        trace!(target: "b64_codec", %err, length = encoded.len(), "rejected base64 input");
    })?;
    Ok(&buf[..written])
}

/// Decodes base64 bytes into a newly allocated vector.
///
/// # Errors
///
/// Same as [`decode_base64_bin_into`], minus [`Base64Error::BufferTooSmall`].
///
/// # Example
///
/// ```
/// use b64_codec::decode_base64_bin;
///
/// let decoded = decode_base64_bin(b"aGVsbG8=").unwrap();
/// assert_eq!(decoded, b"hello");
/// ```
pub fn decode_base64_bin(encoded: &[u8]) -> Result<Vec<u8>, Base64Error> {
    let length = decoded_len(encoded).inspect_err(|err| {
        trace!(target: "b64_codec", %err, length = encoded.len(), "rejected base64 input");
    })?;
    let mut buf = vec![0u8; length];
    let written = decode_base64_bin_into(encoded, &mut buf)?.len();
    buf.truncate(written);
    Ok(buf)
}
