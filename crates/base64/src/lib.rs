//! Base64 encoding and decoding utilities.
//!
//! This crate implements the standard alphabet (`A-Z`, `a-z`, `0-9`, `+`, `/`)
//! with `=` padding:
//! - Encoding with or without trailing padding
//! - Decoding with optional padding and strict alphabet checks
//! - Decoding into caller-owned buffers without allocating
//!
//! Decoding any byte sequence's encoding gives the bytes back, with or without
//! padding. The reverse holds only for canonical input: the unused low bits of
//! a final partial group are ignored, so `Zh==` decodes to `f` and re-encodes
//! as `Zg==`.
//!
//! ```
//! use b64_codec::{decode_base64, to_base64};
//!
//! assert_eq!(to_base64(&decode_base64("Zg==").unwrap()), "Zg==");
//! assert_eq!(to_base64(&decode_base64("Zh==").unwrap()), "Zg==");
//! ```
//!
//! The lookup tables are compile-time constants, so every function is safe to
//! call from any number of threads.
//!
//! # Example
//!
//! ```
//! use b64_codec::{decode_base64, encode_base64};
//!
//! let data = b"hello world";
//! let encoded = encode_base64(data, true);
//! let decoded = decode_base64(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod constants;
mod error;
mod from_base64;
mod from_base64_bin;
mod len;
mod to_base64;
mod to_base64_bin;

pub use constants::{
    ALPHABET, ALPHABET_BYTES, DECODE_TABLE, ENCODE_TABLE, INVALID, PAD, PAD_BYTE,
};
pub use error::Base64Error;
pub use from_base64::{decode_base64, decode_base64_into};
pub use from_base64_bin::{decode_base64_bin, decode_base64_bin_into};
pub use len::{decoded_len, encoded_len};
pub use to_base64::{encode_base64, to_base64};
pub use to_base64_bin::encode_base64_into;
