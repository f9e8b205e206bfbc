//! Tests for base64 decoding (decode_base64, decode_base64_into).

use b64_codec::{decode_base64, decode_base64_into, encode_base64, to_base64, Base64Error};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let padded = encode_base64(&blob, true);
        let unpadded = encode_base64(&blob, false);
        assert_eq!(decode_base64(&padded).unwrap(), blob);
        assert_eq!(decode_base64(&unpadded).unwrap(), blob);
    }
}

#[test]
fn with_buffer_matches_allocating() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = to_base64(&blob);
        let mut buf = vec![0u8; encoded.len()];
        let decoded = decode_base64_into(&encoded, &mut buf).unwrap();
        assert_eq!(decoded, decode_base64(&encoded).unwrap().as_slice());
        assert_eq!(decoded.len(), blob.len());
    }
}

#[test]
fn handles_invalid_values() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = to_base64(&blob);
        let invalid = format!("{}!!!!", encoded);
        let result = decode_base64(&invalid);
        assert!(
            matches!(result, Err(Base64Error::InvalidCharacter { .. })),
            "accepted {:?}",
            invalid
        );
    }
}

#[test]
fn malformed_length() {
    for _ in 0..100 {
        let blob = generate_blob();
        let mut encoded = to_base64(&blob);
        encoded.push('A');
        assert_eq!(
            decode_base64(&encoded),
            Err(Base64Error::MalformedLength {
                length: encoded.len()
            })
        );
    }
}

#[test]
fn empty_input() {
    assert_eq!(decode_base64("").unwrap(), b"");
}

#[test]
fn single_byte() {
    assert_eq!(decode_base64("Zg==").unwrap(), [102]);
}

#[test]
fn two_bytes() {
    assert_eq!(decode_base64("Zm8=").unwrap(), [102, 111]);
}

#[test]
fn three_bytes() {
    assert_eq!(decode_base64("Zm9v").unwrap(), [102, 111, 111]);
}

#[test]
fn url_safe_symbols_rejected() {
    assert_eq!(
        decode_base64("-_8="),
        Err(Base64Error::InvalidCharacter {
            byte: b'-',
            position: 0
        })
    );
}

#[test]
fn error_messages() {
    let err = decode_base64("Zm9vY").unwrap_err();
    assert_eq!(err.to_string(), "invalid base64 length 5: length % 4 == 1");
    let err = decode_base64("Zm9v Zm9v").unwrap_err();
    assert_eq!(err.to_string(), "invalid base64 length 9: length % 4 == 1");
    let err = decode_base64("Zm 9").unwrap_err();
    assert_eq!(err.to_string(), "invalid base64 character 0x20 at position 2");
}

#[test]
fn non_canonical_input_reencodes_canonically() {
    let decoded = decode_base64("Zh==").unwrap();
    assert_eq!(decoded, b"f");
    assert_eq!(to_base64(&decoded), "Zg==");
    assert_eq!(to_base64(&decode_base64("Zg==").unwrap()), "Zg==");
}
