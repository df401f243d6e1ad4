//! Cryptographic Utilities

use rand::{RngCore, rngs::OsRng};

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Encode bytes as lowercase hex string
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Generate an opaque credential of exactly `len` lowercase-hex characters
///
/// Each character is drawn from CSPRNG output; the default refresh-token
/// length of 64 carries 32 bytes of entropy, which is the only collision
/// defense the token store relies on.
pub fn opaque_token(len: usize) -> String {
    let mut hex = to_hex(&random_bytes(len.div_ceil(2)));
    hex.truncate(len);
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes_length() {
        assert_eq!(random_bytes(0).len(), 0);
        assert_eq!(random_bytes(32).len(), 32);
        assert_eq!(random_bytes(64).len(), 64);
    }

    #[test]
    fn test_random_bytes_not_all_zeros() {
        let bytes = random_bytes(32);
        assert!(
            bytes.iter().any(|&b| b != 0),
            "Random bytes should not be all zeros"
        );
    }

    #[test]
    fn test_to_hex_known_value() {
        assert_eq!(to_hex(&[0xab, 0xcd, 0xef]), "abcdef");
        assert_eq!(to_hex(&[0x00, 0x01]), "0001");
    }

    #[test]
    fn test_to_hex_roundtrip() {
        let bytes = random_bytes(16);
        let encoded = to_hex(&bytes);
        assert_eq!(hex::decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn test_opaque_token_exact_length() {
        assert_eq!(opaque_token(64).len(), 64);
        assert_eq!(opaque_token(32).len(), 32);
        // Odd lengths still come out exact
        assert_eq!(opaque_token(7).len(), 7);
    }

    #[test]
    fn test_opaque_token_alphabet() {
        let token = opaque_token(64);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_opaque_token_uniqueness() {
        // Statistical, not absolute: 32 bytes of entropy never collide in practice
        let a = opaque_token(64);
        let b = opaque_token(64);
        assert_ne!(a, b);
    }
}
