//! Cryptographic utilities for the gateway
//!
//! HMAC-SHA256 signing for session tokens and constant-time comparison
//! for secret material.

use crate::utils::error::{GatewayError, Result};
use base64::{engine::general_purpose, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute a raw HMAC-SHA256 signature over `data`
pub fn hmac_sign(secret: &str, data: &str) -> Result<Vec<u8>> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(secret.as_bytes())
        .map_err(|e| GatewayError::Crypto(format!("Invalid HMAC key: {}", e)))?;

    mac.update(data.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Compute an HMAC-SHA256 signature encoded as unpadded base64url
pub fn hmac_sign_base64url(secret: &str, data: &str) -> Result<String> {
    let raw = hmac_sign(secret, data)?;
    Ok(general_purpose::URL_SAFE_NO_PAD.encode(raw))
}

/// Decode an unpadded base64url string
pub fn decode_base64url(input: &str) -> Option<Vec<u8>> {
    general_purpose::URL_SAFE_NO_PAD.decode(input).ok()
}

/// Constant-time byte comparison
///
/// Lengths are compared first; the byte-wise pass never short-circuits,
/// so the execution time does not depend on where the inputs differ.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (a_byte, b_byte) in a.iter().zip(b.iter()) {
        result |= a_byte ^ b_byte;
    }

    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_sha256_rfc4231_vectors() {
        // Test Case 2 from RFC 4231
        let key = "Jefe";
        let data = "what do ya want for nothing?";
        let expected =
            hex_decode("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843");

        let signature = hmac_sign(key, data).unwrap();
        assert_eq!(signature, expected, "RFC 4231 Test Case 2 failed");
    }

    #[test]
    fn test_base64url_signature_roundtrip() {
        let signature = hmac_sign_base64url("secret", "1700000000000:nonce").unwrap();
        // Unpadded base64url alphabet only
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));

        let decoded = decode_base64url(&signature).unwrap();
        assert_eq!(decoded.len(), 32); // SHA-256 output
        assert_eq!(decoded, hmac_sign("secret", "1700000000000:nonce").unwrap());
    }

    #[test]
    fn test_decode_base64url_rejects_garbage() {
        assert!(decode_base64url("not base64url!!").is_none());
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"hello", b"hello"));
        assert!(!constant_time_eq(b"hello", b"world"));
        assert!(!constant_time_eq(b"hello", b"hello2"));
        assert!(constant_time_eq(b"", b""));
    }

    fn hex_decode(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }
}
