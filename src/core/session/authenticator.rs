//! Credential verification and session issuance

use super::token::{SessionToken, SESSION_EXPIRY_MS};
use crate::config::AdminSecret;
use crate::utils::crypto;
use crate::utils::current_timestamp_millis;
use crate::utils::error::Result;
use uuid::Uuid;

/// Signing key substituted when no admin secret is configured.
///
/// Issuance never fails, so a logged-out dashboard still renders; the
/// trade-off is logged loudly at config load.
const FALLBACK_SECRET: &str = "fallback-secret";

/// Issues and verifies stateless admin sessions
///
/// Holds only the immutable shared secret; safe for unsynchronized
/// concurrent use.
#[derive(Debug, Clone)]
pub struct SessionAuthenticator {
    secret: AdminSecret,
}

impl SessionAuthenticator {
    pub fn new(secret: AdminSecret) -> Self {
        Self { secret }
    }

    /// Compare a caller-supplied credential against the shared secret.
    ///
    /// Fails closed: an unconfigured secret, an empty candidate, or a byte
    /// length mismatch all return `false`. The byte-wise comparison is
    /// constant-time.
    pub fn verify_credential(&self, candidate: &str) -> bool {
        let secret = match self.secret.as_configured() {
            Some(s) => s,
            None => return false,
        };
        if candidate.is_empty() {
            return false;
        }

        crypto::constant_time_eq(secret.as_bytes(), candidate.as_bytes())
    }

    /// Issue a fresh session token signed with the shared secret
    pub fn issue_session(&self) -> Result<String> {
        self.issue_session_at(current_timestamp_millis())
    }

    pub(crate) fn issue_session_at(&self, issued_at_ms: u64) -> Result<String> {
        let nonce = Uuid::new_v4();
        let payload = format!("{}:{}", issued_at_ms, nonce);
        let signature = crypto::hmac_sign_base64url(self.signing_key(), &payload)?;

        Ok(format!("{}:{}", payload, signature))
    }

    /// Verify a session token.
    ///
    /// Fails closed: malformed tokens, expired timestamps, undecodable or
    /// mismatched signatures all return `false`; nothing panics or errors.
    pub fn verify_session(&self, token: &str) -> bool {
        self.verify_session_at(token, current_timestamp_millis())
    }

    pub(crate) fn verify_session_at(&self, token: &str, now_ms: u64) -> bool {
        if token.is_empty() {
            return false;
        }

        let parsed = match SessionToken::parse(token) {
            Some(t) => t,
            None => return false,
        };

        if now_ms.saturating_sub(parsed.issued_at_ms) > SESSION_EXPIRY_MS {
            return false;
        }

        let expected = match crypto::hmac_sign(self.signing_key(), &parsed.payload()) {
            Ok(mac) => mac,
            Err(_) => return false,
        };
        let supplied = match crypto::decode_base64url(parsed.signature) {
            Some(bytes) => bytes,
            None => return false,
        };

        // Length checked first, then a non-short-circuiting byte comparison
        crypto::constant_time_eq(&expected, &supplied)
    }

    /// Revoke a session token.
    ///
    /// Deliberate no-op: sessions are stateless and there is no store to
    /// mutate. Logout clears the client cookie; true revocation would need
    /// a nonce denylist, which is out of scope.
    pub fn revoke_session(&self, _token: &str) {}

    fn signing_key(&self) -> &str {
        self.secret.as_configured().unwrap_or(FALLBACK_SECRET)
    }
}
