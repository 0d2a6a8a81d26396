//! Session token wire format

/// Cookie carrying the session token
pub const SESSION_COOKIE_NAME: &str = "analytics_session";

/// Session lifetime: 7 days in milliseconds
pub const SESSION_EXPIRY_MS: u64 = 7 * 24 * 60 * 60 * 1000;

/// A parsed (not yet verified) session token
///
/// Wire format is three colon-separated fields, in this order:
/// issue timestamp in decimal epoch millis, a UUID nonce, and the
/// base64url-encoded HMAC-SHA256 signature over the first two fields.
#[derive(Debug)]
pub(super) struct SessionToken<'a> {
    pub(super) issued_at_ms: u64,
    pub(super) nonce: &'a str,
    pub(super) signature: &'a str,
}

impl<'a> SessionToken<'a> {
    /// Split a token into its fields. Returns `None` unless there are
    /// exactly three parts and the timestamp is a valid integer.
    pub(super) fn parse(token: &'a str) -> Option<Self> {
        let parts: Vec<&str> = token.split(':').collect();
        if parts.len() != 3 {
            return None;
        }

        let issued_at_ms = parts[0].parse::<u64>().ok()?;
        Some(Self {
            issued_at_ms,
            nonce: parts[1],
            signature: parts[2],
        })
    }

    /// The signed portion of the token
    pub(super) fn payload(&self) -> String {
        format!("{}:{}", self.issued_at_ms, self.nonce)
    }
}
