use serde::Deserialize;
use serde::Serialize;

/// The claim set carried by every issued token.
///
/// Fixed on purpose: the service issues exactly one shape of token,
/// so there is nothing optional here. Timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the user identifier the token vouches for
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Check whether the claims are expired at the given instant.
    ///
    /// A token is valid through its `exp` second and expired strictly
    /// after it.
    pub fn is_expired(&self, now_timestamp: i64) -> bool {
        now_timestamp > self.exp
    }
}
