use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Codec for signed, time-bounded bearer tokens.
///
/// Issues and verifies compact JWTs signed with HS256. Tokens are
/// stateless: nothing about an issued token is recorded anywhere, and
/// validity is decided solely by signature and timestamps at
/// verification time. There is no revocation.
///
/// The signing secret is injected once at construction and held
/// immutably; the codec itself is read-only after that, so it can be
/// shared across worker tasks without locking.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validity: Duration,
}

impl TokenCodec {
    /// Create a codec with the given signing secret and validity window.
    ///
    /// # Arguments
    /// * `secret` - Signing secret (at least 32 bytes for HS256;
    ///   supplied by configuration, never a source literal)
    /// * `validity` - How long issued tokens stay valid
    pub fn new(secret: &[u8], validity: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            validity,
        }
    }

    /// Issue a token for a subject.
    ///
    /// The claim set is `{sub: subject, iat: now, exp: now + validity}`.
    ///
    /// # Arguments
    /// * `subject` - User identifier the token vouches for
    /// * `now` - Issuance instant
    ///
    /// # Errors
    /// * `CreationFailed` - Signing or serialization failed
    pub fn issue(&self, subject: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + self.validity).timestamp(),
        };

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::CreationFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// Expiry is checked against the caller-supplied `now`, not the
    /// wall clock, so the library's own exp validation is disabled.
    ///
    /// # Arguments
    /// * `token` - Serialized token string
    /// * `now` - Verification instant
    ///
    /// # Errors
    /// * `Malformed` - The string does not parse into a claim set
    /// * `SignatureInvalid` - The signature does not match the secret
    /// * `Expired` - `now` is past the token's expiration
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                    _ => TokenError::Malformed,
                }
            })?;

        let claims = token_data.claims;
        if claims.is_expired(now.timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// The configured validity window.
    pub fn validity(&self) -> Duration {
        self.validity
    }
}
