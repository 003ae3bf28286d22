//! Signed Bearer Tokens
//!
//! Compact HS256 JWTs (`header.payload.signature`, base64url without
//! padding). The payload is `iat`/`exp` plus caller-defined claims,
//! flattened into the same JSON object.
//!
//! Tokens are stateless: verification checks the algorithm, the
//! HMAC-SHA256 signature and expiry, nothing else.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use hmac::{Hmac, Mac};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::crypto::{from_base64url, to_base64url};

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "HS256";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Token is malformed")]
    Malformed,

    #[error("Unsupported token algorithm")]
    UnsupportedAlgorithm,

    #[error("Token signature mismatch")]
    BadSignature,

    #[error("Token has expired")]
    Expired,

    #[error("Token encoding failed: {0}")]
    Encoding(String),
}

#[derive(Serialize, Deserialize)]
struct Header<'a> {
    alg: &'a str,
    typ: &'a str,
}

#[derive(Serialize, Deserialize)]
struct Claims<T> {
    iat: i64,
    exp: i64,
    #[serde(flatten)]
    body: T,
}

/// HS256 signer and verifier bound to one secret key
#[derive(Clone)]
pub struct TokenSigner {
    key: Zeroizing<Vec<u8>>,
}

impl TokenSigner {
    pub fn new(key: &[u8]) -> Self {
        Self {
            key: Zeroizing::new(key.to_vec()),
        }
    }

    /// Sign `body` with an expiry `ttl` from now
    pub fn sign<T: Serialize>(&self, body: &T, ttl: Duration) -> Result<String, TokenError> {
        self.sign_at(body, ttl, Utc::now())
    }

    /// Verify a token and return its caller-defined claims
    pub fn verify<T: DeserializeOwned>(&self, token: &str) -> Result<T, TokenError> {
        self.verify_at(token, Utc::now())
    }

    fn sign_at<T: Serialize>(
        &self,
        body: &T,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let header = serde_json::to_vec(&Header {
            alg: ALGORITHM,
            typ: "JWT",
        })
        .map_err(|e| TokenError::Encoding(e.to_string()))?;

        let ttl = TimeDelta::from_std(ttl).map_err(|e| TokenError::Encoding(e.to_string()))?;
        let claims = Claims {
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            body,
        };
        let payload =
            serde_json::to_vec(&claims).map_err(|e| TokenError::Encoding(e.to_string()))?;

        let signing_input = format!("{}.{}", to_base64url(&header), to_base64url(&payload));

        let mut mac = self.mac()?;
        mac.update(signing_input.as_bytes());
        let signature = mac.finalize().into_bytes();

        Ok(format!("{}.{}", signing_input, to_base64url(&signature)))
    }

    fn verify_at<T: DeserializeOwned>(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<T, TokenError> {
        let mut segments = token.split('.');
        let (Some(header), Some(payload), Some(signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(TokenError::Malformed);
        };

        let header_bytes = from_base64url(header).map_err(|_| TokenError::Malformed)?;
        let parsed: Header<'_> =
            serde_json::from_slice(&header_bytes).map_err(|_| TokenError::Malformed)?;
        if parsed.alg != ALGORITHM {
            return Err(TokenError::UnsupportedAlgorithm);
        }

        let signature = from_base64url(signature).map_err(|_| TokenError::Malformed)?;
        let mut mac = self.mac()?;
        mac.update(header.as_bytes());
        mac.update(b".");
        mac.update(payload.as_bytes());
        // verify_slice compares in constant time
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::BadSignature)?;

        let payload_bytes = from_base64url(payload).map_err(|_| TokenError::Malformed)?;
        let claims: Claims<T> =
            serde_json::from_slice(&payload_bytes).map_err(|_| TokenError::Malformed)?;

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims.body)
    }

    fn mac(&self) -> Result<HmacSha256, TokenError> {
        HmacSha256::new_from_slice(&self.key).map_err(|e| TokenError::Encoding(e.to_string()))
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Identity {
        user_id: i64,
        email: String,
    }

    fn identity() -> Identity {
        Identity {
            user_id: 7,
            email: "kid@example.com".to_string(),
        }
    }

    #[test]
    fn test_sign_then_verify() {
        let signer = TokenSigner::new(b"0123456789abcdef0123456789abcdef");
        let token = signer.sign(&identity(), Duration::from_secs(24 * 3600)).unwrap();

        assert_eq!(token.split('.').count(), 3);
        let back: Identity = signer.verify(&token).unwrap();
        assert_eq!(back, identity());
    }

    #[test]
    fn test_payload_carries_flat_claims() {
        let signer = TokenSigner::new(b"key");
        let now = Utc::now();
        let token = signer
            .sign_at(&identity(), Duration::from_secs(24 * 3600), now)
            .unwrap();

        let payload = token.split('.').nth(1).unwrap();
        let json: serde_json::Value =
            serde_json::from_slice(&from_base64url(payload).unwrap()).unwrap();
        assert_eq!(json["user_id"], 7);
        assert_eq!(json["email"], "kid@example.com");
        assert_eq!(
            json["exp"].as_i64().unwrap() - json["iat"].as_i64().unwrap(),
            24 * 3600
        );
    }

    #[test]
    fn test_wrong_key_is_rejected() {
        let token = TokenSigner::new(b"key-one")
            .sign(&identity(), Duration::from_secs(3600))
            .unwrap();
        let result = TokenSigner::new(b"key-two").verify::<Identity>(&token);
        assert_eq!(result.unwrap_err(), TokenError::BadSignature);
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let signer = TokenSigner::new(b"key");
        let token = signer.sign(&identity(), Duration::from_secs(3600)).unwrap();
        let parts: Vec<&str> = token.split('.').collect();

        let forged = to_base64url(br#"{"iat":0,"exp":99999999999,"user_id":1,"email":"x@y.z"}"#);
        let tampered = format!("{}.{}.{}", parts[0], forged, parts[2]);
        assert_eq!(
            signer.verify::<Identity>(&tampered).unwrap_err(),
            TokenError::BadSignature
        );
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let signer = TokenSigner::new(b"key");
        let issued = Utc::now() - TimeDelta::hours(25);
        let token = signer
            .sign_at(&identity(), Duration::from_secs(24 * 3600), issued)
            .unwrap();
        assert_eq!(
            signer.verify::<Identity>(&token).unwrap_err(),
            TokenError::Expired
        );
    }

    #[test]
    fn test_other_algorithm_is_rejected() {
        let signer = TokenSigner::new(b"key");
        let token = signer.sign(&identity(), Duration::from_secs(3600)).unwrap();
        let parts: Vec<&str> = token.split('.').collect();
        let none_header = to_base64url(br#"{"alg":"none","typ":"JWT"}"#);
        let forged = format!("{}.{}.{}", none_header, parts[1], parts[2]);
        assert_eq!(
            signer.verify::<Identity>(&forged).unwrap_err(),
            TokenError::UnsupportedAlgorithm
        );
    }

    #[test]
    fn test_garbage_is_malformed() {
        let signer = TokenSigner::new(b"key");
        for token in ["", "abc", "a.b", "a.b.c.d", "!!.??.**"] {
            assert_eq!(
                signer.verify::<Identity>(token).unwrap_err(),
                TokenError::Malformed
            );
        }
    }
}
