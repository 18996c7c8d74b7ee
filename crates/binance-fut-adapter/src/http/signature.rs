/*
[INPUT]:  Request parameters and the account API secret
[OUTPUT]: Signed parameter sets (timestamp + HMAC-SHA256 hex signature)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or parameter encoding
*/

use std::fmt;

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs request parameters for authenticated endpoints
#[derive(Clone)]
pub struct RequestSigner {
    api_secret: String,
}

impl RequestSigner {
    /// Create a new signer from the account API secret
    pub fn new(api_secret: impl Into<String>) -> Self {
        Self {
            api_secret: api_secret.into(),
        }
    }

    /// Sign parameters with the current wall-clock timestamp
    pub fn sign(&self, params: &[(String, String)]) -> SignedParams {
        self.sign_at(params, Utc::now().timestamp_millis())
    }

    /// Sign parameters with an explicit timestamp in epoch milliseconds.
    ///
    /// Appends `timestamp`, computes the HMAC-SHA256 hex digest over the
    /// URL-encoded form of all pairs in insertion order, then appends
    /// `signature` as the final pair. The input is left untouched.
    pub fn sign_at(&self, params: &[(String, String)], timestamp_ms: i64) -> SignedParams {
        let mut pairs = params.to_vec();
        pairs.push(("timestamp".to_string(), timestamp_ms.to_string()));

        let payload = encode_pairs(&pairs);
        let mut mac = HmacSha256::new_from_slice(self.api_secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());

        pairs.push(("signature".to_string(), signature));
        SignedParams { pairs }
    }
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("api_secret", &"***REDACTED***")
            .finish()
    }
}

/// Ordered parameter set produced by signing, consumed once per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedParams {
    pairs: Vec<(String, String)>,
}

impl SignedParams {
    /// URL-encoded wire form: exactly the signed bytes plus the trailing
    /// signature pair
    pub fn encode(&self) -> String {
        encode_pairs(&self.pairs)
    }

    /// Parameter pairs in wire order
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Value of a named parameter, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// The one query-string encoder shared by signing and transport.
///
/// Signed bytes and sent bytes must come from the same encoding or the
/// exchange rejects the signature.
pub(crate) fn encode_pairs(pairs: &[(String, String)]) -> String {
    serde_urlencoded::to_string(pairs).expect("string pairs always URL-encode")
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCS_SECRET: &str = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";
    const DOCS_TIMESTAMP: i64 = 1_499_827_319_559;

    fn docs_params() -> Vec<(String, String)> {
        [
            ("symbol", "LTCBTC"),
            ("side", "BUY"),
            ("type", "LIMIT"),
            ("timeInForce", "GTC"),
            ("quantity", "1"),
            ("price", "0.1"),
            ("recvWindow", "5000"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_sign_at_matches_published_reference_vector() {
        let signer = RequestSigner::new(DOCS_SECRET);
        let signed = signer.sign_at(&docs_params(), DOCS_TIMESTAMP);

        assert_eq!(
            signed.get("signature"),
            Some("c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71")
        );
    }

    #[test]
    fn test_sign_at_is_deterministic() {
        let signer = RequestSigner::new(DOCS_SECRET);
        let first = signer.sign_at(&docs_params(), DOCS_TIMESTAMP);
        let second = signer.sign_at(&docs_params(), DOCS_TIMESTAMP);
        assert_eq!(first, second);
    }

    #[test]
    fn test_signature_changes_with_any_input() {
        let signer = RequestSigner::new(DOCS_SECRET);
        let baseline = signer.sign_at(&docs_params(), DOCS_TIMESTAMP);

        let mut tweaked = docs_params();
        tweaked[0].1 = "BTCUSDT".to_string();
        assert_ne!(
            signer.sign_at(&tweaked, DOCS_TIMESTAMP).get("signature"),
            baseline.get("signature")
        );

        assert_ne!(
            signer.sign_at(&docs_params(), DOCS_TIMESTAMP + 1).get("signature"),
            baseline.get("signature")
        );

        let other_signer = RequestSigner::new("another-secret");
        assert_ne!(
            other_signer.sign_at(&docs_params(), DOCS_TIMESTAMP).get("signature"),
            baseline.get("signature")
        );
    }

    #[test]
    fn test_timestamp_precedes_signature_and_order_is_kept() {
        let signer = RequestSigner::new(DOCS_SECRET);
        let params = docs_params();
        let signed = signer.sign_at(&params, DOCS_TIMESTAMP);

        let keys: Vec<&str> = signed.pairs().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys[..params.len()], ["symbol", "side", "type", "timeInForce", "quantity", "price", "recvWindow"]);
        assert_eq!(keys[keys.len() - 2], "timestamp");
        assert_eq!(keys[keys.len() - 1], "signature");
    }

    #[test]
    fn test_encode_is_signed_payload_plus_signature() {
        let signer = RequestSigner::new("secret");
        let params = vec![("a".to_string(), "1".to_string())];
        let signed = signer.sign_at(&params, 42);
        assert!(signed.encode().starts_with("a=1&timestamp=42&signature="));
    }

    #[test]
    fn test_sign_does_not_mutate_input() {
        let signer = RequestSigner::new("secret");
        let params = docs_params();
        let before = params.clone();
        let _ = signer.sign_at(&params, DOCS_TIMESTAMP);
        assert_eq!(params, before);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let signer = RequestSigner::new("super-secret-value");
        let debug = format!("{signer:?}");
        assert!(!debug.contains("super-secret-value"));
        assert!(debug.contains("REDACTED"));
    }
}
