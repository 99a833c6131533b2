use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the webhook signature for a raw request body: base64-encoded
/// HMAC-SHA256 keyed with the channel secret.
pub fn sign(secret: &str, body: &[u8]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(body);
    BASE64.encode(mac.finalize().into_bytes())
}

/// Verify a webhook signature header against the raw request body.
///
/// Comparison happens on the MAC bytes in constant time; an undecodable
/// header is simply invalid.
pub fn verify(secret: &str, body: &[u8], signature: &str) -> bool {
    let Ok(claimed) = BASE64.decode(signature) else {
        return false;
    };

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(body);
    mac.verify_slice(&claimed).is_ok()
}
