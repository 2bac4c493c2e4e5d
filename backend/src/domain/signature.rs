//! Checkout callback signatures.
//!
//! The gateway signs `"{order_id}|{payment_id}"` with HMAC-SHA256 keyed by the
//! merchant secret and hands the lowercase hex digest to the browser. The
//! server recomputes it and accepts the callback only on an exact match.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const SIGNATURE_HEX_LEN: usize = 64;

fn keyed_mac(secret: &str, order_id: &str, payment_id: &str) -> HmacSha256 {
    // HMAC accepts keys of any length, so construction cannot fail.
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => unreachable!("HMAC accepts keys of any length"),
    };
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    mac
}

/// Compute the hex signature the gateway would produce.
///
/// # Examples
/// ```
/// use coaching_site::domain::{sign_checkout, verify_checkout};
///
/// let signature = sign_checkout("secret", "order_1", "pay_1");
/// assert_eq!(signature.len(), 64);
/// assert!(verify_checkout("secret", "order_1", "pay_1", &signature));
/// ```
pub fn sign_checkout(secret: &str, order_id: &str, payment_id: &str) -> String {
    hex::encode(keyed_mac(secret, order_id, payment_id).finalize().into_bytes())
}

/// Check a client-supplied hex signature in constant time.
///
/// Only the exact lowercase hex digest matches. Uppercase digits, surrounding
/// whitespace and wrong lengths are rejected before the MAC comparison.
pub fn verify_checkout(secret: &str, order_id: &str, payment_id: &str, signature: &str) -> bool {
    if !is_lowercase_hex(signature) {
        return false;
    }
    let Ok(provided) = hex::decode(signature) else {
        return false;
    };
    keyed_mac(secret, order_id, payment_id)
        .verify_slice(&provided)
        .is_ok()
}

fn is_lowercase_hex(signature: &str) -> bool {
    signature.len() == SIGNATURE_HEX_LEN
        && signature
            .bytes()
            .all(|byte| matches!(byte, b'0'..=b'9' | b'a'..=b'f'))
}
