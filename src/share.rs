//! Shareable encoding of calculator inputs.
//!
//! A complete set of [`CalculatorInputs`] can be encoded as a compact
//! URL-safe string and later decoded back, so a scenario can be shared as
//! a link or query parameter. The encoding is JSON wrapped in unpadded
//! URL-safe base64.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::models::CalculatorInputs;

/// Encodes calculator inputs as a URL-safe string.
///
/// # Examples
///
/// ```
/// use rewards_engine::models::CalculatorInputs;
/// use rewards_engine::share::{decode_state, encode_state};
///
/// let inputs = CalculatorInputs::default();
/// let encoded = encode_state(&inputs);
/// assert_eq!(decode_state(&encoded), Some(inputs));
/// ```
pub fn encode_state(inputs: &CalculatorInputs) -> String {
    // CalculatorInputs serialization is infallible: no maps with non-string
    // keys, no non-finite floats.
    let json = serde_json::to_vec(inputs).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Decodes a previously encoded string back into calculator inputs.
///
/// Returns `None` for anything that is not valid base64-wrapped JSON for
/// the current input shape. Callers are expected to fall back to default
/// inputs rather than surface an error for a stale or corrupted link.
pub fn decode_state(encoded: &str) -> Option<CalculatorInputs> {
    let bytes = URL_SAFE_NO_PAD.decode(encoded).ok()?;
    serde_json::from_slice(&bytes).ok()
}
