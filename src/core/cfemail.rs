// src/core/cfemail.rs
//! Decoder for Cloudflare-style obfuscated contact strings.
//!
//! The token is a run of hex digit pairs. The first pair is an XOR key; every
//! following pair is one character of the plaintext XORed with that key.
//! Characters are Latin-1 (one byte, code points 0..=255).
//!
//! ```text
//! 7A 31 33  ->  key=0x7A, 0x31^0x7A='K', 0x33^0x7A='I'  ->  "KI"
//! ```
//!
//! A token carrying only the key byte decodes to the empty string.

use thiserror::Error;

/// Page markup puts the token in this attribute.
pub const ATTR: &str = "data-cfemail";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("malformed token {token:?}: {reason}")]
    MalformedToken { token: String, reason: String },
}

impl DecodeError {
    fn malformed(token: &str, reason: impl Into<String>) -> Self {
        DecodeError::MalformedToken { token: s!(token), reason: reason.into() }
    }

    pub fn token(&self) -> &str {
        match self { DecodeError::MalformedToken { token, .. } => token }
    }
}

/// Recover the plaintext hidden in `token`.
pub fn decode(token: &str) -> Result<String, DecodeError> {
    let hexs = token.trim();
    if hexs.len() < 2 {
        return Err(DecodeError::malformed(token, "token too short"));
    }

    let bytes = hex::decode(hexs).map_err(|e| DecodeError::malformed(token, e.to_string()))?;
    let (key, body) = match bytes.split_first() {
        Some((k, rest)) => (*k, rest),
        None => return Err(DecodeError::malformed(token, "token too short")),
    };

    Ok(body.iter().map(|b| char::from(b ^ key)).collect())
}

/// Obfuscate `plain` with `key`, producing an upper-case token.
/// `None` if any character falls outside Latin-1.
pub fn encode(key: u8, plain: &str) -> Option<String> {
    let mut bytes = Vec::with_capacity(plain.len() + 1);
    bytes.push(key);
    for ch in plain.chars() {
        let b = u8::try_from(u32::from(ch)).ok()?;
        bytes.push(b ^ key);
    }
    Some(hex::encode_upper(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_pair() {
        let expected: String = [0x31u8 ^ 0x7A, 0x33 ^ 0x7A].iter().map(|&b| b as char).collect();
        assert_eq!(decode("7A3133").unwrap(), expected);
        assert_eq!(decode("7a3133").unwrap(), "KI");
    }

    #[test]
    fn key_only_is_empty() {
        assert_eq!(decode("7A").unwrap(), "");
    }

    #[test]
    fn short_tokens_fail() {
        for t in ["", "6", " ", "\t6 "] {
            let err = decode(t).unwrap_err();
            assert_eq!(err.token(), t);
            assert!(err.to_string().contains("too short"), "{err}");
        }
    }

    #[test]
    fn bad_hex_fails_with_reason() {
        let err = decode("7AZZ").unwrap_err();
        assert_eq!(err.token(), "7AZZ");
        assert!(matches!(err, DecodeError::MalformedToken { .. }));

        // odd trailing pair
        assert!(decode("7A313").is_err());
        assert!(decode("7A3").is_err());
    }

    #[test]
    fn control_bytes_pass_through() {
        // 0x41 ^ 0x41 = NUL, 0x3E ^ 0x41 = DEL
        assert_eq!(decode("41413E").unwrap(), "\u{0}\u{7F}");
    }

    #[test]
    fn encode_rejects_wide_chars() {
        assert_eq!(encode(1, "é"), Some(s!("01E8")));
        assert_eq!(encode(1, "€"), None);
    }
}
