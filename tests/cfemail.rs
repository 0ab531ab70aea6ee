// tests/cfemail.rs
//
// Token decoding through the crate root re-exports.
//
use dir_scrape::core::cfemail::encode;
use dir_scrape::{decode, DecodeError};
use proptest::prelude::*;

#[test]
fn decodes_address_from_page_markup() {
    let token = "5C3F343533313D723926391C2C2E35313971392F283D28392F72323B";
    assert_eq!(decode(token).unwrap(), "chioma.eze@prime-estates.ng");
    assert_eq!(decode(&token.to_lowercase()).unwrap(), "chioma.eze@prime-estates.ng");
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(decode("  7A3133\n").unwrap(), "KI");
}

#[test]
fn error_keeps_offending_token() {
    let err = decode("7AG1").unwrap_err();
    assert_eq!(err.token(), "7AG1");
    let DecodeError::MalformedToken { reason, .. } = err;
    assert!(!reason.is_empty());
}

proptest! {
    #[test]
    fn encoded_text_decodes_back(key in any::<u8>(), plain in "[\\x00-\\xFF]{0,40}") {
        let token = encode(key, &plain).unwrap();
        prop_assert_eq!(decode(&token).unwrap(), plain);
    }

    #[test]
    fn output_has_one_char_per_pair_after_key(bytes in proptest::collection::vec(any::<u8>(), 1..64)) {
        let token = hex::encode(&bytes);
        let out = decode(&token).unwrap();
        prop_assert_eq!(out.chars().count(), bytes.len() - 1);
        prop_assert!(out.chars().all(|c| u32::from(c) <= 0xFF));
    }

    #[test]
    fn odd_length_never_decodes(bytes in proptest::collection::vec(any::<u8>(), 1..32)) {
        let mut token = hex::encode(&bytes);
        token.push('0');
        prop_assert!(decode(&token).is_err());
    }
}
