//! Query-parameter codec for navigation between pages.
//!
//! Edit and prefill flows pass previously-entered field values to the target
//! page as URL query parameters. The contract is lossless round-tripping:
//! whatever key/value pairs go in must come back out unchanged, for any
//! UTF-8 content, in order.

use crate::error::{OpsError, Result};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Keep the usual URL-safe marks readable; everything else escapes.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encodes ordered key/value pairs as a query string (no leading `?`).
pub fn encode_params(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k, COMPONENT),
                utf8_percent_encode(v, COMPONENT)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Decodes a query string back into ordered key/value pairs.
pub fn decode_params(query: &str) -> Result<Vec<(String, String)>> {
    if query.is_empty() {
        return Ok(Vec::new());
    }
    query
        .split('&')
        .map(|pair| {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| OpsError::Api(format!("Malformed query parameter: {}", pair)))?;
            Ok((decode_component(key)?, decode_component(value)?))
        })
        .collect()
}

fn decode_component(raw: &str) -> Result<String> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|cow| cow.into_owned())
        .map_err(|e| OpsError::Api(format!("Invalid percent-encoding: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(input: &[(&str, &str)]) -> Vec<(String, String)> {
        input
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_round_trip_plain() {
        let params = pairs(&[("id", "LD-1003"), ("company", "Tech Solutions Inc")]);
        let encoded = encode_params(&params);
        assert_eq!(decode_params(&encoded).unwrap(), params);
    }

    #[test]
    fn test_round_trip_reserved_characters() {
        let params = pairs(&[
            ("note", "a&b=c?d#e"),
            ("email", "rahul+crm@abccorp.com"),
            ("amount", "₹48,000"),
        ]);
        let encoded = encode_params(&params);
        assert_eq!(decode_params(&encoded).unwrap(), params);
    }

    #[test]
    fn test_order_preserved() {
        let params = pairs(&[("b", "2"), ("a", "1"), ("c", "3")]);
        let decoded = decode_params(&encode_params(&params)).unwrap();
        assert_eq!(decoded, params);
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode_params(&[]), "");
        assert!(decode_params("").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_pair_rejected() {
        assert!(decode_params("novalue").is_err());
    }
}
