//! Fetch response wire payload.
//!
//! Wire format (response body, JSON):
//! ```text
//! {"names": ["/app/doc/1", ...], "timestamp": 1700000000}
//! ```
//! `timestamp` is whole seconds. The current protocol only ever puts one
//! name per response; the list is forward-compatible room for batching.

use serde::{Deserialize, Serialize};

use crate::core::{Name, PayloadError};

/// Decoded body of a fetch response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    /// Announced names, in URI form on the wire.
    pub names: Vec<String>,
    /// Announcement time in whole seconds since the epoch.
    pub timestamp: i64,
}

impl ResponseBody {
    /// Build a single-name body from an announcement.
    pub fn single(name: &Name, timestamp_ms: i64) -> Self {
        Self {
            names: vec![name.to_string()],
            timestamp: timestamp_ms / 1000,
        }
    }

    /// Serialize to the JSON wire form.
    pub fn encode(&self) -> Vec<u8> {
        // Serialization of a string list and an integer cannot fail.
        serde_json::to_vec(self).expect("response body serializes")
    }

    /// Deserialize from the JSON wire form.
    pub fn decode(data: &[u8]) -> Result<Self, PayloadError> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Parse the carried names into [`Name`]s, rejecting malformed entries.
    pub fn parsed_names(&self) -> Result<Vec<Name>, PayloadError> {
        self.names
            .iter()
            .map(|uri| Name::parse(uri).map_err(PayloadError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let body = ResponseBody::single(
            &Name::parse("/app/doc/1").unwrap(),
            1_700_000_000_500,
        );
        let decoded = ResponseBody::decode(&body.encode()).unwrap();
        assert_eq!(decoded, body);
        assert_eq!(decoded.timestamp, 1_700_000_000);
    }

    #[test]
    fn test_wire_shape() {
        let body = ResponseBody {
            names: vec!["/a/b".to_string()],
            timestamp: 42,
        };
        let json: serde_json::Value = serde_json::from_slice(&body.encode()).unwrap();
        assert_eq!(json["names"][0], "/a/b");
        assert_eq!(json["timestamp"], 42);
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            ResponseBody::decode(b"not json"),
            Err(PayloadError::InvalidBody(_))
        ));
    }

    #[test]
    fn test_decode_wrong_shape() {
        assert!(matches!(
            ResponseBody::decode(br#"{"names": 3, "timestamp": "x"}"#),
            Err(PayloadError::InvalidBody(_))
        ));
    }

    #[test]
    fn test_parsed_names_rejects_bad_uri() {
        let body = ResponseBody {
            names: vec!["/ok".to_string(), "/bad//name".to_string()],
            timestamp: 1,
        };
        assert!(matches!(
            body.parsed_names(),
            Err(PayloadError::BadName(_))
        ));
    }

    #[test]
    fn test_parsed_names_multiple() {
        let body = ResponseBody {
            names: vec!["/a/1".to_string(), "/a/2".to_string()],
            timestamp: 1,
        };
        let names = body.parsed_names().unwrap();
        assert_eq!(names.len(), 2);
        assert_eq!(names[1].to_string(), "/a/2");
    }
}
