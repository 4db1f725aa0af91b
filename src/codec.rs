//! Collaborator seam for the structural response serializer
//!
//! The daemon answers every call with raw text. A codec parses that text
//! into a typed shape; [`crate::CallAdapter::deserialize`] wraps the codec
//! and translates its failures into the crate's uniform error. The shipped
//! [`JsonCodec`] covers daemons that answer in JSON; XML deployments plug
//! their own codec into the same seam.

use serde::de::DeserializeOwned;

/// Parses raw response text into a typed value.
pub trait ResponseCodec: Send + Sync {
    /// The codec's own parse-failure type. It never crosses the adapter
    /// boundary; callers only ever see
    /// [`crate::ConnectError::ResponseDeserialization`].
    type Error: std::error::Error + Send + Sync + 'static;

    /// Parse `raw` into a `D`.
    fn decode<D: DeserializeOwned>(&self, raw: &str) -> Result<D, Self::Error>;
}

/// JSON response codec backed by `serde_json`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl ResponseCodec for JsonCodec {
    type Error = serde_json::Error;

    fn decode<D: DeserializeOwned>(&self, raw: &str) -> Result<D, Self::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pair {
        id: u32,
        name: String,
    }

    #[test]
    fn decodes_well_formed_json() {
        let pair: Pair = JsonCodec.decode(r#"{"id": 7, "name": "web-1"}"#).unwrap();
        assert_eq!(
            pair,
            Pair {
                id: 7,
                name: "web-1".to_string()
            }
        );
    }

    #[test]
    fn reports_malformed_json() {
        let result: Result<Pair, _> = JsonCodec.decode(r#"{"id": 7"#);
        assert!(result.is_err());
    }
}
