use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed classification response")]
    MalformedResponse(#[from] serde_json::Error),
}

/// The insect-identification service's response.
///
/// The service adds fields without notice, so every level tolerates unknown
/// keys, and every sub-object falls back to its default when absent. Only a
/// payload that is not a JSON object at all fails to decode.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClassificationResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub result: IdentificationResult,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IdentificationResult {
    #[serde(default)]
    pub classification: Classification,
    #[serde(default)]
    pub is_insect: IsInsect,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Classification {
    /// Candidate taxa in the service's ranking order, preserved as received.
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Suggestion {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub probability: f64,
}

/// Whether the submitted image depicts an insect at all, with confidence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct IsInsect {
    #[serde(default)]
    pub binary: bool,
    #[serde(default)]
    pub probability: f64,
}

impl ClassificationResponse {
    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        let response = serde_json::from_slice(payload)?;

        Ok(response)
    }
}
