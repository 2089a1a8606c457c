use anyhow::Context as _;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;

use crate::config::ClassifierConfig;
use crate::response::{ClassificationResponse, DecodeError};

#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The request never produced a response body.
    #[error("classification request failed")]
    Request(#[from] reqwest::Error),

    /// The service answered with something the decoder cannot read.
    #[error(transparent)]
    Malformed(#[from] DecodeError),
}

#[derive(Debug, Serialize)]
struct IdentificationRequest {
    images: Vec<String>,
}

/// Submits images to the external insect-identification service.
///
/// No retry policy here; if the service flakes, the caller decides.
#[derive(Clone)]
pub struct ClassifierClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl ClassifierClient {
    pub fn new(config: ClassifierConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("Failed to build the HTTP client")?;

        Ok(Self {
            http,
            url: config.classifier_url,
            api_key: config.classifier_api_key,
        })
    }

    #[tracing::instrument(skip(self, images))]
    pub async fn identify(&self, images: &[Bytes]) -> Result<ClassificationResponse, ClassifyError> {
        tracing::info!("Submitting {} image(s) for identification…", images.len());

        let request = IdentificationRequest {
            images: encode_images(images),
        };

        let response = self
            .http
            .post(&self.url)
            .header("Api-Key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let payload = response.bytes().await?;
        let response = ClassificationResponse::decode(&payload)?;

        tracing::info!(
            "Identified! Got {} suggestion(s).",
            response.result.classification.suggestions.len()
        );
        Ok(response)
    }
}

fn encode_images(images: &[Bytes]) -> Vec<String> {
    images.iter().map(|image| STANDARD.encode(image)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_images_as_base64() {
        let images = vec![Bytes::from_static(b"abc"), Bytes::from_static(b"\xff\x00")];

        assert_eq!(encode_images(&images), ["YWJj", "/wA="]);
    }

    #[test]
    fn request_payload_is_an_images_array() {
        let request = IdentificationRequest {
            images: encode_images(&[Bytes::from_static(b"abc")]),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({"images": ["YWJj"]}));
    }
}
