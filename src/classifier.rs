//! Waste classifier adapters.
//!
//! `ClassifierClient` talks to the prediction service over HTTP.
//! `DemoClassifier` is an offline stand-in used when no model is reachable.

use std::path::Path;
use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ClassifierError;
use crate::traits::Classifier;
use crate::waste::Prediction;

const URL_ENV: &str = "WASTE_CLASSIFIER_URL";
const TIMEOUT_ENV: &str = "WASTE_CLASSIFIER_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 10,
        }
    }
}

impl ClassifierConfig {
    /// Defaults overridden by `WASTE_CLASSIFIER_URL` and
    /// `WASTE_CLASSIFIER_TIMEOUT_SECS` when set. Unparsable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(URL_ENV).filter(|url| !url.trim().is_empty()) {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(secs) = lookup(TIMEOUT_ENV).and_then(|value| value.trim().parse().ok()) {
            config.timeout_secs = secs;
        }
        config
    }
}

#[derive(Debug, Clone)]
pub struct ClassifierClient {
    config: ClassifierConfig,
    client: reqwest::blocking::Client,
}

impl ClassifierClient {
    pub fn new(config: ClassifierConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Checks `GET /health` reports `{"status": "ok"}`.
    pub fn health(&self) -> Result<(), ClassifierError> {
        let url = format!("{}/health", self.config.base_url);
        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(ClassifierError::Status(response.status().as_u16()));
        }

        let body = response.json::<HealthResponse>()?;
        if body.status == "ok" {
            Ok(())
        } else {
            Err(ClassifierError::Unhealthy(body.status))
        }
    }

    /// Reads an image from disk and classifies it under its file name.
    pub fn classify_file(&self, path: impl AsRef<Path>) -> Result<Prediction, ClassifierError> {
        let path = path.as_ref();
        let image = std::fs::read(path)?;
        let filename = path.file_name().and_then(|name| name.to_str());
        self.classify(&image, filename)
    }
}

impl Classifier for ClassifierClient {
    fn classify(&self, image: &[u8], filename: Option<&str>) -> Result<Prediction, ClassifierError> {
        let url = format!("{}/predict", self.config.base_url);
        debug!(url = %url, bytes = image.len(), "submitting image for classification");

        let part = Part::bytes(image.to_vec()).file_name(filename.unwrap_or("upload").to_string());
        let form = Form::new().part("file", part);

        let response = self.client.post(url).multipart(form).send()?;
        if !response.status().is_success() {
            return Err(ClassifierError::Status(response.status().as_u16()));
        }

        Ok(response.json::<Prediction>()?)
    }
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Category order of the trained model's output layer.
const MODEL_CATEGORIES: [&str; 7] = [
    "cardboard",
    "miscellaneous",
    "organic",
    "paper",
    "glass",
    "metal",
    "plastic",
];

const DEMO_CONFIDENCE: f64 = 0.6;

/// Deterministic offline classifier.
///
/// Picks a category from the byte sum of the image, so the same file always
/// lands in the same bin. Empty input is labelled "unknown" with zero
/// confidence.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoClassifier;

impl DemoClassifier {
    pub fn predict(&self, image: &[u8], filename: Option<&str>) -> Prediction {
        let (category, confidence) = if image.is_empty() {
            ("unknown", 0.0)
        } else {
            let sum = image.iter().fold(0usize, |acc, byte| acc.wrapping_add(*byte as usize));
            (MODEL_CATEGORIES[sum % MODEL_CATEGORIES.len()], DEMO_CONFIDENCE)
        };

        Prediction {
            filename: filename.map(str::to_string),
            category: category.to_string(),
            confidence,
            mode: "demo".to_string(),
        }
    }
}

impl Classifier for DemoClassifier {
    fn classify(&self, image: &[u8], filename: Option<&str>) -> Result<Prediction, ClassifierError> {
        Ok(self.predict(image, filename))
    }
}

/// Tries `primary` first and answers from `fallback` when it errors.
#[derive(Debug, Clone)]
pub struct FallbackClassifier<P, F> {
    pub primary: P,
    pub fallback: F,
}

impl<P, F> FallbackClassifier<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: Classifier, F: Classifier> Classifier for FallbackClassifier<P, F> {
    fn classify(&self, image: &[u8], filename: Option<&str>) -> Result<Prediction, ClassifierError> {
        match self.primary.classify(image, filename) {
            Ok(prediction) => Ok(prediction),
            Err(err) => {
                warn!(error = %err, "primary classifier failed, using fallback");
                self.fallback.classify(image, filename)
            }
        }
    }
}
