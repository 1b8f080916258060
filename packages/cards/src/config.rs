//! # Card configuration — `cards.toml`
//!
//! ```toml
//! [dataset]
//! url = ""                     # empty = bundled dataset asset
//!
//! [images]
//! card_photo_placeholder = "https://via.placeholder.com/110x120?text=Photo+Not+Available"
//! verification_photo_placeholder = "https://via.placeholder.com/200x250?text=Photo+Not+Available"
//! signature = "/chairman_signature.jpg"
//!
//! [qr]
//! size = 90
//!
//! [validity]
//! valid_through = "2027"
//! ```
//!
//! Every section and key is optional; a missing or empty file equals [`CardsConfig::default`].

use serde::{Deserialize, Serialize};

use crate::error::CardsError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardsConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub images: ImagesConfig,
    #[serde(default)]
    pub qr: QrConfig,
    #[serde(default)]
    pub validity: ValidityConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Dataset location, relative to the page or absolute. Empty uses the bundled asset.
    #[serde(default)]
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImagesConfig {
    #[serde(default = "default_card_photo_placeholder")]
    pub card_photo_placeholder: String,
    #[serde(default = "default_verification_photo_placeholder")]
    pub verification_photo_placeholder: String,
    #[serde(default = "default_signature")]
    pub signature: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QrConfig {
    /// Minimum rendered edge length in pixels.
    #[serde(default = "default_qr_size")]
    pub size: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidityConfig {
    #[serde(default = "default_valid_through")]
    pub valid_through: String,
}

fn default_card_photo_placeholder() -> String {
    "https://via.placeholder.com/110x120?text=Photo+Not+Available".to_string()
}

fn default_verification_photo_placeholder() -> String {
    "https://via.placeholder.com/200x250?text=Photo+Not+Available".to_string()
}

fn default_signature() -> String {
    "/chairman_signature.jpg".to_string()
}

fn default_qr_size() -> u32 {
    90
}

fn default_valid_through() -> String {
    "2027".to_string()
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            card_photo_placeholder: default_card_photo_placeholder(),
            verification_photo_placeholder: default_verification_photo_placeholder(),
            signature: default_signature(),
        }
    }
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            size: default_qr_size(),
        }
    }
}

impl Default for ValidityConfig {
    fn default() -> Self {
        Self {
            valid_through: default_valid_through(),
        }
    }
}

impl CardsConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "cards.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, CardsError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Dataset URL to fetch, falling back to `bundled` when none is configured.
    pub fn dataset_url<'a>(&'a self, bundled: &'a str) -> &'a str {
        let url = self.dataset.url.trim();
        if url.is_empty() {
            bundled
        } else {
            url
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = CardsConfig::from_toml("").unwrap();
        assert_eq!(config, CardsConfig::default());
        assert_eq!(config.qr.size, 90);
        assert_eq!(config.validity.valid_through, "2027");
        assert_eq!(config.images.signature, "/chairman_signature.jpg");
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = CardsConfig::from_toml(
            r#"
            [qr]
            size = 120

            [images]
            signature = "/sig.png"
            "#,
        )
        .unwrap();
        assert_eq!(config.qr.size, 120);
        assert_eq!(config.images.signature, "/sig.png");
        assert_eq!(
            config.images.card_photo_placeholder,
            default_card_photo_placeholder()
        );
        assert_eq!(config.validity.valid_through, "2027");
    }

    #[test]
    fn test_dataset_url_fallback() {
        let mut config = CardsConfig::default();
        assert_eq!(config.dataset_url("/assets/data.json"), "/assets/data.json");
        config.dataset.url = "nursery_indus_student.json".to_string();
        assert_eq!(
            config.dataset_url("/assets/data.json"),
            "nursery_indus_student.json"
        );
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = CardsConfig::default();
        config.validity.valid_through = "2030".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(CardsConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            CardsConfig::from_toml("[qr]\nsize = \"big\""),
            Err(CardsError::Config(_))
        ));
    }
}
