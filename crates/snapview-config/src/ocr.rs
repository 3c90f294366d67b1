use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_api_url() -> String {
    "https://api.ocr.space/parse/image".to_string()
}

fn default_language() -> String {
    "eng".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Comes from the environment only; never serialized into a profile.
    #[serde(skip)]
    pub api_key: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl OcrConfig {
    pub fn new() -> Self {
        let api_url = env::var("SNAPVIEW_OCR_URL").unwrap_or_else(|_| default_api_url());
        let api_key = env::var("SNAPVIEW_OCR_API_KEY").unwrap_or_default();
        let language = env::var("SNAPVIEW_OCR_LANGUAGE").unwrap_or_else(|_| default_language());

        Self {
            enabled: default_enabled(),
            api_url,
            api_key,
            language,
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: default_api_url(),
            api_key: String::new(),
            language: default_language(),
        }
    }
}
