use reqwest::multipart;
use serde::Deserialize;

/// Shown when the service reports it could not process the image, or
/// returned no parsed results at all.
pub const PROCESSING_ERROR_TEXT: &str = "Error: Could not process image.";
/// Shown when the response body is not the JSON we expect.
pub const PARSE_ERROR_TEXT: &str = "Error: Could not parse the response from the server.";
/// Shown when the request never produced a response body.
pub const TRANSPORT_ERROR_TEXT: &str = "Error: Could not reach the OCR service.";

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Client for the remote OCR endpoint. One POST per extraction, multipart
/// body carrying the PNG plus the API key and language code.
#[derive(Clone)]
pub struct OcrClient {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

impl OcrClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            endpoint,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Extract text from a PNG-encoded capture. Never fails from the
    /// caller's point of view: every failure mode collapses to one of the
    /// fixed placeholder strings.
    pub async fn parse_image(&self, png: Vec<u8>, language: &str) -> String {
        match self.request(png, language).await {
            Ok(body) => decode_body(&body),
            Err(e) => {
                tracing::warn!("OCR request failed: {e}");
                TRANSPORT_ERROR_TEXT.to_string()
            }
        }
    }

    async fn request(&self, png: Vec<u8>, language: &str) -> Result<String, OcrError> {
        let part = multipart::Part::bytes(png)
            .file_name("screenshot.png")
            .mime_str("image/png")?;

        let form = multipart::Form::new()
            .text("apikey", self.api_key.clone())
            .text("language", language.to_string())
            .text("isOverlayRequired", "false")
            .part("screenshot.png", part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        Ok(response.text().await?)
    }
}

fn decode_body(body: &str) -> String {
    match serde_json::from_str::<OcrResponse>(body) {
        Ok(response) => response.into_text(),
        Err(e) => {
            tracing::warn!("OCR response was not valid JSON: {e}");
            PARSE_ERROR_TEXT.to_string()
        }
    }
}

#[derive(Deserialize)]
struct OcrResponse {
    #[serde(rename = "IsErroredOnProcessing", default)]
    is_errored_on_processing: bool,
    #[serde(rename = "ParsedResults", default)]
    parsed_results: Vec<ParsedResult>,
}

#[derive(Deserialize)]
struct ParsedResult {
    #[serde(rename = "ParsedText", default)]
    parsed_text: String,
}

impl OcrResponse {
    fn into_text(self) -> String {
        if self.is_errored_on_processing {
            return PROCESSING_ERROR_TEXT.to_string();
        }

        match self.parsed_results.into_iter().next() {
            Some(result) => result.parsed_text,
            None => PROCESSING_ERROR_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_yields_the_first_parsed_text() {
        let body = r#"{
            "IsErroredOnProcessing": false,
            "ParsedResults": [
                {"ParsedText": "hello world"},
                {"ParsedText": "second page"}
            ]
        }"#;
        assert_eq!(decode_body(body), "hello world");
    }

    #[test]
    fn processing_error_flag_maps_to_the_fixed_placeholder() {
        let body = r#"{"IsErroredOnProcessing": true}"#;
        assert_eq!(decode_body(body), PROCESSING_ERROR_TEXT);
    }

    #[test]
    fn non_json_body_maps_to_the_parse_placeholder() {
        assert_eq!(decode_body("<html>502 Bad Gateway</html>"), PARSE_ERROR_TEXT);
        assert_eq!(decode_body(""), PARSE_ERROR_TEXT);
    }

    #[test]
    fn empty_result_list_counts_as_a_processing_failure() {
        let body = r#"{"IsErroredOnProcessing": false, "ParsedResults": []}"#;
        assert_eq!(decode_body(body), PROCESSING_ERROR_TEXT);
    }

    #[test]
    fn missing_fields_default_rather_than_fail() {
        // A minimal but well-formed body should not trip the parse path.
        assert_eq!(decode_body("{}"), PROCESSING_ERROR_TEXT);
    }
}
