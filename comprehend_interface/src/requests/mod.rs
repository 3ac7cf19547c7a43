mod language;

pub use language::LanguageCode;

use serde::{Deserialize, Serialize};

/// Maximum number of documents in a single `BatchDetect*` call.
pub const MAX_BATCH_DOCUMENTS: usize = 25;
/// Maximum size of a single document, in UTF-8 bytes.
pub const MAX_DOCUMENT_BYTES: usize = 5000;

/// Request body shared by the `BatchDetectEntities` and `BatchDetectKeyPhrases` operations.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BatchDetectRequest {
    /// Up to [`MAX_BATCH_DOCUMENTS`] documents, each at most [`MAX_DOCUMENT_BYTES`].
    pub text_list: Vec<String>,
    pub language_code: LanguageCode,
}

impl BatchDetectRequest {
    pub fn new(text_list: Vec<String>, language_code: LanguageCode) -> Self {
        Self {
            text_list,
            language_code,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.text_list.is_empty() {
            return Err("TextList must contain at least one document".to_string());
        }
        if self.text_list.len() > MAX_BATCH_DOCUMENTS {
            return Err(format!(
                "TextList has {} documents, the limit is {MAX_BATCH_DOCUMENTS}",
                self.text_list.len()
            ));
        }
        if let Some((i, doc)) = self
            .text_list
            .iter()
            .enumerate()
            .find(|(_, doc)| doc.len() > MAX_DOCUMENT_BYTES)
        {
            return Err(format!(
                "document {i} is {} bytes, the limit is {MAX_DOCUMENT_BYTES}",
                doc.len()
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BatchDetectResponse {
    #[serde(default)]
    pub result_list: Vec<BatchItemResult>,
    #[serde(default)]
    pub error_list: Vec<BatchItemError>,
}

/// Result for one document of a batch.
///
/// The analysis payload differs per operation (`Entities`, `KeyPhrases`, ...), so
/// everything besides `Index` is kept as raw JSON and selected by field name.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BatchItemResult {
    #[serde(rename = "Index")]
    pub index: usize,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl BatchItemResult {
    /// Items stored under `prop_list`, or an empty slice if the field is missing
    /// or not an array.
    pub fn items(&self, prop_list: &str) -> &[serde_json::Value] {
        match self.fields.get(prop_list) {
            Some(serde_json::Value::Array(items)) => items.as_slice(),
            _ => &[],
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BatchItemError {
    pub index: usize,
    pub error_code: String,
    #[serde(default)]
    pub error_message: String,
}
