use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Underlying error from reqwest library after an API call was made
    #[error("http error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// API returns error object with details of API call failure
    #[error("{}: {}", .0.error_code(), .0.message)]
    ApiError(AwsApiError),
    /// Error when a request cannot be serialized
    #[error("failed to serialize api request: {0}")]
    JSONSerialize(serde_json::Error),
    /// Error when a response cannot be deserialized into a Rust type
    #[error("failed to deserialize api response: {0}")]
    JSONDeserialize(serde_json::Error),
    /// Error from client side validation before making API call
    #[error("invalid args: {0}")]
    InvalidArgument(String),
    /// Credentials or headers could not be turned into a signed request
    #[error("signing error: {0}")]
    Signing(String),
}

/// Error body returned by the AWS JSON protocol.
///
/// `__type` is either a bare code (`ThrottlingException`) or namespaced
/// (`com.amazonaws.comprehend#TextSizeLimitExceededException`).
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AwsApiError {
    #[serde(rename = "__type")]
    pub r#type: Option<String>,
    #[serde(alias = "Message", default)]
    pub message: String,
    /// HTTP status of the failed call. Not part of the body.
    #[serde(skip)]
    pub status: u16,
}

impl AwsApiError {
    pub fn error_code(&self) -> &str {
        match self.r#type.as_deref() {
            Some(t) => t.rsplit('#').next().unwrap_or(t),
            None => "UnknownError",
        }
    }

    /// Throttling and server side failures are worth retrying.
    pub fn is_transient(&self) -> bool {
        self.status == 429
            || self.status >= 500
            || matches!(
                self.error_code(),
                "ThrottlingException"
                    | "TooManyRequestsException"
                    | "ServiceUnavailableException"
                    | "InternalServerException"
            )
    }
}

pub(crate) fn map_deserialization_error(e: serde_json::Error, bytes: &[u8]) -> ClientError {
    tracing::error!(
        "failed deserialization of: {}",
        String::from_utf8_lossy(bytes)
    );
    ClientError::JSONDeserialize(e)
}

pub(crate) fn map_serialization_error(e: serde_json::Error) -> ClientError {
    tracing::error!("failed serialization: {}", e);
    ClientError::JSONSerialize(e)
}

/// Parses an error body, falling back to the raw text when it is not AWS JSON.
pub(crate) fn parse_api_error(status: u16, bytes: &[u8]) -> AwsApiError {
    match serde_json::from_slice::<AwsApiError>(bytes) {
        Ok(mut error) => {
            error.status = status;
            error
        }
        Err(_) => AwsApiError {
            r#type: None,
            message: String::from_utf8_lossy(bytes).into_owned(),
            status,
        },
    }
}
