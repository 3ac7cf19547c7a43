pub mod builder;

use super::{
    client::ApiClient,
    config::{ApiConfigTrait, AwsConfig},
    error::ClientError,
    ComprehendService,
};
use crate::{
    logging::LoggingConfig,
    requests::{BatchDetectRequest, BatchDetectResponse},
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};

/// Signing name of the service.
pub const COMPREHEND_SERVICE: &str = "comprehend";
/// Prefix of the `X-Amz-Target` header for the 2017-11-27 API.
pub const COMPREHEND_TARGET_PREFIX: &str = "Comprehend_20171127";
pub const AMZ_JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";
pub const X_AMZ_TARGET_HEADER: &str = "x-amz-target";

pub struct ComprehendClient {
    pub(crate) client: ApiClient<ComprehendConfig>,
}

impl ComprehendClient {
    pub fn new(mut config: ComprehendConfig) -> crate::Result<Self> {
        config.logging_config.load_logger()?;
        config.aws_config.load()?;
        crate::debug!(
            "Comprehend client for {} at {}",
            config.aws_config.region(),
            config.url()
        );
        let retry_max_elapsed = config.retry_max_elapsed;
        Ok(Self {
            client: ApiClient::new(config, retry_max_elapsed),
        })
    }

    pub fn config(&self) -> &ComprehendConfig {
        &self.client.config
    }

    async fn batch_detect(
        &self,
        operation: &str,
        request: BatchDetectRequest,
    ) -> Result<BatchDetectResponse, ClientError> {
        request.validate().map_err(ClientError::InvalidArgument)?;
        crate::debug!(
            "{operation}: {} documents ({})",
            request.text_list.len(),
            request.language_code
        );
        self.client.post(operation, request).await
    }
}

impl ComprehendService for ComprehendClient {
    async fn batch_detect_entities(
        &self,
        request: BatchDetectRequest,
    ) -> Result<BatchDetectResponse, ClientError> {
        self.batch_detect("BatchDetectEntities", request).await
    }

    async fn batch_detect_key_phrases(
        &self,
        request: BatchDetectRequest,
    ) -> Result<BatchDetectResponse, ClientError> {
        self.batch_detect("BatchDetectKeyPhrases", request).await
    }
}

#[derive(Clone, Debug)]
pub struct ComprehendConfig {
    pub aws_config: AwsConfig,
    pub logging_config: LoggingConfig,
    /// Total time spent retrying throttled or failed calls before giving up.
    pub retry_max_elapsed: std::time::Duration,
}

impl Default for ComprehendConfig {
    fn default() -> Self {
        Self {
            aws_config: AwsConfig::default(),
            logging_config: LoggingConfig {
                logger_name: "comprehend".to_string(),
                ..Default::default()
            },
            retry_max_elapsed: std::time::Duration::from_secs(60),
        }
    }
}

impl ComprehendConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_retry_max_elapsed(mut self, retry_max_elapsed: std::time::Duration) -> Self {
        self.retry_max_elapsed = retry_max_elapsed;
        self
    }
}

impl ApiConfigTrait for ComprehendConfig {
    fn headers(&self, target: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(AMZ_JSON_CONTENT_TYPE));
        if let Ok(value) = HeaderValue::from_str(&format!("{COMPREHEND_TARGET_PREFIX}.{target}")) {
            headers.insert(HeaderName::from_static(X_AMZ_TARGET_HEADER), value);
        }
        headers
    }

    fn url(&self) -> String {
        match &self.aws_config.endpoint {
            Some(endpoint) => format!("{endpoint}/"),
            None => format!(
                "https://{COMPREHEND_SERVICE}.{}.amazonaws.com/",
                self.aws_config.region()
            ),
        }
    }

    fn service(&self) -> &str {
        COMPREHEND_SERVICE
    }

    fn aws(&self) -> &AwsConfig {
        &self.aws_config
    }
}
