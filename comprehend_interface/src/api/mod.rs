// Internal modules
mod client;
mod config;
mod error;
mod signing;

// Public modules
pub mod comprehend;

// Internal exports
pub(crate) use client::ApiClient;
pub(crate) use config::ApiConfigTrait;

// Public exports
pub use config::{AwsConfig, AwsConfigTrait, DEFAULT_REGION};
pub use error::{AwsApiError, ClientError};

use crate::requests::{BatchDetectRequest, BatchDetectResponse};
use std::future::Future;

/// The Comprehend operations jobs are built on.
///
/// [`comprehend::ComprehendClient`] calls the service over HTTP; tests substitute
/// their own implementation.
pub trait ComprehendService: Send + Sync + 'static {
    fn batch_detect_entities(
        &self,
        request: BatchDetectRequest,
    ) -> impl Future<Output = Result<BatchDetectResponse, ClientError>> + Send;

    fn batch_detect_key_phrases(
        &self,
        request: BatchDetectRequest,
    ) -> impl Future<Output = Result<BatchDetectResponse, ClientError>> + Send;
}
