use super::{
    config::ApiConfigTrait,
    error::{map_deserialization_error, map_serialization_error, parse_api_error, ClientError},
    signing::{sign, SigningParams},
};
use bytes::Bytes;
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone)]
pub(crate) struct ApiClient<C: ApiConfigTrait> {
    http_client: reqwest::Client,
    pub config: C,
    pub backoff: backoff::ExponentialBackoff,
}

impl<C: ApiConfigTrait> ApiClient<C> {
    pub fn new(config: C, retry_max_elapsed: std::time::Duration) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
            backoff: backoff::ExponentialBackoffBuilder::new()
                .with_max_elapsed_time(Some(retry_max_elapsed))
                .build(),
        }
    }

    /// Make a signed POST request for the `{target}` operation and deserialize the response body
    pub(crate) async fn post<I, O>(&self, target: &str, request: I) -> Result<O, ClientError>
    where
        I: Serialize + std::fmt::Debug,
        O: DeserializeOwned,
    {
        let serialized_request = serde_json::to_vec(&request).map_err(map_serialization_error)?;
        crate::trace!(
            "Serialized request: {}",
            String::from_utf8_lossy(&serialized_request)
        );
        let url = reqwest::Url::parse(&self.config.url())
            .map_err(|e| ClientError::InvalidArgument(format!("invalid endpoint: {e}")))?;
        let credentials = self
            .config
            .aws()
            .credentials()
            .ok_or_else(|| ClientError::Signing("credentials not loaded".to_string()))?;

        // Signed per attempt so retries carry a fresh x-amz-date.
        let request_maker = || async {
            let mut headers = self.config.headers(target);
            sign(
                "POST",
                &url,
                &mut headers,
                &serialized_request,
                &SigningParams {
                    credentials: &credentials,
                    region: self.config.aws().region(),
                    service: self.config.service(),
                    time: chrono::Utc::now(),
                },
            )?;
            let request = self
                .http_client
                .post(url.clone())
                .headers(headers)
                .body(serialized_request.clone())
                .build()?;
            Ok::<_, ClientError>(request)
        };
        self.execute(request_maker).await
    }

    /// Execute a HTTP request and retry on throttling and server errors
    ///
    /// request_maker serves one purpose: to be able to create (and sign) the request
    /// again to retry the API call after getting rate limited.
    async fn execute_raw<M, Fut>(&self, request_maker: M) -> Result<Bytes, ClientError>
    where
        M: Fn() -> Fut,
        Fut: core::future::Future<Output = Result<reqwest::Request, ClientError>>,
    {
        let client = self.http_client.clone();

        backoff::future::retry(self.backoff.clone(), || async {
            let request = request_maker().await.map_err(backoff::Error::Permanent)?;
            let response = client
                .execute(request)
                .await
                .map_err(ClientError::Reqwest)
                .map_err(backoff::Error::Permanent)?;

            let status = response.status();
            let bytes = response
                .bytes()
                .await
                .map_err(ClientError::Reqwest)
                .map_err(backoff::Error::Permanent)?;

            if !status.is_success() {
                let api_error = parse_api_error(status.as_u16(), bytes.as_ref());
                if api_error.is_transient() {
                    tracing::warn!(
                        "Retrying after {}: {}",
                        api_error.error_code(),
                        api_error.message
                    );
                    return Err(backoff::Error::Transient {
                        err: ClientError::ApiError(api_error),
                        retry_after: None,
                    });
                } else {
                    return Err(backoff::Error::Permanent(ClientError::ApiError(api_error)));
                }
            }

            Ok(bytes)
        })
        .await
    }

    async fn execute<O, M, Fut>(&self, request_maker: M) -> Result<O, ClientError>
    where
        O: DeserializeOwned,
        M: Fn() -> Fut,
        Fut: core::future::Future<Output = Result<reqwest::Request, ClientError>>,
    {
        let bytes = self.execute_raw(request_maker).await?;

        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| map_deserialization_error(e, &bytes))?;

        let pretty_json = serde_json::to_string_pretty(&value).map_err(map_serialization_error)?;
        crate::trace!("Serialized response: {}", pretty_json);

        let response: O =
            serde_json::from_value(value).map_err(|e| map_deserialization_error(e, &bytes))?;

        Ok(response)
    }
}
