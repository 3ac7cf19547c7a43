#[allow(unused_imports)]
pub(crate) use anyhow::{anyhow, bail, Error, Result};
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn, Level};

pub mod api;
pub mod logging;
pub mod requests;

pub use api::{
    comprehend::{builder::ComprehendClientBuilder, ComprehendClient, ComprehendConfig},
    AwsApiError, AwsConfig, AwsConfigTrait, ClientError, ComprehendService,
};
pub use logging::{LoggingConfig, LoggingConfigTrait};
pub use requests::*;

pub struct ComprehendInterface {}

impl ComprehendInterface {
    pub fn comprehend() -> ComprehendClientBuilder {
        ComprehendClientBuilder::default()
    }
}
