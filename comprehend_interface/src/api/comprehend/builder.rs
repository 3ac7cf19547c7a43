use super::{ComprehendClient, ComprehendConfig};
use crate::{
    api::config::{AwsConfig, AwsConfigTrait},
    logging::{LoggingConfig, LoggingConfigTrait},
};

#[derive(Default)]
pub struct ComprehendClientBuilder {
    pub config: ComprehendConfig,
}

impl ComprehendClientBuilder {
    pub fn with_retry_max_elapsed(mut self, retry_max_elapsed: std::time::Duration) -> Self {
        self.config.retry_max_elapsed = retry_max_elapsed;
        self
    }

    pub fn init(self) -> crate::Result<std::sync::Arc<ComprehendClient>> {
        Ok(std::sync::Arc::new(ComprehendClient::new(self.config)?))
    }
}

impl AwsConfigTrait for ComprehendClientBuilder {
    fn aws_config_mut(&mut self) -> &mut AwsConfig {
        &mut self.config.aws_config
    }

    fn aws_config(&self) -> &AwsConfig {
        &self.config.aws_config
    }
}

impl LoggingConfigTrait for ComprehendClientBuilder {
    fn logging_config_mut(&mut self) -> &mut LoggingConfig {
        &mut self.config.logging_config
    }
}
