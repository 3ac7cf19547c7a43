use super::signing::Credentials;
use reqwest::header::HeaderMap;
use secrecy::Secret;

pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Clone, Debug)]
pub struct AwsConfig {
    pub region: Option<String>,
    /// Overrides the regional endpoint, e.g. for a VPC endpoint or a local stand-in.
    pub endpoint: Option<String>,
    pub access_key_id: Option<Secret<String>>,
    pub secret_access_key: Option<Secret<String>>,
    pub session_token: Option<Secret<String>>,
    pub region_env_var: String,
    pub access_key_id_env_var: String,
    pub secret_access_key_env_var: String,
    pub session_token_env_var: String,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: None,
            endpoint: None,
            access_key_id: None,
            secret_access_key: None,
            session_token: None,
            region_env_var: "AWS_REGION".to_string(),
            access_key_id_env_var: "AWS_ACCESS_KEY_ID".to_string(),
            secret_access_key_env_var: "AWS_SECRET_ACCESS_KEY".to_string(),
            session_token_env_var: "AWS_SESSION_TOKEN".to_string(),
        }
    }
}

impl AwsConfig {
    /// Fills in region and credentials not set by parameter from the environment or `.env`.
    pub(crate) fn load(&mut self) -> crate::Result<()> {
        dotenvy::dotenv().ok();

        if self.region.is_none() {
            self.region = Some(match dotenvy::var(&self.region_env_var) {
                Ok(region) => region,
                Err(_) => {
                    crate::trace!(
                        "{} not set, using {DEFAULT_REGION}",
                        self.region_env_var
                    );
                    DEFAULT_REGION.to_string()
                }
            });
        }
        if self.access_key_id.is_none() {
            self.access_key_id = Some(load_secret(&self.access_key_id_env_var)?);
        }
        if self.secret_access_key.is_none() {
            self.secret_access_key = Some(load_secret(&self.secret_access_key_env_var)?);
        }
        if self.session_token.is_none() {
            self.session_token = dotenvy::var(&self.session_token_env_var)
                .ok()
                .map(Secret::from);
        }
        Ok(())
    }

    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }

    pub(crate) fn credentials(&self) -> Option<Credentials> {
        Some(Credentials {
            access_key_id: self.access_key_id.clone()?,
            secret_access_key: self.secret_access_key.clone()?,
            session_token: self.session_token.clone(),
        })
    }
}

fn load_secret(env_var: &str) -> crate::Result<Secret<String>> {
    match dotenvy::var(env_var) {
        Ok(value) => {
            crate::trace!("Successfully loaded {env_var} from environment");
            Ok(Secret::from(value))
        }
        Err(_) => {
            crate::trace!("{env_var} not found in dotenv, nor was it set manually");
            crate::bail!("Failed to load {env_var} from parameter or .env")
        }
    }
}

pub trait AwsConfigTrait {
    fn aws_config_mut(&mut self) -> &mut AwsConfig;

    fn aws_config(&self) -> &AwsConfig;

    fn with_region<S: AsRef<str>>(mut self, region: S) -> Self
    where
        Self: Sized,
    {
        self.aws_config_mut().region = Some(region.as_ref().to_string());
        self
    }

    fn with_endpoint<S: AsRef<str>>(mut self, endpoint: S) -> Self
    where
        Self: Sized,
    {
        self.aws_config_mut().endpoint = Some(endpoint.as_ref().trim_end_matches('/').to_string());
        self
    }

    fn with_credentials<A: Into<String>, S: Into<String>>(
        mut self,
        access_key_id: A,
        secret_access_key: S,
    ) -> Self
    where
        Self: Sized,
    {
        let config = self.aws_config_mut();
        config.access_key_id = Some(Secret::from(access_key_id.into()));
        config.secret_access_key = Some(Secret::from(secret_access_key.into()));
        self
    }

    fn with_session_token<S: Into<String>>(mut self, session_token: S) -> Self
    where
        Self: Sized,
    {
        self.aws_config_mut().session_token = Some(Secret::from(session_token.into()));
        self
    }

    /// Set the environment variable name for the region. Default is `AWS_REGION`.
    fn with_region_env_var<S: Into<String>>(mut self, env_var: S) -> Self
    where
        Self: Sized,
    {
        self.aws_config_mut().region_env_var = env_var.into();
        self
    }

    fn with_access_key_id_env_var<S: Into<String>>(mut self, env_var: S) -> Self
    where
        Self: Sized,
    {
        self.aws_config_mut().access_key_id_env_var = env_var.into();
        self
    }

    fn with_secret_access_key_env_var<S: Into<String>>(mut self, env_var: S) -> Self
    where
        Self: Sized,
    {
        self.aws_config_mut().secret_access_key_env_var = env_var.into();
        self
    }

    fn with_session_token_env_var<S: Into<String>>(mut self, env_var: S) -> Self
    where
        Self: Sized,
    {
        self.aws_config_mut().session_token_env_var = env_var.into();
        self
    }
}

pub(crate) trait ApiConfigTrait {
    fn headers(&self, target: &str) -> HeaderMap;

    fn url(&self) -> String;

    fn service(&self) -> &str;

    fn aws(&self) -> &AwsConfig;
}
