use comprehend_interface::ClientError;

#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("ClientError: {0}")]
    Client(#[from] ClientError),
    #[error("UnsupportedLanguage: {0}")]
    UnsupportedLanguage(String),
    /// The service answered with a result the job cannot map back to its documents.
    #[error("InvalidResponse: {0}")]
    InvalidResponse(String),
}
