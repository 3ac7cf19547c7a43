#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn, Level};

pub mod entity;
pub mod error;
pub mod job;
pub mod key_phrase;
pub mod state;

pub use comprehend_interface;
pub use entity::EntityDetectionJob;
pub use error::JobError;
pub use job::{ComprehendJob, DetectedItem, DocumentError, JobKind, JobOutput};
pub use key_phrase::KeyPhraseDetectionJob;
pub use state::{JobState, JobStatus, TextSegment};
