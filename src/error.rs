use thiserror::Error;

use crate::action::InstanceAction;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can abort an invocation. All variants are terminal;
/// retries, if any, belong to whatever triggers the Lambda.
#[derive(Debug, Error)]
pub enum MaestroError {
    #[error("unable to load SDK: {0}")]
    Configuration(String),

    #[error("invalid action: {0}")]
    InvalidAction(String),

    #[error("error describing instances: {source}")]
    Discovery {
        #[source]
        source: BoxError,
    },

    #[error("error running {action} action: {source}")]
    Action {
        action: InstanceAction,
        #[source]
        source: BoxError,
    },
}
