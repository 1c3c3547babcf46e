use rn_core::RnError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("pipeline configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Network(#[from] RnError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
