use thiserror::Error;

/// Everything that can go wrong while turning geometry into visuals.
///
/// None of these are fatal: controllers record the error, skip the affected
/// tick or target and keep the last good output.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum MotionError {
    #[error("viewport dimensions are unavailable")]
    EnvironmentUnavailable,
    #[error("no element matches `{0}`")]
    TargetNotFound(String),
    #[error("could not read geometry for `{0}`")]
    GeometryUnavailable(String),
    #[error("calculation produced a non-finite {0}")]
    Calculation(&'static str),
    #[error("could not write to consumer: {0}")]
    ConsumerWrite(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MotionError>;
