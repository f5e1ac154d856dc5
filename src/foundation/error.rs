/// Crate-wide result alias.
pub type UmbraResult<T> = Result<T, UmbraError>;

/// Errors surfaced by the shadow pipeline.
#[derive(thiserror::Error, Debug)]
pub enum UmbraError {
    /// A zero-area raster or a spec that leaves no drawable area.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// A malformed parameter that is not a geometry problem.
    #[error("validation error: {0}")]
    Validation(String),

    /// The platform has no Gaussian blur compute kernel.
    #[error("blur service unavailable: {0}")]
    BlurServiceUnavailable(String),

    /// Anything from outside the pipeline (IO, platform glue).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UmbraError {
    /// Build a [`UmbraError::DegenerateInput`].
    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateInput(msg.into())
    }

    /// Build a [`UmbraError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`UmbraError::BlurServiceUnavailable`].
    pub fn blur_unavailable(msg: impl Into<String>) -> Self {
        Self::BlurServiceUnavailable(msg.into())
    }
}
