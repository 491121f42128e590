pub type VernissageResult<T> = Result<T, VernissageError>;

#[derive(thiserror::Error, Debug)]
pub enum VernissageError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("animation error: {0}")]
    Animation(String),

    #[error("catalogue error: {0}")]
    Catalogue(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VernissageError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    pub fn catalogue(msg: impl Into<String>) -> Self {
        Self::Catalogue(msg.into())
    }
}
