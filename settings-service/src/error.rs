use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    /// The operation needed a settings record for a user that does not exist.
    #[error("user {0} does not exist")]
    UserNotFound(i32),

    /// A persistence-layer fault, propagated unchanged.
    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}
