use async_trait::async_trait;

use crate::settings::UserSettings;

/// Persistence port for settings records.
///
/// `insert` and `update` are split so the service can state explicitly
/// whether a record is newly constructed or pre-existing.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: i32) -> anyhow::Result<Option<UserSettings>>;

    /// Stores a new record and returns it with its assigned identifier.
    /// Fails if a record for the same user already exists.
    async fn insert(&self, record: UserSettings) -> anyhow::Result<UserSettings>;

    async fn update(&self, record: UserSettings) -> anyhow::Result<UserSettings>;

    async fn delete(&self, record: UserSettings) -> anyhow::Result<()>;
}

/// Lookup port for the users the settings records belong to.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn exists(&self, user_id: i32) -> anyhow::Result<bool>;
}
