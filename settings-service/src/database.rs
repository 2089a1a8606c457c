use anyhow::Context;
use async_trait::async_trait;

use crate::repository::{SettingsRepository, UserRepository};
use crate::settings::UserSettings;

#[derive(Clone)]
pub struct DatabasePool(sqlx::PgPool);

impl DatabasePool {
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let pool = sqlx::PgPool::connect(url)
            .await
            .context("Failed to connect to the database")?;

        Ok(Self(pool))
    }

    pub fn get_pool(&self) -> sqlx::PgPool {
        self.0.clone()
    }
}

pub struct PgSettingsRepository {
    pool: sqlx::PgPool,
}

impl PgSettingsRepository {
    pub fn new(pool: &DatabasePool) -> Self {
        Self {
            pool: pool.get_pool(),
        }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    async fn find_by_user_id(&self, user_id: i32) -> anyhow::Result<Option<UserSettings>> {
        let record = sqlx::query_as::<_, UserSettings>(
            "SELECT id, user_id, theme, language, notifications_enabled \
             FROM user_settings WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch the settings record")?;

        Ok(record)
    }

    async fn insert(&self, record: UserSettings) -> anyhow::Result<UserSettings> {
        // The unique index on user_id rejects a second insert if two callers
        // race through the lazy-create path; the loser's error surfaces here.
        let record = sqlx::query_as::<_, UserSettings>(
            "INSERT INTO user_settings (user_id, theme, language, notifications_enabled) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, user_id, theme, language, notifications_enabled",
        )
        .bind(record.user_id)
        .bind(record.theme)
        .bind(record.language)
        .bind(record.notifications_enabled)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert the settings record")?;

        Ok(record)
    }

    async fn update(&self, record: UserSettings) -> anyhow::Result<UserSettings> {
        let record = sqlx::query_as::<_, UserSettings>(
            "UPDATE user_settings SET theme = $2, language = $3, notifications_enabled = $4 \
             WHERE id = $1 \
             RETURNING id, user_id, theme, language, notifications_enabled",
        )
        .bind(record.id)
        .bind(record.theme)
        .bind(record.language)
        .bind(record.notifications_enabled)
        .fetch_one(&self.pool)
        .await
        .context("Failed to update the settings record")?;

        Ok(record)
    }

    async fn delete(&self, record: UserSettings) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM user_settings WHERE id = $1")
            .bind(record.id)
            .execute(&self.pool)
            .await
            .context("Failed to delete the settings record")?;

        Ok(())
    }
}

pub struct PgUserRepository {
    pool: sqlx::PgPool,
}

impl PgUserRepository {
    pub fn new(pool: &DatabasePool) -> Self {
        Self {
            pool: pool.get_pool(),
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn exists(&self, user_id: i32) -> anyhow::Result<bool> {
        let row = sqlx::query("SELECT id FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to look up the user")?;

        Ok(row.is_some())
    }
}
