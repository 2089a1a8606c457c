use std::sync::Arc;

use crate::error::SettingsError;
use crate::repository::{SettingsRepository, UserRepository};
use crate::settings::{SettingsView, UserSettings};

/// Reads, upserts, and deletes the single settings record of a user.
///
/// A record is created lazily on the first read or write for a user that has
/// none, guarded by a user-existence check. `delete` is the only way back to
/// the no-record state and succeeds silently when there is nothing to remove.
pub struct SettingsService {
    settings: Arc<dyn SettingsRepository>,
    users: Arc<dyn UserRepository>,
}

impl SettingsService {
    pub fn new(settings: Arc<dyn SettingsRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { settings, users }
    }

    #[tracing::instrument(skip(self))]
    pub async fn get(&self, user_id: i32) -> Result<SettingsView, SettingsError> {
        let record = match self.settings.find_by_user_id(user_id).await? {
            Some(record) => record,
            None => self.create_default(user_id).await?,
        };

        Ok(SettingsView::from(record))
    }

    #[tracing::instrument(skip(self, patch))]
    pub async fn save(
        &self,
        user_id: i32,
        patch: SettingsView,
    ) -> Result<SettingsView, SettingsError> {
        let record = match self.settings.find_by_user_id(user_id).await? {
            Some(mut record) => {
                patch.apply_to(&mut record);
                self.settings.update(record).await?
            }
            None => {
                if !self.users.exists(user_id).await? {
                    return Err(SettingsError::UserNotFound(user_id));
                }

                let mut record = UserSettings::default_for(user_id);
                patch.apply_to(&mut record);
                self.settings.insert(record).await?
            }
        };

        Ok(SettingsView::from(record))
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, user_id: i32) -> Result<(), SettingsError> {
        match self.settings.find_by_user_id(user_id).await? {
            Some(record) => {
                self.settings.delete(record).await?;
            }
            None => {
                tracing::debug!("no settings record for user {user_id}, nothing to delete");
            }
        }

        Ok(())
    }

    async fn create_default(&self, user_id: i32) -> Result<UserSettings, SettingsError> {
        if !self.users.exists(user_id).await? {
            return Err(SettingsError::UserNotFound(user_id));
        }

        tracing::info!("creating default settings for user {user_id}");

        let record = self
            .settings
            .insert(UserSettings::default_for(user_id))
            .await?;

        Ok(record)
    }
}
