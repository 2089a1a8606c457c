use serde::{Deserialize, Serialize};

/// A per-user settings record.
///
/// There is at most one record per `user_id`; the `user_settings` table
/// enforces that with a unique constraint.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserSettings {
    /// Assigned by the persistence layer; zero until the record is stored.
    pub id: i32,
    pub user_id: i32,
    pub theme: Option<String>,
    pub language: Option<String>,
    pub notifications_enabled: Option<bool>,
}

impl UserSettings {
    /// A fresh record for `user_id` with every preference unset.
    pub fn default_for(user_id: i32) -> Self {
        Self {
            id: 0,
            user_id,
            theme: None,
            language: None,
            notifications_enabled: None,
        }
    }
}

/// The boundary shape of a settings record. Same field set as
/// [`UserSettings`], nothing hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsView {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub user_id: i32,
    pub theme: Option<String>,
    pub language: Option<String>,
    pub notifications_enabled: Option<bool>,
}

impl SettingsView {
    /// Overwrites every preference field of `target` with the view's value,
    /// nulls included. This is a full replace, not a sparse merge: a caller
    /// sending a partially populated view clears the fields it left out.
    ///
    /// `id` and `user_id` are never taken from the view; the identifier is
    /// assigned by the store and the owner is set once at creation.
    pub fn apply_to(&self, target: &mut UserSettings) {
        target.theme = self.theme.clone();
        target.language = self.language.clone();
        target.notifications_enabled = self.notifications_enabled;
    }
}

impl From<UserSettings> for SettingsView {
    fn from(record: UserSettings) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            theme: record.theme,
            language: record.language,
            notifications_enabled: record.notifications_enabled,
        }
    }
}
