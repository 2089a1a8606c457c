pub mod config;
pub mod database;
pub mod error;
pub mod repository;
pub mod service;
pub mod settings;

pub use error::SettingsError;
pub use service::SettingsService;
pub use settings::{SettingsView, UserSettings};
