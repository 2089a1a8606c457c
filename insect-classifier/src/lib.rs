pub mod client;
pub mod config;
pub mod response;

pub use client::{ClassifierClient, ClassifyError};
pub use response::{ClassificationResponse, DecodeError};
