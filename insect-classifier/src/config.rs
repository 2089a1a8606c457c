use std::collections::HashMap;

use anyhow::Context;
use config::{Environment, File, FileFormat, builder::DefaultState};
use dotenvy::vars;

pub struct ClassifierConfig {
    /// Identification endpoint of the external insect-identification service.
    pub classifier_url: String,
    pub classifier_api_key: String,
}

pub fn parse_config() -> anyhow::Result<ClassifierConfig> {
    let dotenv_variables = HashMap::from_iter(vars());

    let config = config::ConfigBuilder::<DefaultState>::default()
        .add_source(Environment::default().prefix("AGRI"))
        .add_source(Environment::default().source(Some(dotenv_variables)))
        .add_source(File::new("config.toml", FileFormat::Toml).required(false))
        .build()
        .context("Failed to build configuration")?;

    let classifier_url = config
        .get_string("classifier_url")
        .context("You should define the CLASSIFIER_URL.")?;

    let classifier_api_key = config
        .get_string("classifier_api_key")
        .context("You should define the CLASSIFIER_API_KEY.")?;

    let config = ClassifierConfig {
        classifier_url,
        classifier_api_key,
    };

    Ok(config)
}
