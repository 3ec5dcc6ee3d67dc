//! Runtime configuration
//!
//! Loaded from environment variables prefixed with `MEMBER_SERVICE`, using `__` to separate
//! nested keys. A `.env` file is read first when present.
//!
//! - `MEMBER_SERVICE__REGISTRATION_EMAIL__SUBJECT=...` -> `registration_email.subject`
//! - `MEMBER_SERVICE__REGISTRATION_EMAIL__BODY=...` -> `registration_email.body`

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration loading failed: {0}")]
    Load(#[from] config::ConfigError),

    #[error("required configuration missing: {0}")]
    MissingRequired(&'static str),
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MemberConfig {
    #[serde(default)]
    pub registration_email: RegistrationEmailConfig,
}

/// Message sent to a member right after registration
#[derive(Clone, Debug, Deserialize)]
pub struct RegistrationEmailConfig {
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_body")]
    pub body: String,
}

impl Default for RegistrationEmailConfig {
    fn default() -> Self {
        Self {
            subject: default_subject(),
            body: default_body(),
        }
    }
}

fn default_subject() -> String {
    "Please complete your registration".to_string()
}

fn default_body() -> String {
    "Click the link below to complete your registration.".to_string()
}

impl MemberConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config: Self = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MEMBER_SERVICE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.registration_email.subject.trim().is_empty() {
            return Err(ConfigError::MissingRequired("registration_email.subject"));
        }
        if self.registration_email.body.trim().is_empty() {
            return Err(ConfigError::MissingRequired("registration_email.body"));
        }
        Ok(())
    }
}
