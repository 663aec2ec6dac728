//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_repository(config)?;
    validate_parser(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_repository(config: &Config) -> Result<()> {
    for (field, value) in [
        ("repository.owner", &config.repository.owner),
        ("repository.repo", &config.repository.repo),
    ] {
        if value.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                message: "cannot be empty".to_string(),
            }
            .into());
        }

        if value.contains('/') {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                message: "must not contain '/'".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_parser(config: &Config) -> Result<()> {
    for (i, slug) in config.parser.follow_repos.iter().enumerate() {
        let well_formed = slug
            .split_once('/')
            .is_some_and(|(owner, repo)| is_word(owner) && is_word(repo));

        if !well_formed {
            return Err(ConfigError::InvalidValue {
                field: format!("parser.follow_repos[{}]", i),
                message: format!("'{}' is not of the form owner/repo", slug),
            }
            .into());
        }
    }

    Ok(())
}

/// Backport references only match word characters on either side of the slash
fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
