//! Identity provider configuration

use serde::Deserialize;

use super::app::Environment;
use super::error::ValidationError;

/// Identity provider connection settings.
///
/// Consumed by whichever gateway adapter the embedding wires in; the
/// session core itself never dials the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Provider API key
    pub api_key: String,

    /// Provider auth domain (e.g. "myapp.firebaseapp.com")
    pub auth_domain: String,

    /// Provider project identifier
    pub project_id: String,
}

impl ProviderConfig {
    /// Validate provider configuration
    ///
    /// In production, a local auth domain is rejected.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("PROVIDER_API_KEY"));
        }
        if self.auth_domain.is_empty() {
            return Err(ValidationError::MissingRequired("PROVIDER_AUTH_DOMAIN"));
        }
        if self.project_id.is_empty() {
            return Err(ValidationError::MissingRequired("PROVIDER_PROJECT_ID"));
        }

        if *environment == Environment::Production
            && (self.auth_domain.starts_with("localhost") || self.auth_domain.starts_with("127."))
        {
            return Err(ValidationError::LocalAuthDomainInProduction);
        }

        Ok(())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            auth_domain: String::new(),
            project_id: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ProviderConfig {
        ProviderConfig {
            api_key: "key-123".to_string(),
            auth_domain: "poker.firebaseapp.com".to_string(),
            project_id: "poker-app".to_string(),
        }
    }

    #[test]
    fn validation_rejects_missing_fields() {
        let config = ProviderConfig::default();
        assert!(config.validate(&Environment::Development).is_err());

        let config = ProviderConfig {
            api_key: "key".to_string(),
            ..Default::default()
        };
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn validation_accepts_complete_config() {
        assert!(valid().validate(&Environment::Production).is_ok());
    }

    #[test]
    fn validation_rejects_local_auth_domain_in_production() {
        let config = ProviderConfig {
            auth_domain: "localhost:9099".to_string(),
            ..valid()
        };
        // Allowed in development
        assert!(config.validate(&Environment::Development).is_ok());
        // Rejected in production
        assert!(config.validate(&Environment::Production).is_err());
    }
}
