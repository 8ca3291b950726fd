use gridbench_core::config::{keys, ConfigProvider};
use tracing::debug;

/// Resolve one credential field: the property value wins over the
/// environment variable. No format validation is applied.
pub fn resolve_credential(
    config: &dyn ConfigProvider,
    property_key: &str,
    env_key: &str,
) -> Option<String> {
    config.property(property_key).or_else(|| config.env(env_key))
}

/// Sauce Labs account credentials, each field resolved independently.
///
/// A field missing from the properties may still come from the environment
/// and vice versa, so the username and access key can come from different
/// sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SauceCredentials {
    pub username: Option<String>,
    pub access_key: Option<String>,
}

impl SauceCredentials {
    pub fn from_config(config: &dyn ConfigProvider) -> Self {
        let username = resolve_credential(config, keys::SAUCE_USER_PROP, keys::SAUCE_USER_ENV);
        let access_key = resolve_credential(
            config,
            keys::SAUCE_ACCESS_KEY_PROP,
            keys::SAUCE_ACCESS_KEY_ENV,
        );

        if username.is_none() {
            debug!(
                "A Sauce Labs user name can be given with the {} property or the {} environment variable",
                keys::SAUCE_USER_PROP,
                keys::SAUCE_USER_ENV
            );
        }
        if access_key.is_none() {
            debug!(
                "A Sauce Labs access key can be given with the {} property or the {} environment variable",
                keys::SAUCE_ACCESS_KEY_PROP,
                keys::SAUCE_ACCESS_KEY_ENV
            );
        }

        Self {
            username,
            access_key,
        }
    }

    /// Both fields, when both are present and non-empty
    pub fn as_pair(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.access_key.as_deref()) {
            (Some(user), Some(key)) if !user.is_empty() && !key.is_empty() => Some((user, key)),
            _ => None,
        }
    }

    /// Usable for the Sauce path only when both fields resolved
    pub fn is_complete(&self) -> bool {
        self.as_pair().is_some()
    }
}
