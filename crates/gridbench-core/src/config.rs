use std::collections::HashMap;

/// Well-known property and environment keys read by the setup layer
pub mod keys {
    pub const SAUCE_USER_PROP: &str = "sauce.user";
    pub const SAUCE_USER_ENV: &str = "SAUCE_USERNAME";
    pub const SAUCE_ACCESS_KEY_PROP: &str = "sauce.sauceAccessKey";
    pub const SAUCE_ACCESS_KEY_ENV: &str = "SAUCE_ACCESS_KEY";
    pub const SAUCE_OPTIONS_PROP: &str = "sauce.options";
    pub const HUB_HOSTNAME_PROP: &str = "gridbench.hubHostname";
    pub const LOCAL_WEBDRIVER_PROP: &str = "gridbench.localWebDriver";
    pub const LOCAL_BROWSER_PROP: &str = "gridbench.localBrowser";
    pub const BROWSERS_ENV: &str = "GRIDBENCH_BROWSERS";
}

/// Read-only access to process-wide properties and environment variables.
///
/// Properties and the environment are independently queryable; resolution
/// code decides which one wins for each setting. Implementations must not
/// cache or mutate.
pub trait ConfigProvider {
    fn property(&self, key: &str) -> Option<String>;

    fn env(&self, key: &str) -> Option<String>;

    /// Property interpreted as a boolean flag; absent or anything other
    /// than "true" is false
    fn flag(&self, key: &str) -> bool {
        self.property(key)
            .is_some_and(|value| value.trim().eq_ignore_ascii_case("true"))
    }
}

/// Provider backed by the real process environment plus an explicit
/// property map, set once at construction and immutable for the run
#[derive(Debug, Default)]
pub struct ProcessConfig {
    properties: HashMap<String, String>,
}

impl ProcessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

impl ConfigProvider for ProcessConfig {
    fn property(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }

    fn env(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fully in-memory provider, for deterministic tests that must not depend
/// on the real process environment
#[derive(Debug, Default)]
pub struct StaticConfig {
    properties: HashMap<String, String>,
    env: HashMap<String, String>,
}

impl StaticConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }
}

impl ConfigProvider for StaticConfig {
    fn property(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }

    fn env(&self, key: &str) -> Option<String> {
        self.env.get(key).cloned()
    }
}
