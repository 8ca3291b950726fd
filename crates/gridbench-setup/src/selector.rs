use gridbench_core::config::{keys, ConfigProvider};
use gridbench_core::Browser;
use serde::Serialize;
use tracing::info;

use crate::credentials::SauceCredentials;
use crate::hub::HubAddress;
use crate::tunnel::{resolve_tunnel_id, warn_if_tunnel_provider_missing, TunnelIdProvider};
use crate::{Error, Result};

/// Browser used when no placement configuration matches at all
const FALLBACK_BROWSER: Browser = Browser::Chrome;

/// Explicit local-run declaration for a single test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalOverride {
    pub browser: Browser,
    pub version: Option<String>,
}

/// Per-test placement overrides.
///
/// Computed once by the suite's discovery step from the test's static
/// configuration and passed in as plain data; the resolver itself performs
/// no discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestOverrides {
    /// Declared local browser and version; beats every other source
    pub run_locally: Option<LocalOverride>,
    /// Hub hostname declared on the test
    pub run_on_hub: Option<String>,
    /// Class-level local-run marker, set even when no browser is declared
    pub local_marker: bool,
}

impl TestOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run_locally(mut self, browser: Browser, version: Option<&str>) -> Self {
        self.run_locally = Some(LocalOverride {
            browser,
            version: version.map(str::to_string),
        });
        self.local_marker = true;
        self
    }

    pub fn run_on_hub(mut self, hostname: impl Into<String>) -> Self {
        self.run_on_hub = Some(hostname.into());
        self
    }

    pub fn with_local_marker(mut self) -> Self {
        self.local_marker = true;
        self
    }
}

/// Where the browser session for one test instance will be launched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DriverTarget {
    Local {
        browser: Browser,
        version: Option<String>,
    },
    RemoteHub {
        url: String,
    },
    FallbackLocal {
        browser: Browser,
    },
}

/// Resolves the driver target for one test instance at setup time.
///
/// Five mutually exclusive branches, evaluated in priority order with the
/// first match winning: explicit local override, the global local-webdriver
/// flag, Sauce credentials, a configured hub, then the local fallback.
/// Resolution is a pure function of the config provider and the overrides,
/// so identical inputs always yield the same target.
pub struct DriverTargetSelector<'a> {
    config: &'a dyn ConfigProvider,
    tunnel_provider: Option<&'a dyn TunnelIdProvider>,
}

impl<'a> DriverTargetSelector<'a> {
    pub fn new(config: &'a dyn ConfigProvider) -> Self {
        Self {
            config,
            tunnel_provider: None,
        }
    }

    /// Register the optional tunnel companion capability
    pub fn with_tunnel_provider(mut self, provider: &'a dyn TunnelIdProvider) -> Self {
        self.tunnel_provider = Some(provider);
        self
    }

    pub fn select(&self, overrides: &TestOverrides) -> Result<DriverTarget> {
        // An explicit local override always wins
        if let Some(local) = &overrides.run_locally {
            return Ok(DriverTarget::Local {
                browser: local.browser,
                version: local.version.clone(),
            });
        }

        if self.config.flag(keys::LOCAL_WEBDRIVER_PROP) {
            return Ok(DriverTarget::Local {
                browser: self.default_local_browser()?,
                version: None,
            });
        }

        let credentials = SauceCredentials::from_config(self.config);
        if let Some((username, access_key)) = credentials.as_pair() {
            warn_if_tunnel_provider_missing(self.tunnel_provider);
            return Ok(DriverTarget::RemoteHub {
                url: HubAddress::for_tunnel(username, access_key).url(),
            });
        }

        if overrides.run_on_hub.is_some()
            || self.config.property(keys::HUB_HOSTNAME_PROP).is_some()
        {
            let hostname = self.hub_hostname(overrides)?;
            return Ok(DriverTarget::RemoteHub {
                url: HubAddress::for_hub(&hostname).url(),
            });
        }

        info!(
            "Did not find a configuration to run locally, on Sauce Labs or on another \
             test grid; falling back to a local {} session",
            FALLBACK_BROWSER
        );
        Ok(DriverTarget::FallbackLocal {
            browser: FALLBACK_BROWSER,
        })
    }

    /// Hostname of the hub the test will run on.
    ///
    /// Three-level precedence: the hub-hostname property, then `localhost`
    /// when a class-level local marker is set without an explicit local
    /// override, then the hub declared on the test itself. No source at all
    /// is a configuration error, never an empty host.
    pub fn hub_hostname(&self, overrides: &TestOverrides) -> Result<String> {
        if let Some(hostname) = self.config.property(keys::HUB_HOSTNAME_PROP) {
            return Ok(hostname);
        }

        if overrides.run_locally.is_none() && overrides.local_marker {
            return Ok("localhost".to_string());
        }

        if let Some(hostname) = &overrides.run_on_hub {
            return Ok(hostname.clone());
        }

        Err(Error::Configuration(format!(
            "no hub hostname configured: set the {} property or declare a hub for the test",
            keys::HUB_HOSTNAME_PROP
        )))
    }

    /// Tunnel identifier for the configured Sauce options, if any.
    ///
    /// Consumed by the fan-out layer when decorating session capabilities;
    /// absence of the companion provider is never fatal.
    pub fn tunnel_id(&self) -> Option<String> {
        let sauce_options = self.config.property(keys::SAUCE_OPTIONS_PROP);
        resolve_tunnel_id(self.tunnel_provider, sauce_options.as_deref())
    }

    fn default_local_browser(&self) -> Result<Browser> {
        match self.config.property(keys::LOCAL_BROWSER_PROP) {
            Some(name) => Ok(Browser::from_name(&name)?),
            None => Ok(Browser::Chrome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridbench_core::StaticConfig;

    #[test]
    fn test_local_override_beats_sauce_and_hub() {
        let config = StaticConfig::new()
            .with_property("sauce.user", "u")
            .with_property("sauce.sauceAccessKey", "k")
            .with_property("gridbench.hubHostname", "grid.example.com");
        let overrides = TestOverrides::new()
            .run_locally(Browser::Safari, Some("11"))
            .run_on_hub("other.example.com");

        let target = DriverTargetSelector::new(&config).select(&overrides).unwrap();

        assert_eq!(
            target,
            DriverTarget::Local {
                browser: Browser::Safari,
                version: Some("11".to_string()),
            }
        );
    }

    #[test]
    fn test_local_webdriver_flag_uses_default_local_browser() {
        let config = StaticConfig::new().with_property("gridbench.localWebDriver", "true");

        let target = DriverTargetSelector::new(&config)
            .select(&TestOverrides::new())
            .unwrap();

        assert_eq!(
            target,
            DriverTarget::Local {
                browser: Browser::Chrome,
                version: None,
            }
        );
    }

    #[test]
    fn test_local_webdriver_flag_honors_configured_browser() {
        let config = StaticConfig::new()
            .with_property("gridbench.localWebDriver", "true")
            .with_property("gridbench.localBrowser", "firefox");

        let target = DriverTargetSelector::new(&config)
            .select(&TestOverrides::new())
            .unwrap();

        assert_eq!(
            target,
            DriverTarget::Local {
                browser: Browser::Firefox,
                version: None,
            }
        );
    }

    #[test]
    fn test_sauce_branch_ignores_hostname_sources() {
        // Credentials pin the tunnel address regardless of any hostname input
        let config = StaticConfig::new()
            .with_property("sauce.user", "u")
            .with_property("sauce.sauceAccessKey", "k")
            .with_property("gridbench.hubHostname", "grid.example.com");

        let target = DriverTargetSelector::new(&config)
            .select(&TestOverrides::new())
            .unwrap();

        assert_eq!(
            target,
            DriverTarget::RemoteHub {
                url: "http://u:k@localhost:4445/wd/hub".to_string(),
            }
        );
    }

    #[test]
    fn test_sauce_branch_without_any_hostname_source() {
        let config = StaticConfig::new()
            .with_env("SAUCE_USERNAME", "u")
            .with_env("SAUCE_ACCESS_KEY", "k");

        let target = DriverTargetSelector::new(&config)
            .select(&TestOverrides::new())
            .unwrap();

        assert_eq!(
            target,
            DriverTarget::RemoteHub {
                url: "http://u:k@localhost:4445/wd/hub".to_string(),
            }
        );
    }

    #[test]
    fn test_partial_credentials_fall_through_to_hub() {
        let config = StaticConfig::new()
            .with_property("sauce.user", "u")
            .with_property("gridbench.hubHostname", "grid.example.com");

        let target = DriverTargetSelector::new(&config)
            .select(&TestOverrides::new())
            .unwrap();

        assert_eq!(
            target,
            DriverTarget::RemoteHub {
                url: "http://grid.example.com:4444/wd/hub".to_string(),
            }
        );
    }

    #[test]
    fn test_hub_property_wins_over_test_declaration() {
        let config = StaticConfig::new().with_property("gridbench.hubHostname", "grid.example.com");
        let overrides = TestOverrides::new().run_on_hub("declared.example.com");

        let target = DriverTargetSelector::new(&config).select(&overrides).unwrap();

        assert_eq!(
            target,
            DriverTarget::RemoteHub {
                url: "http://grid.example.com:4444/wd/hub".to_string(),
            }
        );
    }

    #[test]
    fn test_declared_hub_used_when_no_property() {
        let config = StaticConfig::new();
        let overrides = TestOverrides::new().run_on_hub("declared.example.com");

        let target = DriverTargetSelector::new(&config).select(&overrides).unwrap();

        assert_eq!(
            target,
            DriverTarget::RemoteHub {
                url: "http://declared.example.com:4444/wd/hub".to_string(),
            }
        );
    }

    #[test]
    fn test_local_marker_resolves_hostname_to_localhost() {
        let config = StaticConfig::new();
        let overrides = TestOverrides::new()
            .with_local_marker()
            .run_on_hub("declared.example.com");

        let hostname = DriverTargetSelector::new(&config)
            .hub_hostname(&overrides)
            .unwrap();

        assert_eq!(hostname, "localhost");
    }

    #[test]
    fn test_no_hostname_source_is_a_configuration_error() {
        let config = StaticConfig::new();

        let err = DriverTargetSelector::new(&config)
            .hub_hostname(&TestOverrides::new())
            .unwrap_err();

        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("gridbench.hubHostname"));
    }

    #[test]
    fn test_nothing_configured_falls_back_to_local_chrome() {
        let config = StaticConfig::new();

        let target = DriverTargetSelector::new(&config)
            .select(&TestOverrides::new())
            .unwrap();

        assert_eq!(
            target,
            DriverTarget::FallbackLocal {
                browser: Browser::Chrome,
            }
        );
    }

    #[test]
    fn test_selection_is_deterministic() {
        let config = StaticConfig::new().with_property("gridbench.hubHostname", "grid.example.com");
        let overrides = TestOverrides::new();
        let selector = DriverTargetSelector::new(&config);

        let first = selector.select(&overrides).unwrap();
        let second = selector.select(&overrides).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_target_serializes_with_kind_tag() {
        let target = DriverTarget::RemoteHub {
            url: "http://grid.example.com:4444/wd/hub".to_string(),
        };

        let json = serde_json::to_value(&target).unwrap();

        assert_eq!(json["kind"], "remote_hub");
        assert_eq!(json["url"], "http://grid.example.com:4444/wd/hub");
    }
}
