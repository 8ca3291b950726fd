use crate::config::{keys, ConfigProvider};
use crate::{Browser, BrowserCapability, Result};

/// Parse a comma-separated browser-list encoding such as
/// `chrome-67,firefox` into capabilities, one per token, in token order.
///
/// Each token is `name` or `name-version`; the name is matched against
/// [`Browser`] case-insensitively, the version is attached verbatim after
/// trimming. An absent encoding yields a single Chrome entry.
pub fn parse_browser_list(encoded: Option<&str>) -> Result<Vec<BrowserCapability>> {
    let Some(encoded) = encoded else {
        return Ok(vec![BrowserCapability::new(Browser::Chrome)]);
    };

    let mut capabilities = Vec::new();
    for token in encoded.split(',') {
        let mut parts = token.splitn(2, '-');
        let browser = Browser::from_name(parts.next().unwrap_or_default())?;
        match parts.next() {
            Some(version) => {
                capabilities.push(BrowserCapability::with_version(browser, version.trim()))
            }
            None => capabilities.push(BrowserCapability::new(browser)),
        }
    }
    Ok(capabilities)
}

/// Browser list from the configured environment, or the single-Chrome
/// fallback when the variable is not set
pub fn capabilities_from_config(config: &dyn ConfigProvider) -> Result<Vec<BrowserCapability>> {
    let encoded = config.env(keys::BROWSERS_ENV);
    parse_browser_list(encoded.as_deref())
}

/// Capabilities for suites that declare no browser configuration at all.
///
/// Distinct from the absent-encoding fallback in [`parse_browser_list`]:
/// that one defaults to Chrome, this one to Firefox. Both defaults are
/// load-bearing for existing suites; do not unify them.
pub fn default_capabilities() -> Vec<BrowserCapability> {
    vec![BrowserCapability::new(Browser::Firefox)]
}
