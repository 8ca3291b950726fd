use std::fmt;

use crate::credentials::SauceCredentials;

const HUB_PORT: u16 = 4444;
const HUB_PATH: &str = "/wd/hub";
const SAUCE_TUNNEL_HOST: &str = "localhost";
const SAUCE_TUNNEL_PORT: u16 = 4445;

/// A remote grid endpoint, rendered as a single URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubAddress {
    scheme: &'static str,
    userinfo: Option<(String, String)>,
    host: String,
    port: u16,
    path: &'static str,
}

impl HubAddress {
    /// Build the hub address for the given credentials and hostname.
    ///
    /// With complete credentials the address embeds them and points at the
    /// local tunnel agent on port 4445, which proxies on to the cloud
    /// service; the passed hostname is ignored on that path. Without them,
    /// the plain grid at `hostname:4444`.
    pub fn build(credentials: Option<&SauceCredentials>, hostname: &str) -> Self {
        match credentials.and_then(SauceCredentials::as_pair) {
            Some((username, access_key)) => Self::for_tunnel(username, access_key),
            None => Self::for_hub(hostname),
        }
    }

    /// Address of the local tunnel agent, with credentials embedded
    pub fn for_tunnel(username: &str, access_key: &str) -> Self {
        Self {
            scheme: "http",
            userinfo: Some((username.to_string(), access_key.to_string())),
            host: SAUCE_TUNNEL_HOST.to_string(),
            port: SAUCE_TUNNEL_PORT,
            path: HUB_PATH,
        }
    }

    /// Address of a plain grid hub, no credentials
    pub fn for_hub(hostname: &str) -> Self {
        Self {
            scheme: "http",
            userinfo: None,
            host: hostname.to_string(),
            port: HUB_PORT,
            path: HUB_PATH,
        }
    }

    pub fn url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HubAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.userinfo {
            Some((username, access_key)) => write!(
                f,
                "{}://{}:{}@{}:{}{}",
                self.scheme, username, access_key, self.host, self.port, self.path
            ),
            None => write!(
                f,
                "{}://{}:{}{}",
                self.scheme, self.host, self.port, self.path
            ),
        }
    }
}
