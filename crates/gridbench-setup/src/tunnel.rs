use thiserror::Error;
use tracing::warn;

/// Failure reported by a tunnel identifier provider
#[derive(Error, Debug)]
#[error("Tunnel identifier lookup failed: {0}")]
pub struct TunnelError(pub String);

/// Optional companion capability that maps a Sauce options string to the
/// tunnel identifier of a running tunnel agent.
///
/// Providers are registered explicitly; the core never discovers them. A
/// suite without the companion dependency simply passes no provider.
pub trait TunnelIdProvider {
    fn tunnel_identifier(
        &self,
        sauce_options: &str,
    ) -> std::result::Result<Option<String>, TunnelError>;
}

/// Resolve the tunnel identifier for the given Sauce options.
///
/// Absent options mean no probing at all. A missing provider or a failing
/// lookup degrades to `None` with a warning; it never fails driver setup.
pub fn resolve_tunnel_id(
    provider: Option<&dyn TunnelIdProvider>,
    sauce_options: Option<&str>,
) -> Option<String> {
    let sauce_options = sauce_options?;

    let Some(provider) = provider else {
        warn!(
            "Sauce options are set, but no tunnel identifier provider is registered. \
             Are you missing the Sauce companion dependency?"
        );
        return None;
    };

    match provider.tunnel_identifier(sauce_options) {
        Ok(tunnel_id) => tunnel_id,
        Err(err) => {
            warn!("Sauce options are set, but {err}");
            None
        }
    }
}

/// Diagnostic emitted when Sauce mode is selected without the companion
/// provider. Never affects control flow.
pub fn warn_if_tunnel_provider_missing(provider: Option<&dyn TunnelIdProvider>) {
    if provider.is_none() {
        warn!(
            "Tests are configured for Sauce Labs, but the tunnel companion dependency \
             seems to be missing"
        );
    }
}
