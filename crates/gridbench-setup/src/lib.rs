pub mod credentials;
pub mod error;
pub mod hub;
pub mod launcher;
pub mod selector;
pub mod tunnel;

pub use credentials::SauceCredentials;
pub use error::{Error, Result};
pub use hub::HubAddress;
pub use launcher::DriverLauncher;
pub use selector::{DriverTarget, DriverTargetSelector, LocalOverride, TestOverrides};
pub use tunnel::{resolve_tunnel_id, TunnelError, TunnelIdProvider};
