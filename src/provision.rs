use log::{debug, error};
use static_cell::StaticCell;

use crate::credentials::Credentials;
use crate::errors::ConfigError;
use crate::settings::{PLACEHOLDER_PASSPHRASE, PLACEHOLDER_SSID};

/// Credentials baked into the binary at build time.
///
/// Set `WIFI_SSID` and `WIFI_PASSPHRASE` in the build environment to replace
/// the in-tree template placeholders. Keeping real values out of the source
/// tree means nothing sensitive is ever committed.
pub fn baked_in() -> Result<Credentials, ConfigError> {
    let ssid = option_env!("WIFI_SSID").unwrap_or(PLACEHOLDER_SSID);
    let passphrase = option_env!("WIFI_PASSPHRASE").unwrap_or(PLACEHOLDER_PASSPHRASE);
    Credentials::new(ssid, passphrase)
}

static STORE: StaticCell<Credentials> = StaticCell::new();

/// Validates the baked-in pair and pins it for the lifetime of the process.
///
/// Call once at startup, before bringing the radio up. Refuses to hand out
/// credentials that a join attempt could only fail with; the logged
/// diagnostic names the offending field, never its value.
pub fn init() -> Result<&'static Credentials, ConfigError> {
    let creds = baked_in()?;
    if let Err(e) = creds.validate() {
        error!("refusing wifi join: {e}");
        return Err(e);
    }
    debug!("wifi credentials provisioned");
    Ok(STORE.init(creds))
}
