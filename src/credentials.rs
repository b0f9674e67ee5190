use heapless::String;
use snafu::ensure;
use subtle::ConstantTimeEq;

use crate::errors::{
    ConfigError, PassphraseEmptySnafu, PassphrasePlaceholderSnafu, PassphraseTooLongSnafu,
    SsidEmptySnafu, SsidPlaceholderSnafu, SsidTooLongSnafu,
};
use crate::settings::{
    MAX_PASSPHRASE_LEN, MAX_SSID_LEN, PLACEHOLDER_PASSPHRASE, PLACEHOLDER_SSID,
};

/// WPA2 passphrase.
///
/// Kept behind a newtype so the secret can only leave through [`Credentials`]
/// accessors: equality is constant-time and the `Debug` output is redacted.
#[derive(Clone)]
pub struct Passphrase(String<MAX_PASSPHRASE_LEN>);

impl Passphrase {
    fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for Passphrase {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }
}

impl Eq for Passphrase {}

impl core::fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Passphrase").finish_non_exhaustive()
    }
}

/// The credential pair a join routine reads at startup.
///
/// Immutable after construction, so concurrent readers need no locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// WiFi SSID
    ssid: String<MAX_SSID_LEN>,
    /// WPA2 passphrase
    passphrase: Passphrase,
}

impl Credentials {
    /// Builds the pair, rejecting values that exceed the 802.11 limits.
    ///
    /// Placeholder or empty values are accepted here; [`Credentials::validate`]
    /// classifies those before any join attempt.
    pub fn new(ssid: &str, passphrase: &str) -> Result<Self, ConfigError> {
        let ssid: String<MAX_SSID_LEN> = ssid
            .try_into()
            .map_err(|_| SsidTooLongSnafu { len: ssid.len() }.build())?;
        let passphrase: String<MAX_PASSPHRASE_LEN> = passphrase
            .try_into()
            .map_err(|_| PassphraseTooLongSnafu { len: passphrase.len() }.build())?;
        Ok(Self { ssid, passphrase: Passphrase(passphrase) })
    }

    /// Network name presented to the access point during association.
    pub fn ssid(&self) -> &str {
        self.ssid.as_str()
    }

    /// Shared passphrase authenticating to that network.
    pub fn passphrase(&self) -> &str {
        self.passphrase.as_str()
    }

    /// The pre-join check consumers must run before association.
    ///
    /// An unedited template or an empty value means the device is not
    /// configured; attempting association with it would only fail downstream,
    /// so callers refuse and surface the error instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure!(!self.ssid.is_empty(), SsidEmptySnafu);
        ensure!(self.ssid.as_str() != PLACEHOLDER_SSID, SsidPlaceholderSnafu);
        ensure!(!self.passphrase.as_str().is_empty(), PassphraseEmptySnafu);
        ensure!(
            self.passphrase.as_str() != PLACEHOLDER_PASSPHRASE,
            PassphrasePlaceholderSnafu
        );
        Ok(())
    }
}

#[cfg(test)]
mod credential_tests {
    use super::*;

    #[test]
    fn accessors_return_configured_values_unmodified() {
        let creds = Credentials::new("HomeNet", "correcthorse").expect("fits capacity");
        assert_eq!(creds.ssid(), "HomeNet");
        assert_eq!(creds.passphrase(), "correcthorse");
        creds.validate().expect("real values pass the pre-join check");
    }

    #[test]
    fn repeated_reads_return_identical_text() {
        let creds = Credentials::new("HomeNet", "correcthorse").expect("fits capacity");
        assert_eq!(creds.ssid(), creds.ssid());
        assert_eq!(creds.passphrase().as_bytes(), creds.passphrase().as_bytes());
    }

    #[test]
    fn placeholder_ssid_fails_the_pre_join_check() {
        let creds =
            Credentials::new(PLACEHOLDER_SSID, "correcthorse").expect("fits capacity");
        assert_eq!(creds.validate(), Err(ConfigError::SsidPlaceholder));
    }

    #[test]
    fn placeholder_passphrase_fails_the_pre_join_check() {
        let creds =
            Credentials::new("HomeNet", PLACEHOLDER_PASSPHRASE).expect("fits capacity");
        assert_eq!(creds.validate(), Err(ConfigError::PassphrasePlaceholder));
    }

    #[test]
    fn empty_ssid_fails_the_pre_join_check() {
        let creds = Credentials::new("", "correcthorse").expect("fits capacity");
        assert_eq!(creds.validate(), Err(ConfigError::SsidEmpty));
    }

    #[test]
    fn empty_passphrase_fails_the_pre_join_check() {
        let creds = Credentials::new("HomeNet", "").expect("fits capacity");
        assert_eq!(creds.validate(), Err(ConfigError::PassphraseEmpty));
    }

    #[test]
    fn oversize_ssid_is_rejected_at_construction() {
        let long = "x".repeat(MAX_SSID_LEN + 1);
        assert_eq!(
            Credentials::new(&long, "correcthorse"),
            Err(ConfigError::SsidTooLong { len: MAX_SSID_LEN + 1 })
        );
    }

    #[test]
    fn oversize_passphrase_is_rejected_at_construction() {
        let long = "x".repeat(MAX_PASSPHRASE_LEN + 1);
        assert_eq!(
            Credentials::new("HomeNet", &long),
            Err(ConfigError::PassphraseTooLong { len: MAX_PASSPHRASE_LEN + 1 })
        );
    }

    #[test]
    fn debug_output_never_contains_the_passphrase() {
        let creds = Credentials::new("HomeNet", "correcthorse").expect("fits capacity");
        let out = format!("{creds:?}");
        assert!(out.contains("HomeNet"));
        assert!(!out.contains("correcthorse"));
    }

    #[test]
    fn passphrase_equality_is_by_value() {
        let a = Credentials::new("HomeNet", "correcthorse").expect("fits capacity");
        let b = Credentials::new("HomeNet", "correcthorse").expect("fits capacity");
        let c = Credentials::new("HomeNet", "battery-staple").expect("fits capacity");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
