use snafu::Snafu;

use crate::settings::{MAX_PASSPHRASE_LEN, MAX_SSID_LEN};

/// Why a credential pair is unusable for a join attempt.
///
/// Raised by consumers of the store (construction and the pre-join check),
/// never by the accessors themselves. Display messages name the offending
/// field but never echo its value.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConfigError {
    #[snafu(display("wifi ssid is unset, edit the template placeholder before flashing"))]
    SsidPlaceholder,

    #[snafu(display("wifi ssid is empty"))]
    SsidEmpty,

    #[snafu(display("wifi ssid exceeds {MAX_SSID_LEN} bytes, got {len}"))]
    SsidTooLong { len: usize },

    #[snafu(display("wifi passphrase is unset, edit the template placeholder before flashing"))]
    PassphrasePlaceholder,

    #[snafu(display("wifi passphrase is empty"))]
    PassphraseEmpty,

    #[snafu(display("wifi passphrase exceeds {MAX_PASSPHRASE_LEN} bytes, got {len}"))]
    PassphraseTooLong { len: usize },
}
