// Static settings

// Template placeholders shipped in source control. Their presence at runtime
// marks an unconfigured device.
pub const PLACEHOLDER_SSID: &str = "ENTER_YOUR_SSID_HERE";
pub const PLACEHOLDER_PASSPHRASE: &str = "ENTER_YOUR_PASSWORD_HERE";

// 802.11 limits: SSIDs cap at 32 octets, WPA2 passphrases at 63.
pub const MAX_SSID_LEN: usize = 32;
pub const MAX_PASSPHRASE_LEN: usize = 63;
