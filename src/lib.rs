//! WiFi credential provisioning.
//!
//! Holds the SSID/passphrase pair a network-join routine reads at startup.
//! Real values are injected from the build environment so they never land in
//! version control; the in-tree defaults are documented placeholders that
//! fail validation.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod credentials;
pub mod errors;
pub mod provision;
pub mod settings;

pub use credentials::Credentials;
pub use errors::ConfigError;
