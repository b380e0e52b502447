//! Compiled-in configuration
//!
//! `build.rs` validates `hub.toml` and serializes it with postcard. The blob
//! is decoded once at boot.

use defmt::*;

use smarthub_core::config::HubConfig;

/// Postcard-encoded `hub.toml`
static EMBEDDED_CONFIG: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/hub.bin"));

/// Decode the embedded configuration, falling back to defaults
pub fn load() -> HubConfig {
    match HubConfig::from_bytes(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Loaded hub.toml ({} bytes): sampling every {} ms",
                EMBEDDED_CONFIG.len(),
                config.sampling.interval_ms
            );
            config
        }
        Err(e) => {
            // build.rs rejects invalid files, so this means a stale blob
            warn!("Embedded config rejected ({:?}), using defaults", e);
            HubConfig::default()
        }
    }
}
