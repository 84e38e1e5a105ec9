//! Configuration loading
//!
//! `screen.toml` is compiled into the firmware and already checked by
//! build.rs, so the fallback below only triggers if the two parsers
//! ever disagree.

use defmt::*;
use screen_core::config::{parse_config, ScreenConfig};
use screen_hal::TickCounter;
use screen_hal_rp2040::EmbassyTicks;

/// Embedded configuration (compiled into firmware)
/// Edit screen.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../screen.toml");

/// Parse and validate the embedded configuration
///
/// Falls back to the built-in defaults on any error.
pub fn load() -> ScreenConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            error!("screen.toml: {}, using defaults", e);
            return ScreenConfig::default();
        }
    };

    if let Err(e) = config.validate(EmbassyTicks::TICKS_PER_SECOND) {
        error!("screen.toml: {}, using defaults", e);
        return ScreenConfig::default();
    }

    info!(
        "Config: travel {}..{}, timeout {} ms, window {} ms",
        config.travel.up_stop,
        config.travel.down_stop,
        config.timing.rotation_timeout_ms,
        config.timing.extra_buttons_ms
    );
    debug!("Config: {}", config);
    config
}
