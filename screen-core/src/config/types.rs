//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::clock::rollover_ms;
use crate::controller::EndswitchPolicy;
use crate::infrared::{InfraredTiming, PreambleCheck};

/// Travel limits in encoder ticks relative to home (0)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TravelLimits {
    /// Upper stop; reaching it without the endswitch is a switch fault
    pub up_stop: i16,
    /// Lower stop; fully unrolled
    pub down_stop: i16,
}

impl Default for TravelLimits {
    fn default() -> Self {
        Self {
            up_stop: -4,
            down_stop: 258,
        }
    }
}

/// Time windows in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TimingConfig {
    /// Maximum time between encoder ticks while moving
    pub rotation_timeout_ms: u16,
    /// How long Up/Down jog the screen after On/Off was pressed
    pub extra_buttons_ms: u16,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            rotation_timeout_ms: 1000,
            extra_buttons_ms: 4000,
        }
    }
}

/// Infrared receiver settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct InfraredConfig {
    /// Line sampling period
    pub sample_period_us: u32,
    /// High phase longer than this is a 1 bit
    pub bit_threshold_us: u32,
    /// High phase this long ends the transmission
    pub end_of_signal_us: u32,
    /// Preamble matching
    pub preamble: PreambleCheck,
}

impl Default for InfraredConfig {
    fn default() -> Self {
        Self {
            sample_period_us: 2,
            bit_threshold_us: 1016,
            end_of_signal_us: 12_000,
            preamble: PreambleCheck::Strict,
        }
    }
}

impl InfraredConfig {
    /// Sample-count timing for the receiver
    pub fn timing(&self) -> InfraredTiming {
        InfraredTiming::from_micros(
            self.sample_period_us,
            self.bit_threshold_us,
            self.end_of_signal_us,
        )
    }
}

/// Endswitch handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct EndswitchConfig {
    /// How an assertion updates the position model
    pub policy: EndswitchPolicy,
}

/// Complete screen configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ScreenConfig {
    pub travel: TravelLimits,
    pub timing: TimingConfig,
    pub infrared: InfraredConfig,
    pub endswitch: EndswitchConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `up_stop` is not below `down_stop`
    InvertedLimits,
    /// A time window is zero
    ZeroWindow,
    /// A time window does not fit in one counter rollover period
    WindowExceedsRollover { window_ms: u16, rollover_ms: u32 },
    /// Infrared sample period is zero
    ZeroSamplePeriod,
    /// Bit threshold is not below the end-of-signal threshold
    BitThresholdTooLong,
    /// Sample period too coarse to tell a 0 bit from a 1 bit or from the
    /// end of the transmission
    SamplePeriodTooLong { sample_period_us: u32 },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvertedLimits => write!(f, "up_stop must be below down_stop"),
            ConfigError::ZeroWindow => write!(f, "time windows must be non-zero"),
            ConfigError::WindowExceedsRollover {
                window_ms,
                rollover_ms,
            } => write!(
                f,
                "{} ms window is not shorter than the {} ms counter rollover",
                window_ms, rollover_ms
            ),
            ConfigError::ZeroSamplePeriod => write!(f, "infrared sample period must be non-zero"),
            ConfigError::BitThresholdTooLong => {
                write!(f, "infrared bit threshold must be below end of signal")
            }
            ConfigError::SamplePeriodTooLong { sample_period_us } => write!(
                f,
                "{} us infrared sample period leaves no sample between the thresholds",
                sample_period_us
            ),
        }
    }
}

impl ScreenConfig {
    /// Check the configuration against a counter running at `ticks_per_second`
    pub fn validate(&self, ticks_per_second: u32) -> Result<(), ConfigError> {
        if self.travel.up_stop >= self.travel.down_stop {
            return Err(ConfigError::InvertedLimits);
        }

        let rollover = rollover_ms(ticks_per_second);
        for window_ms in [self.timing.rotation_timeout_ms, self.timing.extra_buttons_ms] {
            if window_ms == 0 {
                return Err(ConfigError::ZeroWindow);
            }
            if window_ms as u32 >= rollover {
                return Err(ConfigError::WindowExceedsRollover {
                    window_ms,
                    rollover_ms: rollover,
                });
            }
        }

        if self.infrared.sample_period_us == 0 {
            return Err(ConfigError::ZeroSamplePeriod);
        }
        if self.infrared.bit_threshold_us >= self.infrared.end_of_signal_us {
            return Err(ConfigError::BitThresholdTooLong);
        }
        // The receiver works in sample counts, not microseconds
        let timing = self.infrared.timing();
        if timing.bit_threshold == 0 || timing.end_of_signal <= timing.bit_threshold {
            return Err(ConfigError::SamplePeriodTooLong {
                sample_period_us: self.infrared.sample_period_us,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TPS: u32 = 7812;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(ScreenConfig::default().validate(TPS), Ok(()));
    }

    #[test]
    fn test_inverted_limits() {
        let mut config = ScreenConfig::default();
        config.travel.up_stop = 300;
        assert_eq!(config.validate(TPS), Err(ConfigError::InvertedLimits));
    }

    #[test]
    fn test_window_must_fit_rollover() {
        let mut config = ScreenConfig::default();
        config.timing.extra_buttons_ms = 9000;
        assert_eq!(
            config.validate(TPS),
            Err(ConfigError::WindowExceedsRollover {
                window_ms: 9000,
                rollover_ms: 8389
            })
        );

        config.timing.extra_buttons_ms = 0;
        assert_eq!(config.validate(TPS), Err(ConfigError::ZeroWindow));
    }

    #[test]
    fn test_infrared_thresholds() {
        let mut config = ScreenConfig::default();
        config.infrared.bit_threshold_us = 12_000;
        assert_eq!(config.validate(TPS), Err(ConfigError::BitThresholdTooLong));

        let mut config = ScreenConfig::default();
        config.infrared.sample_period_us = 0;
        assert_eq!(config.validate(TPS), Err(ConfigError::ZeroSamplePeriod));
    }

    #[test]
    fn test_sample_period_must_resolve_thresholds() {
        // Longer than both thresholds: every count truncates to 0
        let mut config = ScreenConfig::default();
        config.infrared.sample_period_us = 13_000;
        assert_eq!(
            config.validate(TPS),
            Err(ConfigError::SamplePeriodTooLong {
                sample_period_us: 13_000
            })
        );

        // Longer than the bit threshold only
        config.infrared.sample_period_us = 2000;
        assert_eq!(config.infrared.timing().bit_threshold, 0);
        assert_eq!(
            config.validate(TPS),
            Err(ConfigError::SamplePeriodTooLong {
                sample_period_us: 2000
            })
        );

        // Thresholds that differ in µs but collapse to the same count
        config.infrared.sample_period_us = 1000;
        config.infrared.bit_threshold_us = 1016;
        config.infrared.end_of_signal_us = 1999;
        assert_eq!(config.infrared.timing().bit_threshold, 1);
        assert_eq!(config.infrared.timing().end_of_signal, 1);
        assert!(config.validate(TPS).is_err());

        config.infrared.sample_period_us = 500;
        assert_eq!(config.validate(TPS), Ok(()));
    }
}
