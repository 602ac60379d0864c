//! Configuration type definitions

use heapless::String;

use crate::input::DEFAULT_SETTLE_MS;
use crate::traits::display::MAX_INTENSITY;

/// Maximum length of the advertised device name
pub const MAX_NAME_LEN: usize = 20;

/// Default advertised device name
pub const DEFAULT_DEVICE_NAME: &str = "Scoreline";

/// Default link baud rate
pub const DEFAULT_BAUDRATE: u32 = 9600;

/// Default display brightness
pub const DEFAULT_INTENSITY: u8 = 8;

/// Default buzzer pulse length
pub const DEFAULT_PULSE_MS: u32 = 100;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Device name is empty
    EmptyDeviceName,
    /// Baud rate is zero
    InvalidBaudrate,
    /// Intensity above the display maximum
    IntensityOutOfRange(u8),
    /// Debounce window is zero
    ZeroDebounce,
    /// Feedback pulse length is zero
    ZeroPulse,
}

/// Wireless link settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    /// Name the module advertises to phones
    pub device_name: String<MAX_NAME_LEN>,
    /// UART baud rate between the MCU and the module
    pub baudrate: u32,
}

impl Default for LinkConfig {
    fn default() -> Self {
        let mut device_name = String::new();
        let _ = device_name.push_str(DEFAULT_DEVICE_NAME);
        Self {
            device_name,
            baudrate: DEFAULT_BAUDRATE,
        }
    }
}

/// Display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Brightness, `0..=15`, applied once at startup
    pub intensity: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            intensity: DEFAULT_INTENSITY,
        }
    }
}

/// Button settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputConfig {
    /// Debounce settle window (ms)
    pub debounce_ms: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_SETTLE_MS,
        }
    }
}

/// Buzzer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FeedbackConfig {
    /// Pulse length (ms)
    pub pulse_ms: u32,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            pulse_ms: DEFAULT_PULSE_MS,
        }
    }
}

/// Complete scoreboard configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScoreboardConfig {
    pub link: LinkConfig,
    pub display: DisplayConfig,
    pub input: InputConfig,
    pub feedback: FeedbackConfig,
}

impl ScoreboardConfig {
    /// Check every field is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.link.device_name.is_empty() {
            return Err(ConfigError::EmptyDeviceName);
        }
        if self.link.baudrate == 0 {
            return Err(ConfigError::InvalidBaudrate);
        }
        if self.display.intensity > MAX_INTENSITY {
            return Err(ConfigError::IntensityOutOfRange(self.display.intensity));
        }
        if self.input.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        if self.feedback.pulse_ms == 0 {
            return Err(ConfigError::ZeroPulse);
        }
        Ok(())
    }
}
