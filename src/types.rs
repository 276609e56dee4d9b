use core::fmt;

use serde::Serialize;
use thiserror::Error;

/// Errors that occur while reading the config file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Error: Unable to open config file.")]
    Unavailable,
    #[error("Error: Invalid configuration format in the config file.")]
    Malformed,
}

/// Errors that occur while validating or applying a request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixError {
    #[error("Error: Monitor index out of range in the config file.")]
    IndexOutOfRange,
    #[error("Error: Invalid monitor index specified in the config file.")]
    AdapterNotFound,
    #[error("Error: Failed to change {monitor} resolution. {reason}")]
    ModeChangeFailed { monitor: MonitorIndex, reason: String },
}

/// Contains the resolution of a display
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Creates a new resolution
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RefreshRate(pub u32);

impl fmt::Display for RefreshRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}

/// A display mode: resolution plus refresh rate.
///
/// Two modes are equal only if width, height and refresh rate all match.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DisplayMode {
    pub resolution: Resolution,
    pub refresh_rate: RefreshRate,
}

impl DisplayMode {
    pub fn new(width: u32, height: u32, refresh_rate: u32) -> Self {
        Self {
            resolution: Resolution::new(width, height),
            refresh_rate: RefreshRate(refresh_rate),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.resolution, self.refresh_rate)
    }
}

/// 1-based monitor ordinal as read from the config file.
///
/// Not range checked on construction; see [`MonitorIndex::check_range`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MonitorIndex(pub i32);

impl MonitorIndex {
    /// Fails with [`FixError::IndexOutOfRange`] unless `1 <= index <= monitor_count`
    pub fn check_range(self, monitor_count: i32) -> Result<(), FixError> {
        if self.0 >= 1 && self.0 <= monitor_count {
            Ok(())
        } else {
            Err(FixError::IndexOutOfRange)
        }
    }

    /// Device path of the adapter, e.g. `\\.\DISPLAY2`
    pub fn adapter_name(self) -> String {
        format!("\\\\.\\DISPLAY{}", self.0)
    }
}

impl fmt::Display for MonitorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Monitor {}", self.0)
    }
}

/// One parsed config tuple
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayModeRequest {
    pub monitor: MonitorIndex,
    pub mode: DisplayMode,
}

impl DisplayModeRequest {
    pub fn new(monitor: i32, width: u32, height: u32, refresh_rate: u32) -> Self {
        Self {
            monitor: MonitorIndex(monitor),
            mode: DisplayMode::new(width, height, refresh_rate),
        }
    }
}

impl fmt::Display for DisplayModeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.monitor, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check_is_one_based_and_inclusive() {
        assert_eq!(MonitorIndex(0).check_range(2), Err(FixError::IndexOutOfRange));
        assert_eq!(MonitorIndex(-1).check_range(2), Err(FixError::IndexOutOfRange));
        assert_eq!(MonitorIndex(1).check_range(2), Ok(()));
        assert_eq!(MonitorIndex(2).check_range(2), Ok(()));
        assert_eq!(MonitorIndex(3).check_range(2), Err(FixError::IndexOutOfRange));
    }

    #[test]
    fn adapter_name_uses_device_path() {
        assert_eq!(MonitorIndex(2).adapter_name(), r"\\.\DISPLAY2");
    }

    #[test]
    fn mode_change_failure_message_names_monitor() {
        let err = FixError::ModeChangeFailed {
            monitor: MonitorIndex(1),
            reason: "The parameter is incorrect.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error: Failed to change Monitor 1 resolution. The parameter is incorrect."
        );
    }

    #[test]
    fn modes_differing_only_in_refresh_rate_are_not_equal() {
        assert_ne!(DisplayMode::new(1920, 1080, 60), DisplayMode::new(1920, 1080, 144));
        assert_eq!(DisplayMode::new(1920, 1080, 60).to_string(), "1920x1080 @ 60 Hz");
    }
}
