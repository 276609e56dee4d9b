//! Decides which configured mode to apply and reports how the run ended.

use std::path::Path;

use crate::config::{read_config, Variant};
use crate::{apply_display_mode, ConfigError, DisplayApi, DisplayMode, DisplayModeRequest, FixError, LogFile};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every required mode change succeeded
    Applied,
    /// The config file could not be opened
    ConfigUnavailable,
    /// Something was logged as an error and the display may be unchanged
    NotApplied,
}

impl Outcome {
    /// Process exit code.
    ///
    /// Only a missing config file exits non-zero; every other failure exits 0.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::ConfigUnavailable => 1,
            Outcome::Applied | Outcome::NotApplied => 0,
        }
    }
}

/// Reads `config_path` and applies it, logging every step to `log`.
pub fn run(api: &impl DisplayApi, log: &LogFile, config_path: &Path, variant: Variant) -> Outcome {
    match read_config(config_path, variant) {
        Ok(requests) => fix(api, log, &requests),
        Err(err) => {
            log.error(&err.to_string());
            match err {
                ConfigError::Unavailable => Outcome::ConfigUnavailable,
                ConfigError::Malformed => Outcome::NotApplied,
            }
        }
    }
}

/// Applies parsed requests: one request is applied as is, two run the
/// toggle or the two-monitor sequence.
pub fn fix(api: &impl DisplayApi, log: &LogFile, requests: &[DisplayModeRequest]) -> Outcome {
    let monitor_count = api.monitor_count();
    log::debug!("{} monitor(s) attached", monitor_count);

    let in_range = requests
        .iter()
        .all(|request| request.monitor.check_range(monitor_count).is_ok());
    if !in_range {
        log.error(&FixError::IndexOutOfRange.to_string());
        return Outcome::NotApplied;
    }

    let applied = match requests {
        [single] => apply_display_mode(api, log, single).is_ok(),
        [first, second] if first.monitor == second.monitor => {
            let target = toggle_target(api.current_mode(), first, second);
            apply_display_mode(api, log, target).is_ok()
        }
        [first, second] => {
            apply_display_mode(api, log, first).is_ok() && apply_display_mode(api, log, second).is_ok()
        }
        _ => false,
    };

    if applied {
        Outcome::Applied
    } else {
        Outcome::NotApplied
    }
}

/// Picks the request to apply when both target the same monitor.
///
/// The monitor is assumed to alternate between the two modes: switch to the
/// one that is not active, or to `first` if neither is.
pub fn toggle_target<'a>(
    current: Option<DisplayMode>,
    first: &'a DisplayModeRequest,
    second: &'a DisplayModeRequest,
) -> &'a DisplayModeRequest {
    match current {
        Some(mode) if mode == first.mode => {
            log::debug!("{} is active, switching to {}", mode, second.mode);
            second
        }
        Some(mode) if mode == second.mode => {
            log::debug!("{} is active, switching to {}", mode, first.mode);
            first
        }
        Some(mode) => {
            log::debug!("{} is not configured, falling back to {}", mode, first.mode);
            first
        }
        None => first,
    }
}
