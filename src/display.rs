use serde::Serialize;

use crate::{DisplayMode, DisplayModeRequest, FixError, LogFile, MonitorIndex};

/// The display operations of the host OS that the fixer relies on.
pub trait DisplayApi {
    /// Number of attached monitors
    fn monitor_count(&self) -> i32;

    /// Whether the OS can enumerate an adapter for the 1-based `index`
    fn adapter_exists(&self, index: MonitorIndex) -> bool;

    /// Active mode of the default display, `None` if it cannot be read
    fn current_mode(&self) -> Option<DisplayMode>;

    /// Applies `mode` to `adapter_name` and persists it to the registry.
    /// On rejection, returns the OS return code as text.
    fn change_mode(&self, adapter_name: &str, mode: DisplayMode) -> Result<(), String>;

    /// Text for the last platform error, empty if it cannot be formatted
    fn last_error_message(&self) -> String;
}

/// Snapshot printed by `--status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayStatus {
    pub monitor_count: i32,
    pub current_mode: Option<DisplayMode>,
}

impl DisplayStatus {
    pub fn query(api: &impl DisplayApi) -> Self {
        Self {
            monitor_count: api.monitor_count(),
            current_mode: api.current_mode(),
        }
    }
}

/// Applies one request and writes the result to `log`.
///
/// The adapter must be enumerable; the index range is the caller's concern.
pub fn apply_display_mode(
    api: &impl DisplayApi,
    log: &LogFile,
    request: &DisplayModeRequest,
) -> Result<(), FixError> {
    let result = try_apply(api, request);
    match &result {
        Ok(()) => log.info(&format!(
            "Successfully changed {} resolution to {}.",
            request.monitor, request.mode
        )),
        Err(err) => log.error(&err.to_string()),
    }
    result
}

fn try_apply(api: &impl DisplayApi, request: &DisplayModeRequest) -> Result<(), FixError> {
    if !api.adapter_exists(request.monitor) {
        return Err(FixError::AdapterNotFound);
    }

    let adapter_name = request.monitor.adapter_name();
    log::debug!("Changing {} to {}", adapter_name, request.mode);
    api.change_mode(&adapter_name, request.mode).map_err(|code| {
        log::debug!("{} rejected the change with {}", adapter_name, code);
        FixError::ModeChangeFailed {
            monitor: request.monitor,
            reason: api.last_error_message(),
        }
    })
}


#[cfg(test)]
mod tests {
    use super::fake::FakeDisplay;
    use super::*;
    use crate::log_file::{read_lines, temp_log};

    #[test]
    fn success_is_logged_with_mode() {
        let api = FakeDisplay::with_monitors(1);
        let log = temp_log("apply-ok");
        let request = DisplayModeRequest::new(1, 2560, 1440, 165);

        assert_eq!(apply_display_mode(&api, &log, &request), Ok(()));
        assert_eq!(api.changes(), vec![(r"\\.\DISPLAY1".to_string(), request.mode)]);
        assert_eq!(
            read_lines(&log),
            vec!["Successfully changed Monitor 1 resolution to 2560x1440 @ 165 Hz."]
        );
    }

    #[test]
    fn rejection_is_logged_with_os_text() {
        let api = FakeDisplay::with_monitors(2).rejecting(2);
        let log = temp_log("apply-rejected");
        let request = DisplayModeRequest::new(2, 1, 1, 1);

        let result = apply_display_mode(&api, &log, &request);
        assert!(matches!(result, Err(FixError::ModeChangeFailed { .. })));
        assert_eq!(
            read_lines(&log),
            vec!["Error: Failed to change Monitor 2 resolution. The parameter is incorrect."]
        );
    }

    #[test]
    fn unformattable_error_leaves_empty_reason() {
        let mut api = FakeDisplay::with_monitors(1).rejecting(1);
        api.error_message.clear();
        let log = temp_log("apply-empty-reason");

        let _ = apply_display_mode(&api, &log, &DisplayModeRequest::new(1, 800, 600, 60));
        assert_eq!(read_lines(&log), vec!["Error: Failed to change Monitor 1 resolution. "]);
    }

    #[test]
    fn missing_adapter_skips_mode_change() {
        let mut api = FakeDisplay::with_monitors(2);
        api.missing_adapters.push(2);
        let log = temp_log("apply-missing");

        let result = apply_display_mode(&api, &log, &DisplayModeRequest::new(2, 1920, 1080, 60));
        assert_eq!(result, Err(FixError::AdapterNotFound));
        assert!(api.changes().is_empty());
        assert_eq!(
            read_lines(&log),
            vec!["Error: Invalid monitor index specified in the config file."]
        );
    }

    #[test]
    fn reapplying_active_mode_succeeds_twice() {
        let mode = DisplayMode::new(1920, 1080, 60);
        let api = FakeDisplay::with_monitors(1).showing(mode);
        let log = temp_log("apply-idempotent");
        let request = DisplayModeRequest { monitor: MonitorIndex(1), mode };

        assert_eq!(apply_display_mode(&api, &log, &request), Ok(()));
        assert_eq!(apply_display_mode(&api, &log, &request), Ok(()));
        assert_eq!(api.changes().len(), 2);
        assert_eq!(read_lines(&log).len(), 2);
    }

    #[test]
    fn status_serializes_to_json() {
        let api = FakeDisplay::with_monitors(2).showing(DisplayMode::new(1920, 1080, 60));
        let json = serde_json::to_value(DisplayStatus::query(&api)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "monitor_count": 2,
                "current_mode": {
                    "resolution": { "width": 1920, "height": 1080 },
                    "refresh_rate": 60
                }
            })
        );
    }
}
