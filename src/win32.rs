use winsafe::{co, GmidxEnum};

use crate::{DisplayApi, DisplayMode, MonitorIndex, RefreshRate, Resolution};

/// [`DisplayApi`] backed by `winuser.h`
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Display;

impl DisplayApi for Win32Display {
    fn monitor_count(&self) -> i32 {
        winsafe::GetSystemMetrics(co::SM::CMONITORS)
    }

    fn adapter_exists(&self, index: MonitorIndex) -> bool {
        if index.0 < 1 {
            return false;
        }
        matches!(
            winsafe::EnumDisplayDevices(None, None).nth((index.0 - 1) as usize),
            Some(Ok(_))
        )
    }

    fn current_mode(&self) -> Option<DisplayMode> {
        let mut devmode = winsafe::DEVMODE::default();
        match winsafe::EnumDisplaySettings(
            None,
            GmidxEnum::Enum(co::ENUM_SETTINGS::CURRENT),
            &mut devmode,
        ) {
            Ok(()) => Some(DisplayMode {
                resolution: Resolution::new(devmode.dmPelsWidth, devmode.dmPelsHeight),
                refresh_rate: RefreshRate(devmode.dmDisplayFrequency),
            }),
            Err(err) => {
                log::warn!("Cannot read the current display mode: {}", err);
                None
            }
        }
    }

    fn change_mode(&self, adapter_name: &str, mode: DisplayMode) -> Result<(), String> {
        let mut devmode = winsafe::DEVMODE::from_display_mode(mode);
        winsafe::ChangeDisplaySettingsEx(Some(adapter_name), Some(&mut devmode), co::CDS::UPDATEREGISTRY)
            .map(|_| ())
            .map_err(|disp_change| disp_change.to_string())
    }

    fn last_error_message(&self) -> String {
        winsafe::GetLastError().FormatMessage().trim_end().to_string()
    }
}

/// Provides methods to set properties of `winsafe::DEVMODE`
trait FromDisplayMode {
    fn set_resolution(&mut self, resolution: Resolution);
    fn set_refresh_rate(&mut self, refresh_rate: RefreshRate);

    /// Converts a display mode into a `winsafe::DEVMODE` with only the
    /// resolution and frequency fields marked as set
    fn from_display_mode(mode: DisplayMode) -> winsafe::DEVMODE {
        let mut devmode = winsafe::DEVMODE::default();
        devmode.set_resolution(mode.resolution);
        devmode.set_refresh_rate(mode.refresh_rate);
        devmode
    }
}

impl FromDisplayMode for winsafe::DEVMODE {
    fn set_resolution(&mut self, resolution: Resolution) {
        self.dmPelsWidth = resolution.width;
        self.dmPelsHeight = resolution.height;
        self.dmFields |= co::DM::PELSWIDTH | co::DM::PELSHEIGHT;
    }

    fn set_refresh_rate(&mut self, refresh_rate: RefreshRate) {
        self.dmDisplayFrequency = refresh_rate.0;
        self.dmFields |= co::DM::DISPLAYFREQUENCY;
    }
}
