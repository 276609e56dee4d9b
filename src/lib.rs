//! Restores a configured display mode on Windows.
//!
//! Reads one or two `monitor width height refresh` tuples from a text file, compares them
//! against the active mode and applies a persistent mode change through `winuser.h`.

pub mod config;
mod display;
pub mod fixer;
mod log_file;
mod types;
#[cfg(windows)]
mod win32;

pub use display::*;
pub use log_file::LogFile;
pub use types::*;
#[cfg(windows)]
pub use win32::Win32Display;
