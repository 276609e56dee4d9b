use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Append-only text log.
///
/// The file is opened, written and closed for every message so that an
/// interrupted run leaves at most one partial line behind.
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one line. A write failure is reported on stderr only.
    pub fn append(&self, message: &str) {
        if let Err(err) = self.try_append(message) {
            log::warn!("Could not write to {}: {}", self.path.display(), err);
        }
    }

    /// Appends a success line, mirrored at info level
    pub fn info(&self, message: &str) {
        log::info!("{}", message);
        self.append(message);
    }

    /// Appends an error line, mirrored at error level
    pub fn error(&self, message: &str) {
        log::error!("{}", message);
        self.append(message);
    }

    fn try_append(&self, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}", message)
    }
}

#[cfg(test)]
pub(crate) fn temp_log(name: &str) -> LogFile {
    let path = std::env::temp_dir().join(format!("displayfix-{}-{}.log", name, std::process::id()));
    let _ = std::fs::remove_file(&path);
    LogFile::new(path)
}

#[cfg(test)]
pub(crate) fn read_lines(log: &LogFile) -> Vec<String> {
    std::fs::read_to_string(log.path())
        .map(|contents| contents.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
