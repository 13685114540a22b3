use super::interval::Interval;
use anyhow::Context;
use std::ffi::OsString;
use std::path::PathBuf;

/// Where the last accepted interval is remembered between sessions.
///
/// The file is a small JSON object `{"min": 7, "max": 10}`. It is only a
/// convenience for prefilling the form, so reads never fail the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    path: PathBuf,
}

impl Settings {
    /// `$HILO_SETTINGS`, else `~/.hilo.json`, else `./.hilo.json`.
    pub fn locate() -> Self {
        Self::resolve(
            std::env::var_os(crate::SETTINGS_ENV),
            std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE")),
        )
    }
    /// Explicit path wins, then the home directory, then the working directory.
    fn resolve(explicit: Option<OsString>, home: Option<OsString>) -> Self {
        let path = explicit.map(PathBuf::from).unwrap_or_else(|| {
            home.map(PathBuf::from)
                .unwrap_or_default()
                .join(crate::SETTINGS_FILE)
        });
        Self { path }
    }
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Previously saved bounds, if any survive validation.
    pub fn load(&self) -> Option<Interval> {
        if !self.path.exists() {
            return None;
        }
        self.read()
            .inspect_err(|e| log::warn!("ignoring saved settings: {:#}", e))
            .ok()
    }

    pub fn save(&self, interval: &Interval) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(interval).context("serialize settings")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("write {}", self.path.display()))?;
        log::debug!("saved interval {} to {}", interval, self.path.display());
        Ok(())
    }

    fn read(&self) -> anyhow::Result<Interval> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        let saved = serde_json::from_str::<Interval>(&text)
            .with_context(|| format!("parse {}", self.path.display()))?;
        Ok(Interval::new(saved.min(), saved.max())?)
    }
}
