//! Build configuration loaded from `traypack.toml` in the working root.
//!
//! Every field has a default reproducing the stock VPN Monitor build, so the
//! config file is optional and may override any subset of settings.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::AppError;

/// The optional configuration file name, looked up in the working root.
pub const CONFIG_FILENAME: &str = "traypack.toml";

/// Top-level build configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildConfig {
    /// Application identity and entry point.
    #[serde(default)]
    pub app: AppSettings,
    /// Isolated build environment settings.
    #[serde(default)]
    pub environment: EnvSettings,
    /// Desktop integration settings.
    #[serde(default)]
    pub install: InstallSettings,
}

impl BuildConfig {
    /// Load configuration from `traypack.toml` under `root`, falling back to
    /// defaults when the file is absent.
    pub fn load(root: &Path) -> Result<Self, AppError> {
        let path = root.join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Application identity settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// Display name shown in desktop menus.
    #[serde(default = "default_app_name")]
    pub name: String,
    /// Executable name, also used for the desktop entry and spec file names.
    #[serde(default = "default_binary")]
    pub binary: String,
    /// Entry-point source file handed to the freeze tool.
    #[serde(default = "default_entry_point")]
    pub entry_point: String,
    /// One-line description for the desktop entry.
    #[serde(default = "default_comment")]
    pub comment: String,
    /// File name of the generated icon under the user icon directory.
    #[serde(default = "default_icon_file")]
    pub icon_file: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            binary: default_binary(),
            entry_point: default_entry_point(),
            comment: default_comment(),
            icon_file: default_icon_file(),
        }
    }
}

/// Isolated build environment settings.
#[derive(Debug, Clone, Deserialize)]
pub struct EnvSettings {
    /// Environment directory, relative to the working root.
    #[serde(default = "default_env_dir")]
    pub dir: String,
    /// Packages installed into a freshly created environment.
    #[serde(default = "default_packages")]
    pub packages: Vec<String>,
    /// Modules whose importability marks the environment healthy.
    #[serde(default = "default_capability_modules")]
    pub capability_modules: Vec<String>,
    /// Endpoint for the pre-update reachability probe.
    #[serde(default = "default_probe_url")]
    pub probe_url: String,
    /// Hard timeout for the single probe attempt, in seconds.
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,
}

impl Default for EnvSettings {
    fn default() -> Self {
        Self {
            dir: default_env_dir(),
            packages: default_packages(),
            capability_modules: default_capability_modules(),
            probe_url: default_probe_url(),
            probe_timeout_secs: default_probe_timeout(),
        }
    }
}

/// Desktop integration settings.
#[derive(Debug, Clone, Deserialize)]
pub struct InstallSettings {
    /// Whether to also write the autostart entry.
    #[serde(default = "default_true")]
    pub autostart: bool,
    /// Desktop menu categories, joined with semicolons in the entry.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

impl Default for InstallSettings {
    fn default() -> Self {
        Self { autostart: default_true(), categories: default_categories() }
    }
}

fn default_app_name() -> String {
    "VPN Monitor".to_string()
}

fn default_binary() -> String {
    "vpn-monitor".to_string()
}

fn default_entry_point() -> String {
    "main.py".to_string()
}

fn default_comment() -> String {
    "Monitors VPN connection status from the system tray".to_string()
}

fn default_icon_file() -> String {
    "vpn-monitor.png".to_string()
}

fn default_env_dir() -> String {
    "venv".to_string()
}

fn default_packages() -> Vec<String> {
    vec!["PyQt6".to_string(), "pyinstaller".to_string()]
}

fn default_capability_modules() -> Vec<String> {
    vec!["PyQt6".to_string(), "PyInstaller".to_string()]
}

fn default_probe_url() -> String {
    "http://connectivitycheck.gstatic.com/generate_204".to_string()
}

fn default_probe_timeout() -> u64 {
    2
}

fn default_true() -> bool {
    true
}

fn default_categories() -> Vec<String> {
    vec!["Network".to_string(), "Utility".to_string()]
}
