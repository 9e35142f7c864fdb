//! Filesystem layout for the pipeline.
//!
//! All paths the pipeline touches derive from two injected roots: the working
//! root (application sources, build environment, staging output) and the user
//! home directory (icon, menu, and autostart locations). Stages never read the
//! process environment ad hoc, so tests can run against temporary roots.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Marker file in the working root recording the last built artifact name.
pub const MARKER_FILENAME: &str = ".last-built";

/// Resolved filesystem layout for one pipeline run.
#[derive(Debug, Clone)]
pub struct InstallLayout {
    root: PathBuf,
    home: PathBuf,
}

impl InstallLayout {
    /// Create a layout over explicit roots.
    pub fn new(root: PathBuf, home: PathBuf) -> Self {
        Self { root, home }
    }

    /// Resolve the layout from the process environment: the current directory
    /// (or an explicit override) and a validated `$HOME`.
    pub fn resolve(root_override: Option<PathBuf>) -> Result<Self, AppError> {
        let root = match root_override {
            Some(path) => path.canonicalize()?,
            None => std::env::current_dir()?,
        };
        let home = std::env::var_os("HOME")
            .map(PathBuf::from)
            .ok_or_else(|| AppError::config_error("HOME environment variable is not set"))?;
        Ok(Self::new(root, home))
    }

    /// The working root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The user home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// The isolated build environment directory.
    pub fn env_dir(&self, dir: &str) -> PathBuf {
        self.root.join(dir)
    }

    /// The environment's embedded runtime interpreter.
    pub fn env_python(&self, dir: &str) -> PathBuf {
        self.env_dir(dir).join("bin").join("python")
    }

    /// The environment's package installer.
    pub fn env_pip(&self, dir: &str) -> PathBuf {
        self.env_dir(dir).join("bin").join("pip")
    }

    /// The environment's freeze tool.
    pub fn env_pyinstaller(&self, dir: &str) -> PathBuf {
        self.env_dir(dir).join("bin").join("pyinstaller")
    }

    /// Transient build directory created by the freeze tool.
    pub fn build_dir(&self) -> PathBuf {
        self.root.join("build")
    }

    /// Transient staging directory where the freeze tool places its output.
    pub fn dist_dir(&self) -> PathBuf {
        self.root.join("dist")
    }

    /// Spec file generated by the freeze tool next to the entry point.
    pub fn spec_file(&self, binary: &str) -> PathBuf {
        self.root.join(format!("{}.spec", binary))
    }

    /// Where the freeze tool leaves the packaged executable.
    pub fn staged_artifact(&self, binary: &str) -> PathBuf {
        self.dist_dir().join(binary)
    }

    /// Final location of the packaged executable.
    pub fn installed_binary(&self, binary: &str) -> PathBuf {
        self.root.join(binary)
    }

    /// Marker file recording the last built artifact name.
    pub fn marker_file(&self) -> PathBuf {
        self.root.join(MARKER_FILENAME)
    }

    /// Install manifest path.
    pub fn manifest_file(&self) -> PathBuf {
        self.root.join(crate::domain::manifest::MANIFEST_FILENAME)
    }

    /// User icon directory.
    pub fn icons_dir(&self) -> PathBuf {
        self.home.join(".local").join("share").join("icons")
    }

    /// Canonical path of the generated icon.
    pub fn icon_path(&self, icon_file: &str) -> PathBuf {
        self.icons_dir().join(icon_file)
    }

    /// User application-menu directory.
    pub fn applications_dir(&self) -> PathBuf {
        self.home.join(".local").join("share").join("applications")
    }

    /// Menu descriptor path.
    pub fn menu_entry(&self, binary: &str) -> PathBuf {
        self.applications_dir().join(format!("{}.desktop", binary))
    }

    /// User autostart directory.
    pub fn autostart_dir(&self) -> PathBuf {
        self.home.join(".config").join("autostart")
    }

    /// Autostart descriptor path.
    pub fn autostart_entry(&self, binary: &str) -> PathBuf {
        self.autostart_dir().join(format!("{}.desktop", binary))
    }

    /// Local descriptor copy kept next to the binary.
    pub fn local_entry(&self, binary: &str) -> PathBuf {
        self.root.join(format!("{}.desktop", binary))
    }
}
