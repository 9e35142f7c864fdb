use crate::domain::{BuildConfig, InstallLayout};
use crate::ports::{ConnectivityProbe, ToolRunner};

/// Application context holding dependencies for command execution.
pub struct AppContext<R: ToolRunner, P: ConnectivityProbe> {
    config: BuildConfig,
    layout: InstallLayout,
    runner: R,
    probe: P,
}

impl<R: ToolRunner, P: ConnectivityProbe> AppContext<R, P> {
    /// Create a new application context.
    pub fn new(config: BuildConfig, layout: InstallLayout, runner: R, probe: P) -> Self {
        Self { config, layout, runner, probe }
    }

    /// Get a reference to the build configuration.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Get a reference to the filesystem layout.
    pub fn layout(&self) -> &InstallLayout {
        &self.layout
    }

    /// Get a reference to the tool runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Get a reference to the connectivity probe.
    pub fn probe(&self) -> &P {
        &self.probe
    }
}
