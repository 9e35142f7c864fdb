//! Shared testing utilities for traypack CLI tests.
//!
//! Each context fabricates an isolated home, working root, and a stub tool
//! directory that shadows `python3` on `PATH`. The stub venv binaries log
//! their invocations so tests can assert what the pipeline ran.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_fs::TempDir;

/// Stub `python3`: handles `-m venv <dir>` by materializing a fake
/// environment from the prepared venv-* tool scripts.
const PYTHON3_STUB: &str = r#"#!/bin/sh
if [ "$1" = "-m" ] && [ "$2" = "venv" ]; then
    dir="$3"
    mkdir -p "$dir/bin"
    cp "@STUBS@/venv-python" "$dir/bin/python"
    cp "@STUBS@/venv-pip" "$dir/bin/pip"
    cp "@STUBS@/venv-pyinstaller" "$dir/bin/pyinstaller"
    chmod 755 "$dir/bin/python" "$dir/bin/pip" "$dir/bin/pyinstaller"
    exit 0
fi
exit 0
"#;

/// Stub venv runtime: import probes fail for modules listed in
/// `FAKE_MISSING_MODULES` (comma separated), succeed otherwise.
const VENV_PYTHON_STUB: &str = r#"#!/bin/sh
if [ "$1" = "-c" ]; then
    mod="${2#import }"
    case ",$FAKE_MISSING_MODULES," in
        *",$mod,"*) exit 1 ;;
    esac
fi
exit 0
"#;

/// Stub pip: records every invocation in `<venv>/pip.log`.
const VENV_PIP_STUB: &str = r#"#!/bin/sh
echo "pip $*" >> "$(dirname "$0")/../pip.log"
exit 0
"#;

/// Stub pyinstaller: creates `dist/<name>`, `build/`, and the spec file in
/// the current directory unless `FAKE_NO_ARTIFACT` is set.
const VENV_PYINSTALLER_STUB: &str = r#"#!/bin/sh
echo "pyinstaller $*" >> "$(dirname "$0")/../pyinstaller.log"
if [ -n "$FAKE_NO_ARTIFACT" ]; then
    exit 0
fi
name="app"
while [ "$#" -gt 0 ]; do
    if [ "$1" = "--name" ]; then
        name="$2"
        shift
    fi
    shift
done
mkdir -p build dist
printf 'fake frozen binary\n' > "dist/$name"
: > "$name.spec"
exit 0
"#;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    temp: TempDir,
    work_dir: PathBuf,
    home_dir: PathBuf,
    bin_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with stub tools in place.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = temp.path().join("work");
        let home_dir = temp.path().join("home");
        let bin_dir = temp.path().join("bin");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&home_dir).expect("Failed to create test home directory");
        fs::create_dir_all(&bin_dir).expect("Failed to create test bin directory");

        // placeholder application entry point
        fs::write(work_dir.join("main.py"), "print('monitor')\n").expect("Failed to write entry point");

        let ctx = Self { temp, work_dir, home_dir, bin_dir };
        // default config: probe against a dead local port so update checks
        // stay offline unless a test opts in
        ctx.set_probe_url("http://127.0.0.1:9/");
        ctx.write_tool("python3", &PYTHON3_STUB.replace("@STUBS@", &ctx.bin_dir.display().to_string()));
        ctx.write_tool("venv-python", VENV_PYTHON_STUB);
        ctx.write_tool("venv-pip", VENV_PIP_STUB);
        ctx.write_tool("venv-pyinstaller", VENV_PYINSTALLER_STUB);
        ctx
    }

    fn write_tool(&self, name: &str, content: &str) {
        let path = self.bin_dir.join(name);
        fs::write(&path, content).expect("Failed to write stub tool");
        let mut perms = fs::metadata(&path).expect("Failed to stat stub tool").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to chmod stub tool");
    }

    /// Point the connectivity probe at a specific endpoint.
    pub fn set_probe_url(&self, url: &str) {
        let content = format!("[environment]\nprobe_url = \"{}\"\n", url);
        fs::write(self.work_dir.join("traypack.toml"), content)
            .expect("Failed to write traypack.toml");
    }

    /// Build a command for invoking the compiled `traypack` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("traypack").expect("Failed to locate traypack binary");
        let path = format!(
            "{}:{}",
            self.bin_dir.display(),
            std::env::var("PATH").unwrap_or_default()
        );
        cmd.current_dir(&self.work_dir).env("HOME", &self.home_dir).env("PATH", path);
        cmd
    }

    /// Path to the working root used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        &self.home_dir
    }

    pub fn venv_dir(&self) -> PathBuf {
        self.work_dir.join("venv")
    }

    pub fn venv_python(&self) -> PathBuf {
        self.venv_dir().join("bin").join("python")
    }

    /// Invocation log of the stub pip inside the venv.
    pub fn pip_log(&self) -> String {
        fs::read_to_string(self.venv_dir().join("pip.log")).unwrap_or_default()
    }

    pub fn binary(&self) -> PathBuf {
        self.work_dir.join("vpn-monitor")
    }

    pub fn marker(&self) -> PathBuf {
        self.work_dir.join(".last-built")
    }

    pub fn manifest(&self) -> PathBuf {
        self.work_dir.join(".traypack-manifest.json")
    }

    pub fn menu_entry(&self) -> PathBuf {
        self.home_dir
            .join(".local")
            .join("share")
            .join("applications")
            .join("vpn-monitor.desktop")
    }

    pub fn autostart_entry(&self) -> PathBuf {
        self.home_dir.join(".config").join("autostart").join("vpn-monitor.desktop")
    }

    pub fn local_entry(&self) -> PathBuf {
        self.work_dir.join("vpn-monitor.desktop")
    }

    pub fn icon_path(&self) -> PathBuf {
        self.home_dir.join(".local").join("share").join("icons").join("vpn-monitor.png")
    }

    /// Assert that none of the three descriptor copies exist.
    pub fn assert_no_descriptors(&self) {
        assert!(!self.menu_entry().exists(), "menu entry should not exist");
        assert!(!self.autostart_entry().exists(), "autostart entry should not exist");
        assert!(!self.local_entry().exists(), "local entry should not exist");
    }

    /// Assert that all three descriptor copies exist and are textually identical.
    pub fn assert_descriptors_identical(&self) -> String {
        let menu = fs::read_to_string(self.menu_entry()).expect("menu entry should exist");
        let autostart =
            fs::read_to_string(self.autostart_entry()).expect("autostart entry should exist");
        let local = fs::read_to_string(self.local_entry()).expect("local entry should exist");
        assert_eq!(menu, autostart, "menu and autostart copies should be identical");
        assert_eq!(menu, local, "menu and local copies should be identical");
        menu
    }

    /// Strip the executable bits from the venv runtime, corrupting it.
    pub fn corrupt_venv_runtime(&self) {
        let python = self.venv_python();
        let mut perms = fs::metadata(&python).expect("venv runtime should exist").permissions();
        perms.set_mode(0o644);
        fs::set_permissions(&python, perms).expect("Failed to chmod venv runtime");
    }
}
