//! Browser provisioning.
//!
//! Resolves which Chrome/Chromium executable to launch and with which
//! arguments, based on the configured deployment [`Mode`]. The resolution is
//! pure and takes the host platform as a value, so every branch is
//! unit-testable regardless of where the tests run.

use std::path::PathBuf;

use chromiumoxide::BrowserConfig;

use crate::config::{Config, Mode};
use crate::error_handling::ProvisionError;

const WINDOWS_CHROME_PATH: &str = r"C:\Program Files\Google\Chrome\Application\chrome.exe";
const MACOS_CHROME_PATH: &str = "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome";
const LINUX_CHROME_PATH: &str = "/usr/bin/google-chrome";

/// Extra launch arguments applied in every mode.
///
/// The sandbox flags are required in containerized and serverless
/// environments where the kernel sandbox is unavailable; the rest keep the
/// headless instance lean.
const LAUNCH_ARGS: &[&str] = &[
    "--no-sandbox",
    "--disable-setuid-sandbox",
    "--disable-dev-shm-usage",
    "--disable-gpu",
    "--hide-scrollbars",
    "--mute-audio",
];

/// Default viewport, matching what the packaged serverless Chromium uses.
const DEFAULT_WINDOW_SIZE: (u32, u32) = (1280, 720);

/// A fully resolved plan for launching the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// Absolute path to the browser executable.
    pub executable: PathBuf,
    /// Command-line arguments passed to the browser process.
    pub args: Vec<String>,
    /// Whether to run without a visible window. Always true in practice;
    /// kept as data so a plan is fully inspectable.
    pub headless: bool,
    /// Viewport dimensions.
    pub window_size: (u32, u32),
}

impl LaunchPlan {
    /// Resolves the launch plan for the current host platform.
    pub fn resolve(config: &Config) -> Result<Self, ProvisionError> {
        Self::resolve_for_os(config, std::env::consts::OS)
    }

    /// Resolves the launch plan for an explicit platform string (as produced
    /// by `std::env::consts::OS`).
    ///
    /// Resolution order:
    /// 1. An explicit `--chrome-path` override wins in every mode.
    /// 2. Development mode maps the platform to its conventional Chrome
    ///    install location.
    /// 3. Production mode uses the packaged Chromium path.
    pub fn resolve_for_os(config: &Config, os: &str) -> Result<Self, ProvisionError> {
        let executable = if let Some(path) = &config.chrome_path {
            path.clone()
        } else {
            match config.mode {
                Mode::Development => match os {
                    "windows" => PathBuf::from(WINDOWS_CHROME_PATH),
                    "macos" => PathBuf::from(MACOS_CHROME_PATH),
                    "linux" => PathBuf::from(LINUX_CHROME_PATH),
                    other => {
                        return Err(ProvisionError::UnsupportedPlatform(other.to_string()));
                    }
                },
                Mode::Production => config.chromium_pack_path.clone(),
            }
        };

        Ok(LaunchPlan {
            executable,
            args: LAUNCH_ARGS.iter().map(|a| a.to_string()).collect(),
            headless: true,
            window_size: DEFAULT_WINDOW_SIZE,
        })
    }

    /// Converts the plan into a launchable `BrowserConfig`.
    ///
    /// The browser always runs headless; the sandbox flags are carried in
    /// [`LaunchPlan::args`] rather than through the builder so the full
    /// argument list stays inspectable in tests.
    pub fn into_browser_config(self) -> Result<BrowserConfig, ProvisionError> {
        let mut builder = BrowserConfig::builder()
            .chrome_executable(&self.executable)
            .window_size(self.window_size.0, self.window_size.1);
        if !self.headless {
            builder = builder.with_head();
        }
        for arg in &self.args {
            builder = builder.arg(arg);
        }
        builder.build().map_err(ProvisionError::ConfigError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PACKAGED_CHROMIUM_PATH;

    #[test]
    fn test_development_mode_linux() {
        let config = Config::default();
        let plan = LaunchPlan::resolve_for_os(&config, "linux").unwrap();
        assert_eq!(plan.executable, PathBuf::from(LINUX_CHROME_PATH));
    }

    #[test]
    fn test_development_mode_macos() {
        let config = Config::default();
        let plan = LaunchPlan::resolve_for_os(&config, "macos").unwrap();
        assert_eq!(plan.executable, PathBuf::from(MACOS_CHROME_PATH));
    }

    #[test]
    fn test_development_mode_windows() {
        let config = Config::default();
        let plan = LaunchPlan::resolve_for_os(&config, "windows").unwrap();
        assert_eq!(plan.executable, PathBuf::from(WINDOWS_CHROME_PATH));
    }

    #[test]
    fn test_development_mode_unsupported_platform() {
        let config = Config::default();
        let err = LaunchPlan::resolve_for_os(&config, "freebsd").unwrap_err();
        match err {
            ProvisionError::UnsupportedPlatform(os) => assert_eq!(os, "freebsd"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_production_mode_uses_packaged_chromium() {
        let config = Config {
            mode: Mode::Production,
            ..Config::default()
        };
        // Platform is irrelevant in production mode, including unknown ones.
        let plan = LaunchPlan::resolve_for_os(&config, "freebsd").unwrap();
        assert_eq!(plan.executable, PathBuf::from(PACKAGED_CHROMIUM_PATH));
    }

    #[test]
    fn test_production_mode_respects_custom_pack_path() {
        let config = Config {
            mode: Mode::Production,
            chromium_pack_path: PathBuf::from("/tmp/chromium/chrome"),
            ..Config::default()
        };
        let plan = LaunchPlan::resolve_for_os(&config, "linux").unwrap();
        assert_eq!(plan.executable, PathBuf::from("/tmp/chromium/chrome"));
    }

    #[test]
    fn test_explicit_chrome_path_overrides_mode() {
        let config = Config {
            chrome_path: Some(PathBuf::from("/opt/custom/chrome")),
            mode: Mode::Production,
            ..Config::default()
        };
        let plan = LaunchPlan::resolve_for_os(&config, "freebsd").unwrap();
        assert_eq!(plan.executable, PathBuf::from("/opt/custom/chrome"));
    }

    #[test]
    fn test_sandbox_args_always_present() {
        let config = Config::default();
        for (mode, os) in [(Mode::Development, "linux"), (Mode::Production, "linux")] {
            let config = Config {
                mode,
                ..config.clone()
            };
            let plan = LaunchPlan::resolve_for_os(&config, os).unwrap();
            assert!(plan.args.iter().any(|a| a == "--no-sandbox"));
            assert!(plan.args.iter().any(|a| a == "--disable-setuid-sandbox"));
        }
    }

    #[test]
    fn test_plan_is_headless_with_default_viewport() {
        let plan = LaunchPlan::resolve_for_os(&Config::default(), "linux").unwrap();
        assert!(plan.headless);
        assert_eq!(plan.window_size, (1280, 720));
    }

    #[test]
    fn test_into_browser_config() {
        let config = Config::default();
        let plan = LaunchPlan::resolve_for_os(&config, "linux").unwrap();
        assert!(plan.into_browser_config().is_ok());
    }
}
