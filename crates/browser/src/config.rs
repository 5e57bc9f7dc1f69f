//! Browser configuration.

use std::fs;
use std::path::{Path, PathBuf};

use common::{ShellError, ShellResult};
use ini::{Ini, ParseOption, Properties, WriteOption};
use tracing::{debug, info, warn};

/// Default settings file name.
pub const CONFIG_FILE: &str = "setting.ini";

/// Section holding the browser settings.
pub const SECTION: &str = "Browser";

/// Default homepage.
pub const DEFAULT_HOMEPAGE: &str = "http://127.0.0.1:7860/";

/// Default user agent.
pub const DEFAULT_USER_AGENT: &str = "SimpleBrowser/1.0";

/// Browser configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserConfig {
    /// Page loaded at startup and by the Home button.
    pub homepage: String,
    /// Whether the dark chrome palette is applied.
    pub dark_mode: bool,
    /// User agent string.
    pub user_agent: String,
    /// Pass `--disable-gpu` to the engine.
    pub disable_gpu: bool,
    /// Pass `--disable-software-rasterizer` to the engine.
    pub disable_software_rasterizer: bool,
    /// Pass `--enable-logging` to the engine.
    pub enable_logging: bool,
}

impl BrowserConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the homepage.
    pub fn with_homepage(mut self, homepage: &str) -> Self {
        self.homepage = homepage.to_string();
        self
    }

    /// Set dark mode.
    pub fn with_dark_mode(mut self, enabled: bool) -> Self {
        self.dark_mode = enabled;
        self
    }

    /// Set user agent.
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Read the settings from a `[Browser]` section, taking the default for
    /// every key that is missing or cannot be interpreted.
    pub fn from_section(section: &Properties) -> Self {
        let defaults = Self::default();

        let string = |key: &str, fallback: String| {
            section.get(key).map(str::to_string).unwrap_or(fallback)
        };
        let boolean = |key: &str, fallback: bool| match section.get(key) {
            Some(raw) => parse_bool(raw).unwrap_or_else(|| {
                warn!("Invalid boolean for {}: {:?}, using {}", key, raw, fallback);
                fallback
            }),
            None => fallback,
        };

        Self {
            homepage: string("homepage", defaults.homepage),
            dark_mode: boolean("dark_mode", defaults.dark_mode),
            user_agent: string("user_agent", defaults.user_agent),
            disable_gpu: boolean("disable_gpu", defaults.disable_gpu),
            disable_software_rasterizer: boolean(
                "disable_software_rasterizer",
                defaults.disable_software_rasterizer,
            ),
            enable_logging: boolean("enable_logging", defaults.enable_logging),
        }
    }

    /// Write the settings into the `[Browser]` section of `document`,
    /// leaving other sections alone.
    pub fn write_section(&self, document: &mut Ini) {
        document
            .with_section(Some(SECTION))
            .set("homepage", self.homepage.as_str())
            .set("dark_mode", self.dark_mode.to_string())
            .set("user_agent", self.user_agent.as_str())
            .set("disable_gpu", self.disable_gpu.to_string())
            .set(
                "disable_software_rasterizer",
                self.disable_software_rasterizer.to_string(),
            )
            .set("enable_logging", self.enable_logging.to_string());
    }

    /// Render as a complete settings document.
    pub fn to_document(&self) -> Ini {
        let mut document = Ini::new();
        self.write_section(&mut document);
        document
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            homepage: DEFAULT_HOMEPAGE.to_string(),
            dark_mode: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            disable_gpu: true,
            disable_software_rasterizer: true,
            enable_logging: false,
        }
    }
}

/// Interpret a boolean setting value.
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a settings document.
///
/// A leading byte order mark is skipped and indented lines continue the
/// previous value.
pub fn parse_document(data: &str) -> ShellResult<Ini> {
    let data = data.strip_prefix('\u{feff}').unwrap_or(data);
    let option = ParseOption {
        enabled_indented_mutiline_value: true,
        ..ParseOption::default()
    };
    Ini::load_from_str_opt(data, option)
        .map_err(|e| ShellError::config(format!("invalid settings file: {}", e)))
}

fn write_option() -> WriteOption {
    WriteOption {
        kv_separator: " = ",
        ..WriteOption::default()
    }
}

/// File-backed settings store.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration.
    ///
    /// A missing file, a missing `[Browser]` section or a file that fails to
    /// parse all count as "no settings": the defaults are written to the file
    /// and returned. Other sections of a readable file are kept. This never
    /// fails; a failed write is only logged.
    pub fn load(&self) -> BrowserConfig {
        match self.read_document() {
            Ok(Some(document)) => {
                if let Some(section) = document.section(Some(SECTION)) {
                    debug!("Loaded settings from {}", self.path.display());
                    return BrowserConfig::from_section(section);
                }
                self.create_defaults(document)
            }
            Ok(None) => self.create_defaults(Ini::new()),
            Err(e) => {
                warn!("Ignoring unreadable settings file {}: {}", self.path.display(), e);
                self.create_defaults(Ini::new())
            }
        }
    }

    /// Persist a configuration.
    pub fn save(&self, config: &BrowserConfig) -> ShellResult<()> {
        self.write_document(&config.to_document())
    }

    fn read_document(&self) -> ShellResult<Option<Ini>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ShellError::Io(e)),
        };

        parse_document(&data).map(Some)
    }

    fn write_document(&self, document: &Ini) -> ShellResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        document.write_to_file_opt(&self.path, write_option())?;
        Ok(())
    }

    fn create_defaults(&self, mut document: Ini) -> BrowserConfig {
        let config = BrowserConfig::default();
        config.write_section(&mut document);
        match self.write_document(&document) {
            Ok(()) => info!("Wrote default settings to {}", self.path.display()),
            Err(e) => warn!("Failed to write default settings to {}: {}", self.path.display(), e),
        }
        config
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(CONFIG_FILE)
    }
}
