//! Engine launch flags.

use crate::config::BrowserConfig;

pub const DISABLE_GPU: &str = "--disable-gpu";
pub const DISABLE_SOFTWARE_RASTERIZER: &str = "--disable-software-rasterizer";
pub const ENABLE_LOGGING: &str = "--enable-logging";

/// Arguments wry gives WebView2 by default. Custom arguments replace them.
pub const WEBVIEW2_DEFAULT_ARGS: &str =
    "--disable-features=msWebOOUI,msPdfOOUI,msSmartScreenProtection";

/// Build the engine launch flag string for a configuration.
///
/// Flags appear in a fixed order: GPU, software rasterizer, logging.
pub fn build_flags(config: &BrowserConfig) -> String {
    let toggles = [
        (config.disable_gpu, DISABLE_GPU),
        (config.disable_software_rasterizer, DISABLE_SOFTWARE_RASTERIZER),
        (config.enable_logging, ENABLE_LOGGING),
    ];

    toggles
        .iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, flag)| *flag)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full WebView2 browser argument string for the given launch flags.
pub fn webview2_args(launch_flags: &str) -> String {
    let launch_flags = launch_flags.trim();
    if launch_flags.is_empty() {
        WEBVIEW2_DEFAULT_ARGS.to_string()
    } else {
        format!("{} {}", WEBVIEW2_DEFAULT_ARGS, launch_flags)
    }
}
