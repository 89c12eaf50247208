//! Platform-neutral pieces of the browser bootstrap

use std::time::Duration;
use tracing::warn;
use vendorverse_theme::ThemeConfig;

/// Id of an optional `<script type="application/toml">` block overriding
/// the theme config
pub const CONFIG_SCRIPT_ID: &str = "vendorverse-theme-config";

/// Config from the page's override block, or the default when the block is
/// absent or invalid
pub fn config_from_script(text: Option<&str>) -> ThemeConfig {
    let Some(text) = text else {
        return ThemeConfig::default();
    };
    ThemeConfig::from_toml_str(text).unwrap_or_else(|err| {
        warn!("ignoring #{CONFIG_SCRIPT_ID}: {err}");
        ThemeConfig::default()
    })
}

/// `setTimeout` delay for a deadline, clamped to what the browser accepts
pub fn timeout_ms(deadline: Duration, now: Duration) -> i32 {
    let ms = deadline.saturating_sub(now).as_millis();
    i32::try_from(ms).unwrap_or(i32::MAX)
}
