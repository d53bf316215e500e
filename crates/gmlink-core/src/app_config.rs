use url::Url;

use crate::ParseEnumError;

/// `x-source` name used when the host application does not provide one.
pub const DEFAULT_APP_NAME: &str = "gmlink";

/// What to open when Google Maps is not installed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FallbackStrategy {
    /// Give up and report failure.
    #[default]
    None,
    /// Open the equivalent map in Apple Maps.
    AppleMaps,
    /// Open the Google Maps website in Chrome if installed, otherwise in the
    /// default browser.
    ChromeThenSafari,
    /// Open the Google Maps website in Chrome if installed, otherwise open
    /// Apple Maps.
    ChromeThenAppleMaps,
    /// Open the Google Maps website in the default browser.
    Safari,
}

impl FallbackStrategy {
    pub const ALL: [FallbackStrategy; 5] = [
        FallbackStrategy::None,
        FallbackStrategy::AppleMaps,
        FallbackStrategy::ChromeThenSafari,
        FallbackStrategy::ChromeThenAppleMaps,
        FallbackStrategy::Safari,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FallbackStrategy::None => "none",
            FallbackStrategy::AppleMaps => "apple-maps",
            FallbackStrategy::ChromeThenSafari => "chrome-then-safari",
            FallbackStrategy::ChromeThenAppleMaps => "chrome-then-apple-maps",
            FallbackStrategy::Safari => "safari",
        }
    }
}

impl std::fmt::Display for FallbackStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FallbackStrategy {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        FallbackStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == normalized)
            .ok_or_else(|| ParseEnumError {
                kind: "fallback strategy",
                value: s.to_string(),
                expected: "none, apple-maps, chrome-then-safari, chrome-then-apple-maps, safari",
            })
    }
}

/// Settings read by the resolver on every open call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Where Google Maps (or Chrome) should send the user back to. Only used
    /// when the target app supports `x-callback-url`.
    pub callback_url: Option<Url>,
    pub fallback_strategy: FallbackStrategy,
    /// Display name passed as `x-source`.
    pub app_name: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            callback_url: None,
            fallback_strategy: FallbackStrategy::None,
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

/// Process configuration. The callback URL is a return address handed to
/// other apps in every launch, so it is shown in full.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub resolver: ResolverConfig,
    pub log_level: String,
}
