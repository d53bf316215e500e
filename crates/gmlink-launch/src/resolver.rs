//! The launch decision procedure.
//!
//! 1. If Google Maps is installed, open it (through `x-callback-url` when a
//!    callback is configured and supported) and return that result. A
//!    rejected launch at this point is final.
//! 2. Otherwise consult the fallback strategy and return the result of the
//!    single fallback launch it selects.

use gmlink_core::{
    DirectionsRequest, FallbackStrategy, MapRequest, ResolverConfig, StreetViewRequest,
};
use gmlink_url::{
    apple_maps_url, chrome_url, google_maps_url, web_url, Definition, XCallback,
    CHROME_CALLBACK_SCHEME, CHROME_SCHEME, GOOGLE_MAPS_CALLBACK_SCHEME, GOOGLE_MAPS_SCHEME,
};
use url::Url;

use crate::AppLauncher;

/// Opens maps, Street View locations and directions through an
/// [`AppLauncher`].
///
/// Holds no state besides its configuration, which the host may change at
/// any time between calls.
pub struct LaunchResolver<L> {
    launcher: L,
    config: ResolverConfig,
}

impl<L: AppLauncher> LaunchResolver<L> {
    pub fn new(launcher: L, config: ResolverConfig) -> Self {
        Self { launcher, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn set_callback_url(&mut self, callback_url: Option<Url>) {
        self.config.callback_url = callback_url;
    }

    pub fn set_fallback_strategy(&mut self, fallback_strategy: FallbackStrategy) {
        self.config.fallback_strategy = fallback_strategy;
    }

    pub fn set_app_name(&mut self, app_name: impl Into<String>) {
        self.config.app_name = app_name.into();
    }

    /// Asks the platform every time; never cached.
    pub fn is_google_maps_installed(&self) -> bool {
        self.probe(GOOGLE_MAPS_SCHEME)
    }

    pub fn is_chrome_installed(&self) -> bool {
        self.probe(CHROME_SCHEME)
    }

    /// Open a map in Google Maps or the configured fallback.
    ///
    /// Returns `false` when nothing could be opened. The reason (not
    /// installed, no fallback, launch rejected) is not distinguished.
    pub fn open_map(&self, request: &MapRequest) -> bool {
        self.open(Definition::Map(request))
    }

    /// Open a Street View location. Success does not mean imagery exists
    /// there.
    pub fn open_street_view(&self, request: &StreetViewRequest) -> bool {
        self.open(Definition::StreetView(request))
    }

    /// Open directions. Success does not mean a route was found.
    pub fn open_directions(&self, request: &DirectionsRequest) -> bool {
        self.open(Definition::Directions(request))
    }

    fn open(&self, definition: Definition<'_>) -> bool {
        if self.is_google_maps_installed() {
            let callback = self.callback_if_supported(GOOGLE_MAPS_CALLBACK_SCHEME);
            let url = google_maps_url(definition, callback);
            return self.launch("google_maps", definition, &url);
        }

        let strategy = self.config.fallback_strategy;
        tracing::debug!(
            request = definition.kind(),
            strategy = %strategy,
            "google maps not installed, consulting fallback strategy"
        );

        match strategy {
            FallbackStrategy::None => {
                tracing::info!(request = definition.kind(), "no fallback configured");
                false
            }
            FallbackStrategy::AppleMaps => self.open_apple_maps(definition),
            FallbackStrategy::ChromeThenSafari => {
                if self.is_chrome_installed() {
                    self.open_chrome(definition)
                } else {
                    self.open_browser(definition)
                }
            }
            FallbackStrategy::ChromeThenAppleMaps => {
                if self.is_chrome_installed() {
                    self.open_chrome(definition)
                } else {
                    self.open_apple_maps(definition)
                }
            }
            FallbackStrategy::Safari => self.open_browser(definition),
        }
    }

    fn open_chrome(&self, definition: Definition<'_>) -> bool {
        let callback = self.callback_if_supported(CHROME_CALLBACK_SCHEME);
        let url = chrome_url(definition, callback);
        self.launch("chrome", definition, &url)
    }

    fn open_browser(&self, definition: Definition<'_>) -> bool {
        let url = web_url(definition);
        self.launch("browser", definition, &url)
    }

    fn open_apple_maps(&self, definition: Definition<'_>) -> bool {
        let url = apple_maps_url(definition);
        self.launch("apple_maps", definition, &url)
    }

    /// The configured callback, if there is one and `scheme` can be opened.
    /// An unsupported callback scheme silently degrades to the plain one.
    fn callback_if_supported(&self, scheme: &str) -> Option<XCallback<'_>> {
        let callback = XCallback::from_config(&self.config)?;
        if self.probe(scheme) {
            Some(callback)
        } else {
            tracing::debug!(scheme, "x-callback-url not supported, using plain scheme");
            None
        }
    }

    fn probe(&self, scheme: &str) -> bool {
        let installed = self.launcher.can_open(scheme);
        tracing::debug!(scheme, installed, "probed url scheme");
        installed
    }

    fn launch(&self, target: &str, definition: Definition<'_>, url: &str) -> bool {
        let accepted = self.launcher.open(url);
        if accepted {
            tracing::info!(app = target, request = definition.kind(), url, "launch accepted");
        } else {
            tracing::warn!(app = target, request = definition.kind(), url, "launch rejected");
        }
        accepted
    }
}

impl<L> std::fmt::Debug for LaunchResolver<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaunchResolver")
            .field("fallback_strategy", &self.config.fallback_strategy)
            .field("has_callback_url", &self.config.callback_url.is_some())
            .field("app_name", &self.config.app_name)
            .finish_non_exhaustive()
    }
}
