//! URL builders for opening a request definition in Google Maps, the Google
//! Maps website (directly or through Chrome), or Apple Maps.
//!
//! Builders never fail: absent or malformed fields are left out, which can
//! yield a degenerate but still well-formed URL.

pub mod apple;
pub mod encode;
pub mod google;
pub mod web;

use gmlink_core::{DirectionsRequest, MapRequest, ResolverConfig, StreetViewRequest};
use url::Url;

pub use apple::{apple_maps_url, APPLE_MAPS_BASE};
pub use encode::{encode_component, format_degrees, QueryParams};
pub use google::{google_maps_url, GOOGLE_MAPS_CALLBACK_SCHEME, GOOGLE_MAPS_SCHEME};
pub use web::{
    chrome_url, web_url, CHROME_CALLBACK_SCHEME, CHROME_HTTPS_SCHEME, CHROME_SCHEME,
    GOOGLE_MAPS_WEB_BASE,
};

/// Any of the three request definitions, borrowed.
#[derive(Debug, Clone, Copy)]
pub enum Definition<'a> {
    Map(&'a MapRequest),
    StreetView(&'a StreetViewRequest),
    Directions(&'a DirectionsRequest),
}

impl Definition<'_> {
    /// Short label for log lines.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Definition::Map(_) => "map",
            Definition::StreetView(_) => "street_view",
            Definition::Directions(_) => "directions",
        }
    }
}

impl<'a> From<&'a MapRequest> for Definition<'a> {
    fn from(request: &'a MapRequest) -> Self {
        Definition::Map(request)
    }
}

impl<'a> From<&'a StreetViewRequest> for Definition<'a> {
    fn from(request: &'a StreetViewRequest) -> Self {
        Definition::StreetView(request)
    }
}

impl<'a> From<&'a DirectionsRequest> for Definition<'a> {
    fn from(request: &'a DirectionsRequest) -> Self {
        Definition::Directions(request)
    }
}

/// The `x-callback-url` parameters: where to return to and who is asking.
#[derive(Debug, Clone, Copy)]
pub struct XCallback<'a> {
    pub success_url: &'a Url,
    pub source: &'a str,
}

impl<'a> XCallback<'a> {
    /// `None` when no callback URL is configured.
    #[must_use]
    pub fn from_config(config: &'a ResolverConfig) -> Option<Self> {
        config.callback_url.as_ref().map(|success_url| Self {
            success_url,
            source: &config.app_name,
        })
    }

    pub(crate) fn push_params(&self, params: &mut QueryParams) {
        params
            .push_text("x-success", self.success_url.as_str())
            .push_text("x-source", self.source);
    }
}
