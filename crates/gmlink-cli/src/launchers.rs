//! Platform launchers available from the command line.

use std::cell::RefCell;

use clap::ValueEnum;
use gmlink_launch::AppLauncher;
use robius_open::Uri;

/// Opens web URLs with the platform's default handler. Desktop systems have
/// no Google Maps, Chrome or Apple Maps URL schemes, so only `http` and
/// `https` can be opened.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    fn is_web(url: &str) -> bool {
        url.starts_with("https://") || url.starts_with("http://")
    }
}

impl AppLauncher for SystemLauncher {
    fn can_open(&self, scheme: &str) -> bool {
        Self::is_web(scheme)
    }

    fn open(&self, url: &str) -> bool {
        if !Self::is_web(url) {
            tracing::warn!(url, "system launcher can only open web URLs");
            return false;
        }

        match Uri::new(url).open() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(url, error = ?e, "platform failed to open url");
                false
            }
        }
    }
}

/// Apps a dry run can pretend are installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InstalledApp {
    GoogleMaps,
    /// Google Maps with `x-callback-url` support.
    GoogleMapsCallback,
    Chrome,
    /// Chrome with `x-callback-url` support.
    ChromeCallback,
}

impl InstalledApp {
    #[must_use]
    pub const fn scheme(self) -> &'static str {
        match self {
            InstalledApp::GoogleMaps => gmlink_url::GOOGLE_MAPS_SCHEME,
            InstalledApp::GoogleMapsCallback => gmlink_url::GOOGLE_MAPS_CALLBACK_SCHEME,
            InstalledApp::Chrome => gmlink_url::CHROME_SCHEME,
            InstalledApp::ChromeCallback => gmlink_url::CHROME_CALLBACK_SCHEME,
        }
    }
}

/// Prints URLs instead of opening them. Every launch is accepted.
#[derive(Debug, Default)]
pub struct DryRunLauncher {
    installed: Vec<InstalledApp>,
    probed: RefCell<Vec<String>>,
    opened: RefCell<Vec<String>>,
}

impl DryRunLauncher {
    #[must_use]
    pub fn new(installed: &[InstalledApp]) -> Self {
        Self {
            installed: installed.to_vec(),
            probed: RefCell::new(Vec::new()),
            opened: RefCell::new(Vec::new()),
        }
    }

    /// Schemes asked about so far, in order.
    #[must_use]
    pub fn probed(&self) -> Vec<String> {
        self.probed.borrow().clone()
    }

    #[must_use]
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl AppLauncher for DryRunLauncher {
    fn can_open(&self, scheme: &str) -> bool {
        self.probed.borrow_mut().push(scheme.to_string());
        self.installed.iter().any(|app| app.scheme() == scheme)
    }

    fn open(&self, url: &str) -> bool {
        println!("would open: {url}");
        self.opened.borrow_mut().push(url.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_launcher_only_handles_web_schemes() {
        let launcher = SystemLauncher;
        assert!(launcher.can_open("https://"));
        assert!(!launcher.can_open("comgooglemaps://"));
        assert!(!launcher.open("comgooglemaps://?q=Pizza"));
    }

    #[test]
    fn dry_run_reports_declared_apps_only() {
        let launcher = DryRunLauncher::new(&[InstalledApp::Chrome]);
        assert!(launcher.can_open("googlechrome://"));
        assert!(!launcher.can_open("comgooglemaps://"));
        assert!(!launcher.can_open("googlechrome-x-callback://"));
    }

    #[test]
    fn dry_run_records_opened_urls() {
        let launcher = DryRunLauncher::new(&[]);
        assert!(launcher.open("https://maps.google.com/maps?q=Pizza"));
        assert_eq!(launcher.opened(), vec!["https://maps.google.com/maps?q=Pizza"]);
    }
}
