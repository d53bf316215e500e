/// The host platform's URL-scheme registry and app-launching facility.
///
/// Both calls are synchronous. Results must not be cached by callers:
/// apps can be installed or removed while the process runs.
pub trait AppLauncher {
    /// Whether a URL with this scheme (given as e.g. `"comgooglemaps://"`)
    /// can be opened.
    fn can_open(&self, scheme: &str) -> bool;

    /// Ask the platform to open `url`. `true` means the request was
    /// accepted, not that the target app finished opening.
    fn open(&self, url: &str) -> bool;
}

impl<T: AppLauncher + ?Sized> AppLauncher for &T {
    fn can_open(&self, scheme: &str) -> bool {
        (**self).can_open(scheme)
    }

    fn open(&self, url: &str) -> bool {
        (**self).open(url)
    }
}

impl<T: AppLauncher + ?Sized> AppLauncher for Box<T> {
    fn can_open(&self, scheme: &str) -> bool {
        (**self).can_open(scheme)
    }

    fn open(&self, url: &str) -> bool {
        (**self).open(url)
    }
}
