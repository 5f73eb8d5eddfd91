//! Opens action links in the system browser.

use gearhire_core::{CoreResult, GearError, Navigator};
use url::Url;

/// [`Navigator`] backed by the OS URL handler.
///
/// Only `http(s)` URLs are handed over; the webview itself never navigates.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemNavigator;

impl Navigator for SystemNavigator {
    fn open_url(&self, url: &Url) -> CoreResult<()> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(GearError::Navigation(format!("refusing to open {}", url)));
        }
        open::that(url.as_str()).map_err(|e| GearError::Navigation(format!("{}: {}", url, e)))
    }
}
