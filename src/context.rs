//! Site-wide context for GearHire.
//!
//! The site config is loaded once in `main`; components read the shared
//! copy through [`PopoverEnv`] so every region sees the same wording.

use dioxus::prelude::*;
use gearhire_core::SiteConfig;
use gearhire_ui::PopoverEnv;

/// Site config set from the command line.
pub fn get_site_config() -> SiteConfig {
    crate::get_site_config()
}

/// Business name shown in the navbar and footer.
pub fn use_business_name() -> String {
    use_context::<PopoverEnv>().config.business_name.clone()
}
