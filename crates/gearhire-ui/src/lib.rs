//! GearHire UI Components
//!
//! Dioxus glue for the popover engine in `gearhire-core`:
//!
//! - [`DomViewport`]: the webview's viewport, driven by a small script that
//!   attaches global listeners only on request
//! - [`use_popover_env_provider`] / [`use_popover`]: one controller per region,
//!   released when the region unmounts
//! - [`PopoverTrigger`] and [`ActionMenu`]: the two halves of every popover
//! - [`SystemNavigator`]: opens action links in the system browser

pub mod components;
pub mod navigator;
pub mod popover;
pub mod viewport;

pub use components::*;
pub use navigator::SystemNavigator;
pub use popover::{trigger_element_id, use_popover, use_popover_env_provider, PopoverEnv, RegionPopover};
pub use viewport::{BridgeCommand, BridgeMessage, DomAnchor, DomViewport, Measurement};
