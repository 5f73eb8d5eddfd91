//! GearHire Core Library
//!
//! Contextual popover engine for the GearHire rental catalog.
//!
//! ## Overview
//!
//! Every region of the site (hero promo, navbar, footer, event-type grid,
//! product grid, catalog detail) has triggers that open a small floating
//! action menu. This crate decides where that menu goes, keeps it there
//! while the page scrolls or resizes, and closes it on outside clicks,
//! Escape, action selection or unmount, without leaking global listeners.
//!
//! ## Components
//!
//! - **geometry**: trigger rect + popover size + viewport -> [`Placement`]
//! - **state**: `Closed` / `Open(owner)` with toggle and exclusive-open
//! - **dismissal**: outside pointer-down and Escape
//! - **reflow**: resize and capture-phase scroll recompute placement
//! - **actions**: one or two menu entries that open an external URL
//! - **controller**: [`PopoverController`], the per-region owner of all of the above
//!
//! The host environment is reached only through [`ViewportPort`] and
//! [`Anchor`]; [`HeadlessViewport`] and [`HeadlessAnchor`] implement them in
//! memory.
//!
//! ## Quick Start
//!
//! ```ignore
//! use gearhire_core::{ActionContext, PopoverController, Region, SiteConfig};
//!
//! let config = SiteConfig::load_or_default("site.json")?;
//! let controller = PopoverController::new(
//!     Region::ProductGrid,
//!     viewport,
//!     config.region(Region::ProductGrid),
//!     navigator,
//! );
//! controller.register_trigger("tent-10x20".into(), anchor);
//! controller.activate_with("tent-10x20".into(), ActionContext::titled("Tent 10x20"));
//! ```

pub mod actions;
pub mod anchors;
pub mod config;
pub mod controller;
pub mod deeplink;
pub mod dismissal;
pub mod error;
pub mod geometry;
pub mod headless;
pub mod logging;
pub mod port;
pub mod reflow;
pub mod state;
pub mod types;

// Re-exports
pub use actions::{ActionContext, ActionIcon, ActionSpec, ActionTarget, Navigator, RecordingNavigator};
pub use anchors::TriggerRegistry;
pub use config::{RegionSettings, SiteConfig};
pub use controller::{ActionOutcome, CloseReason, PopoverController};
pub use deeplink::MessagingLink;
pub use error::{CoreResult, GearError};
pub use headless::{HeadlessAnchor, HeadlessViewport};
pub use port::{Anchor, EventHandler, ListenerKind, PointerTarget, Subscription, ViewportEvent, ViewportPort};
pub use state::{Transition, VisibilityMachine};
pub use types::*;
