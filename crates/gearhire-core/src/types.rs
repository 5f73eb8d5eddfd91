//! Core types for GearHire

use serde::{Deserialize, Serialize};

use crate::error::GearError;

/// Axis-aligned box in viewport (CSS pixel) coordinates.
///
/// Mirrors what `getBoundingClientRect()` reports for a trigger element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    /// Build a rect from an origin and a size.
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            top: y,
            left: x,
            right: x + width,
            bottom: y + height,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Width/height pair, used for both the viewport and the popover.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Where a popover is drawn, in fixed screen coordinates.
///
/// Derived on every open and every reflow; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub top: f64,
    pub left: f64,
    pub place_above: bool,
}

/// Stable identifier of a trigger within one region.
///
/// Hosts pick these (e.g. a product slug); they only need to be unique
/// among the triggers registered with the same controller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OwnerId(pub String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OwnerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for OwnerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Page region hosting one popover coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Hero,
    Navbar,
    Footer,
    EventGrid,
    ProductGrid,
    CatalogDetail,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Hero,
        Region::Navbar,
        Region::Footer,
        Region::EventGrid,
        Region::ProductGrid,
        Region::CatalogDetail,
    ];

    /// Kebab-case name used in config files, DOM ids and logs.
    pub fn slug(&self) -> &'static str {
        match self {
            Region::Hero => "hero",
            Region::Navbar => "navbar",
            Region::Footer => "footer",
            Region::EventGrid => "event-grid",
            Region::ProductGrid => "product-grid",
            Region::CatalogDetail => "catalog-detail",
        }
    }

    /// DOM id of the rendered popover panel for this region.
    pub fn popover_element_id(&self) -> String {
        format!("popover-{}", self.slug())
    }

    /// Estimated popover footprint for this region's menu.
    pub fn default_popover_size(&self) -> Size {
        match self {
            Region::Hero => Size::new(240.0, 96.0),
            Region::Navbar => Size::new(220.0, 92.0),
            Region::Footer => Size::new(220.0, 92.0),
            Region::EventGrid => Size::new(230.0, 92.0),
            Region::ProductGrid => Size::new(220.0, 84.0),
            Region::CatalogDetail => Size::new(240.0, 96.0),
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for Region {
    type Err = GearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.slug() == s)
            .ok_or_else(|| GearError::UnknownRegion(s.to_string()))
    }
}

/// Snapshot of one coordinator's popover.
///
/// `active_owner` and `placement` are either both set or both empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PopoverState {
    pub active_owner: Option<OwnerId>,
    pub placement: Option<Placement>,
}

impl PopoverState {
    pub fn is_open(&self) -> bool {
        self.active_owner.is_some()
    }

    pub fn is_open_for(&self, id: &OwnerId) -> bool {
        self.active_owner.as_ref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_from_origin_size() {
        let rect = Rect::from_origin_size(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect, Rect::new(20.0, 10.0, 40.0, 60.0));
        assert_eq!(rect.width(), 30.0);
        assert_eq!(rect.height(), 40.0);
    }

    #[test]
    fn region_slug_roundtrip() {
        for region in Region::ALL {
            assert_eq!(region.slug().parse::<Region>().unwrap(), region);
        }
        let err = "sidebar".parse::<Region>().unwrap_err();
        assert!(matches!(err, GearError::UnknownRegion(ref slug) if slug == "sidebar"));
        assert_eq!(err.to_string(), "unknown region 'sidebar'");
    }

    #[test]
    fn region_popover_sizes_in_expected_range() {
        for region in Region::ALL {
            let size = region.default_popover_size();
            assert!((220.0..=240.0).contains(&size.width), "{region}");
            assert!((84.0..=96.0).contains(&size.height), "{region}");
        }
    }

    #[test]
    fn region_serializes_as_slug() {
        let json = serde_json::to_string(&Region::EventGrid).unwrap();
        assert_eq!(json, "\"event-grid\"");
    }

    #[test]
    fn popover_state_default_is_closed() {
        let state = PopoverState::default();
        assert!(!state.is_open());
        assert!(!state.is_open_for(&OwnerId::from("a")));
    }
}
