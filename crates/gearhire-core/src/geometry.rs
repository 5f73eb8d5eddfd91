//! Geometry resolver: trigger rect + popover size + viewport size -> placement.
//!
//! Pure functions only; every input yields a placement.

use crate::types::{Placement, Rect, Size};

/// Minimum distance kept between the popover and the viewport edges.
pub const EDGE_MARGIN: f64 = 8.0;

/// Extra room required above the trigger before flipping upwards.
pub const FLIP_CLEARANCE: f64 = 12.0;

/// Gap between the trigger and the popover.
pub const ANCHOR_GAP: f64 = 8.0;

/// Place a popover next to its trigger.
///
/// Prefers below; flips above when the space above exceeds both the popover
/// height plus clearance and the space below. The popover's right edge is
/// aligned with the trigger's, then clamped into the viewport.
pub fn resolve(rect: Rect, popover: Size, viewport: Size) -> Placement {
    let space_above = rect.top;
    let space_below = viewport.height - rect.bottom;
    let place_above = space_above > popover.height + FLIP_CLEARANCE && space_above > space_below;

    let top = if place_above {
        rect.top - popover.height - ANCHOR_GAP
    } else {
        rect.bottom + ANCHOR_GAP
    };

    Placement {
        top,
        left: clamp_left(rect.right - popover.width, popover, viewport),
        place_above,
    }
}

/// Centered placement used when no live trigger rect is available.
pub fn centered(popover: Size, viewport: Size) -> Placement {
    let top = (viewport.height / 2.0 - popover.height / 2.0).max(EDGE_MARGIN);
    let left = clamp_left(viewport.width / 2.0 - popover.width / 2.0, popover, viewport);

    Placement {
        top,
        left,
        place_above: false,
    }
}

/// [`resolve`] when a rect is known, [`centered`] otherwise.
pub fn resolve_or_center(rect: Option<Rect>, popover: Size, viewport: Size) -> Placement {
    match rect {
        Some(rect) => resolve(rect, popover, viewport),
        None => centered(popover, viewport),
    }
}

/// Clamp into `[EDGE_MARGIN, viewport.width - popover.width - EDGE_MARGIN]`.
///
/// On a viewport too narrow for the popover the lower bound wins.
fn clamp_left(raw: f64, popover: Size, viewport: Size) -> f64 {
    let max_left = viewport.width - popover.width - EDGE_MARGIN;
    raw.min(max_left).max(EDGE_MARGIN)
}
