//! Color constants for the GearHire palette.
//!
//! Mirrored as CSS custom properties in [`super::GLOBAL_STYLES`].

#![allow(dead_code)]

// === CANVAS (Backgrounds) ===
pub const CANVAS: &str = "#faf7f2";
pub const SURFACE: &str = "#ffffff";
pub const BORDER: &str = "#e4ddd2";

// === CANVAS GREEN (Brand, Primary actions) ===
pub const CANVAS_GREEN: &str = "#2f6b4f";
pub const CANVAS_GREEN_DARK: &str = "#224f3a";

// === SUN (Highlights, Prices) ===
pub const SUN: &str = "#e8a33d";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#1f2421";
pub const TEXT_SECONDARY: &str = "#5b635e";
pub const TEXT_MUTED: &str = "#8c938f";

// === SEMANTIC ===
pub const SHADOW: &str = "rgba(31, 36, 33, 0.16)";
