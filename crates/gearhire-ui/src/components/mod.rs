//! Popover components and the buttons they are built from.

mod action_menu;
mod button;
mod trigger;

pub use action_menu::*;
pub use button::*;
pub use trigger::*;
