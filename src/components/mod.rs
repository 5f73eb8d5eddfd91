//! Page regions. Each one hosts its own popover.

mod event_grid;
mod footer;
mod hero_promo;
mod navbar;
mod product_grid;

pub use event_grid::EventGrid;
pub use footer::Footer;
pub use hero_promo::HeroPromo;
pub use navbar::Navbar;
pub use product_grid::ProductGrid;
