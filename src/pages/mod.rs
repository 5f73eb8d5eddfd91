//! Page components for GearHire.

mod catalog_detail;
mod landing;

pub use catalog_detail::CatalogDetail;
pub use landing::Landing;
