//! Static rental catalog shown on the site.

/// An event type on the landing page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventType {
    pub slug: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

/// A rentable item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub slug: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    /// Price per day in whole currency units
    pub daily_rate: u32,
    pub summary: &'static str,
}

pub const EVENT_TYPES: &[EventType] = &[
    EventType {
        slug: "wedding",
        title: "Wedding",
        blurb: "Tents, round tables, linen and lighting for up to 300 guests.",
    },
    EventType {
        slug: "birthday",
        title: "Birthday party",
        blurb: "Kids' tables, inflatables and shade for the backyard.",
    },
    EventType {
        slug: "corporate",
        title: "Corporate event",
        blurb: "Stages, projectors and cocktail tables for launches and talks.",
    },
    EventType {
        slug: "festival",
        title: "Festival",
        blurb: "Large-format tents, generators and crowd barriers.",
    },
];

pub const PRODUCTS: &[Product] = &[
    Product {
        slug: "tent-10x20",
        title: "Tent 10x20",
        category: "Tents",
        daily_rate: 180,
        summary: "White frame tent with removable side walls. Seats 40.",
    },
    Product {
        slug: "folding-chair",
        title: "Folding chair",
        category: "Seating",
        daily_rate: 2,
        summary: "Padded white folding chair, sold in packs of ten.",
    },
    Product {
        slug: "round-table",
        title: "Round table (8 seats)",
        category: "Tables",
        daily_rate: 12,
        summary: "60-inch round banquet table. Linen available.",
    },
    Product {
        slug: "cocktail-table",
        title: "Cocktail table",
        category: "Tables",
        daily_rate: 9,
        summary: "High-top table with stretch cover in black or white.",
    },
    Product {
        slug: "dance-floor",
        title: "Dance floor (4x4 m)",
        category: "Staging",
        daily_rate: 240,
        summary: "Interlocking parquet panels, installed on site.",
    },
    Product {
        slug: "string-lights",
        title: "String lights (20 m)",
        category: "Lighting",
        daily_rate: 25,
        summary: "Warm-white festoon lights with outdoor-rated cabling.",
    },
    Product {
        slug: "projector",
        title: "Projector and screen",
        category: "Audio & video",
        daily_rate: 95,
        summary: "5000-lumen projector with a 3 m tripod screen.",
    },
    Product {
        slug: "generator",
        title: "Silent generator 7 kW",
        category: "Power",
        daily_rate: 150,
        summary: "Inverter generator with fuel for eight hours.",
    },
];

pub fn find_product(slug: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.slug == slug)
}
