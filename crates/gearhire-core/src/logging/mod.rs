//! Session logging with JSONL storage.
//!
//! Every app launch writes its `tracing` events to its own append-only file,
//! which the CLI can later summarize.
//!
//! ```text
//! logs/
//! ├── 2026-10-19_desktop.jsonl
//! └── 2026-10-19_cli.jsonl
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use gearhire_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new("desktop")
//!     .with_verbosity(2)
//!     .with_logs_dir(Some("./logs".into()))
//!     .init()?;
//! ```
//!
//! ## Querying with jq
//!
//! ```bash
//! # Every placement flip above the trigger
//! jq 'select(.msg == "Popover open" and .fields.place_above == true)' logs/*.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod report;
pub mod writer;

pub use entry::LogEntry;
pub use layer::{JsonlLayer, LoggingBuilder};
pub use report::InteractionStats;
pub use writer::{read_entries, SessionLogWriter};
