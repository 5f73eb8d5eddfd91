//! Interaction summary built from session logs.
//!
//! Counts popover opens per region, closes per reason and external links
//! opened or failed, from the events the controller logs.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;

use super::entry::LogEntry;

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct InteractionStats {
    pub entries: usize,
    pub opens_by_region: BTreeMap<String, usize>,
    pub closes_by_reason: BTreeMap<String, usize>,
    pub links_opened: usize,
    pub navigation_failures: usize,
}

impl InteractionStats {
    pub fn from_entries(entries: &[LogEntry]) -> Self {
        let mut stats = Self {
            entries: entries.len(),
            ..Self::default()
        };

        for entry in entries {
            match entry.msg.as_str() {
                "Popover open" => {
                    let region = entry.field_str("region").unwrap_or("unknown");
                    *stats.opens_by_region.entry(region.to_string()).or_default() += 1;
                }
                "Popover closed" => {
                    let reason = entry.field_str("reason").unwrap_or("unknown");
                    *stats.closes_by_reason.entry(reason.to_string()).or_default() += 1;
                }
                "Opened external link" => stats.links_opened += 1,
                "External navigation failed" => stats.navigation_failures += 1,
                _ => {}
            }
        }
        stats
    }

    pub fn total_opens(&self) -> usize {
        self.opens_by_region.values().sum()
    }

    /// Plain-text table for terminal output.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Entries: {}", self.entries);
        let _ = writeln!(out, "Popover opens: {}", self.total_opens());
        for (region, count) in &self.opens_by_region {
            let _ = writeln!(out, "  {:<16} {}", region, count);
        }
        let _ = writeln!(out, "Closes:");
        for (reason, count) in &self.closes_by_reason {
            let _ = writeln!(out, "  {:<16} {}", reason, count);
        }
        let _ = writeln!(out, "Links opened: {}", self.links_opened);
        let _ = writeln!(out, "Navigation failures: {}", self.navigation_failures);
        out
    }
}
