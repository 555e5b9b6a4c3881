//! Known system timezones for the editing session.
//!
//! The host platform's timezone catalogue is consumed once per session and
//! treated as immutable thereafter. It populates the grid's selectable
//! values and is the reference set for validating edited cells.

use chrono::{Offset, TimeZone, Utc};
use chrono_tz::TZ_VARIANTS;
use std::collections::BTreeMap;

/// Read-only map from system timezone identifier to a human-readable
/// display name, e.g. `"Europe/Berlin"` -> `"(UTC+02:00) Europe/Berlin"`.
///
/// Iteration is ordered by identifier so dropdown population is
/// deterministic.
#[derive(Debug, Clone)]
pub struct KnownTimezoneSet {
    entries: BTreeMap<String, String>,
}

impl KnownTimezoneSet {
    /// Build the set from the embedded IANA database, stamping each zone
    /// with its current UTC offset.
    pub fn from_host() -> Self {
        let now = Utc::now().naive_utc();
        let entries = TZ_VARIANTS
            .iter()
            .map(|tz| {
                let offset = tz.offset_from_utc_datetime(&now).fix();
                (
                    tz.name().to_string(),
                    format!("(UTC{}) {}", offset, tz.name()),
                )
            })
            .collect();
        Self { entries }
    }

    /// Build the set from caller-supplied (identifier, display name) pairs.
    pub fn from_entries<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    /// A system timezone cell is valid iff it is empty or names a known
    /// identifier.
    pub fn is_valid_system_tz(&self, value: &str) -> bool {
        value.is_empty() || self.contains(value)
    }

    pub fn display_name(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
