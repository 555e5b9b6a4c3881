use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the mapping table: a timezone identifier as reported by the
/// remote calendar service, paired with the local system identifier it
/// should be translated to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneMapping {
    pub organiser_tz: String,
    pub system_tz: String,
}

impl TimezoneMapping {
    pub fn new<O: Into<String>, S: Into<String>>(organiser_tz: O, system_tz: S) -> Self {
        Self {
            organiser_tz: organiser_tz.into(),
            system_tz: system_tz.into(),
        }
    }

    /// The "next entry" row the grid keeps at the bottom of the table.
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// A row with no usable organiser identifier is skipped at save time.
    pub fn is_placeholder(&self) -> bool {
        self.organiser_tz.trim().is_empty()
    }

    pub fn is_blank(&self) -> bool {
        self.organiser_tz.is_empty() && self.system_tz.is_empty()
    }

    pub fn clear(&mut self) {
        self.organiser_tz.clear();
        self.system_tz.clear();
    }
}

/// The two cells of a mapping row, used to address commits and
/// validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Column {
    OrganiserTz,
    SystemTz,
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::OrganiserTz => write!(f, "OrganiserTz"),
            Column::SystemTz => write!(f, "SystemTz"),
        }
    }
}
