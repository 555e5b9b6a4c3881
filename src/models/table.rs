use crate::error::{TzMapError, TzMapResult};
use crate::models::{Column, TimezoneMapping};

/// Ordered table of timezone mappings for one editing session.
///
/// Insertion order is meaningful: it reflects file order and determines
/// display order in the host grid. The table always carries a trailing
/// placeholder row (empty `organiser_tz`) as the next insertion target,
/// and never more than one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    rows: Vec<TimezoneMapping>,
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MappingTable {
    /// An empty table: a single placeholder row, nothing else.
    pub fn new() -> Self {
        Self {
            rows: vec![TimezoneMapping::placeholder()],
        }
    }

    /// Pre-seed one mapping, used when the editor opens in response to an
    /// unmapped organiser timezone detected during a sync run.
    pub fn with_seed(organiser_tz: &str, system_tz: &str) -> Self {
        let mut table = Self::new();
        // A freshly created table has its placeholder row, so the append
        // cannot fail structurally.
        if let Err(err) = table.append_or_insert(organiser_tz, system_tz) {
            log::error!("Seeding mapping table failed: {}", err);
        }
        table
    }

    pub fn rows(&self) -> &[TimezoneMapping] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Write a mapping into the table, growing it by exactly one logical
    /// entry. The last row is the insertion target: if its organiser cell is
    /// already taken, a fresh row is inserted after it; if it is the
    /// placeholder, the values land directly in it. Returns the row index
    /// written.
    pub fn append_or_insert(&mut self, organiser_tz: &str, system_tz: &str) -> TzMapResult<usize> {
        let last = self
            .rows
            .len()
            .checked_sub(1)
            .ok_or_else(|| TzMapError::structural("table has no rows, expected a placeholder"))?;

        let target = if self.rows[last].organiser_tz.is_empty() {
            last
        } else {
            self.rows.insert(last + 1, TimezoneMapping::placeholder());
            last + 1
        };

        let row = &mut self.rows[target];
        row.organiser_tz = organiser_tz.to_string();
        row.system_tz = system_tz.to_string();
        Ok(target)
    }

    /// Write a single cell in place. Used by the grid commit path; does not
    /// validate the value (that is the session's job) and does not grow the
    /// table.
    pub fn set_cell(&mut self, row: usize, column: Column, value: &str) -> TzMapResult<()> {
        let mapping = self.rows.get_mut(row).ok_or_else(|| {
            TzMapError::structural(format!("cell commit to missing row {}", row))
        })?;
        match column {
            Column::OrganiserTz => mapping.organiser_tz = value.to_string(),
            Column::SystemTz => mapping.system_tz = value.to_string(),
        }
        Ok(())
    }

    /// Clear both fields of a row in place. Row count is stable across
    /// invalidation so caller-held indices stay valid.
    pub fn invalidate(&mut self, row: usize) -> TzMapResult<()> {
        let mapping = self.rows.get_mut(row).ok_or_else(|| {
            TzMapError::structural(format!("invalidate on missing row {}", row))
        })?;
        mapping.clear();
        Ok(())
    }

    /// Re-establish the trailing "next entry" row after an edit filled it.
    pub fn ensure_placeholder(&mut self) {
        match self.rows.last() {
            Some(last) if last.organiser_tz.is_empty() => {}
            _ => self.rows.push(TimezoneMapping::placeholder()),
        }
    }

    /// The ordered rows worth persisting: organiser cell non-empty and
    /// non-whitespace. Pure projection, never mutates.
    pub fn compact_for_save(&self) -> Vec<TimezoneMapping> {
        self.rows
            .iter()
            .filter(|row| !row.is_placeholder())
            .cloned()
            .collect()
    }
}
