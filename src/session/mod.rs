//! Editing session over the mapping table.
//!
//! The grid host binds here: ordered rows for rendering, per-cell commits
//! routed through validation, and the save trigger. The session owns the
//! table for its lifetime and reports every failure through the host's
//! [`ErrorSink`]; nothing here is allowed to end the session abnormally.

use crate::error::{TzMapError, TzMapResult};
use crate::models::{Column, MappingTable, TimezoneMapping};
use crate::persistence;
use crate::report::ErrorSink;
use crate::timezones::KnownTimezoneSet;
use log::info;
use std::path::Path;

pub struct MappingSession<S: ErrorSink> {
    table: MappingTable,
    known: KnownTimezoneSet,
    sink: S,
}

impl<S: ErrorSink> MappingSession<S> {
    /// Open an editing session over the mapping store at `path`.
    ///
    /// Load failures are reported, not propagated: the editor opens with
    /// whatever rows were assembled before the failure, or empty.
    pub fn open(path: &Path, known: KnownTimezoneSet, mut sink: S) -> Self {
        info!("Opening timezone mapping editor");
        let mut table = MappingTable::new();
        if let Err(err) = persistence::load_into(&mut table, path) {
            sink.report(&err);
        }
        table.ensure_placeholder();
        Self { table, known, sink }
    }

    /// Open a session pre-seeded with one mapping, used when a sync run
    /// hits an organiser timezone with no mapping yet.
    pub fn open_seeded(
        path: &Path,
        organiser_tz: &str,
        system_tz: &str,
        known: KnownTimezoneSet,
        sink: S,
    ) -> Self {
        let mut session = Self::open(path, known, sink);
        // Seed errors are already routed to the sink; the editor still opens.
        let _ = session.add_mapping(organiser_tz, system_tz);
        session
    }

    /// Ordered rows for the grid to render.
    pub fn rows(&self) -> &[TimezoneMapping] {
        self.table.rows()
    }

    /// The immutable timezone catalogue backing the dropdown column.
    pub fn known_timezones(&self) -> &KnownTimezoneSet {
        &self.known
    }

    /// Append one logical mapping through the table's append-or-insert
    /// rule, then re-establish the trailing placeholder.
    pub fn add_mapping(&mut self, organiser_tz: &str, system_tz: &str) -> TzMapResult<usize> {
        match self.table.append_or_insert(organiser_tz, system_tz) {
            Ok(row) => {
                self.table.ensure_placeholder();
                Ok(row)
            }
            Err(err) => Err(self.report(err)),
        }
    }

    /// Commit one edited cell.
    ///
    /// An invalid system timezone clears the whole row (count stays
    /// stable), reports exactly one validation error, and returns it so
    /// the grid can refresh the affected row.
    pub fn commit_cell(&mut self, row: usize, column: Column, value: &str) -> TzMapResult<()> {
        if column == Column::SystemTz && !self.known.is_valid_system_tz(value) {
            self.table.invalidate(row).map_err(|err| self.report(err))?;
            let err = TzMapError::validation(row, column, value);
            self.sink.report(&err);
            return Err(err);
        }

        self.table
            .set_cell(row, column, value)
            .map_err(|err| self.report(err))?;
        self.table.ensure_placeholder();
        Ok(())
    }

    /// Save and end the session. A save failure is reported and returned,
    /// but the session is consumed either way: persistence trouble never
    /// blocks closing the editor.
    pub fn finish(mut self, path: &Path) -> TzMapResult<()> {
        let rows = self.table.compact_for_save();
        info!("Saving {} timezone mappings", rows.len());
        persistence::save(path, &self.table).map_err(|err| self.report(err))
    }

    fn report(&mut self, err: TzMapError) -> TzMapError {
        self.sink.report(&err);
        err
    }
}
