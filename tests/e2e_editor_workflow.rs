use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use tempfile::tempdir;
use tzmap::{Column, ErrorSink, KnownTimezoneSet, MappingSession, TzMapError};

/// Test double for the host's diagnostic pipeline.
#[derive(Clone, Default)]
struct RecordingSink {
    errors: Rc<RefCell<Vec<String>>>,
}

impl RecordingSink {
    fn handle(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.errors)
    }
}

impl ErrorSink for RecordingSink {
    fn report(&mut self, err: &TzMapError) {
        self.errors.borrow_mut().push(err.to_string());
    }
}

#[test]
fn test_full_editing_workflow() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tzmap.xml");
    let sink = RecordingSink::default();
    let errors = sink.handle();

    // 1. A sync run found an unmapped organiser timezone; the editor opens
    //    pre-seeded with the resolved pair.
    let mut session = MappingSession::open_seeded(
        &path,
        "Pacific Standard Time",
        "America/Los_Angeles",
        KnownTimezoneSet::from_host(),
        sink,
    );

    // 2. The user adds a second mapping.
    session
        .add_mapping("Central European Time", "Europe/Berlin")
        .unwrap();

    // Two populated rows in order, plus the trailing "next entry" row.
    let rows = session.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].organiser_tz, "Pacific Standard Time");
    assert_eq!(rows[1].organiser_tz, "Central European Time");
    assert!(rows[2].is_blank());

    // 3. Save closes the session.
    session.finish(&path).unwrap();
    assert!(errors.borrow().is_empty());

    // 4. Reopening reproduces both mappings exactly.
    let sink = RecordingSink::default();
    let errors = sink.handle();
    let session = MappingSession::open(&path, KnownTimezoneSet::from_host(), sink);
    let rows = session.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].system_tz, "America/Los_Angeles");
    assert_eq!(rows[1].system_tz, "Europe/Berlin");
    assert!(rows[2].is_blank());
    assert!(errors.borrow().is_empty());
}

#[test]
fn test_invalid_dropdown_value_is_cleared_and_reported_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tzmap.xml");
    let sink = RecordingSink::default();
    let errors = sink.handle();

    let mut session = MappingSession::open(&path, KnownTimezoneSet::from_host(), sink);
    session
        .commit_cell(0, Column::OrganiserTz, "Some Remote Zone")
        .unwrap();

    let result = session.commit_cell(0, Column::SystemTz, "Not/AZone");
    assert!(result.is_err());

    // The whole row was cleared, not removed.
    assert!(session.rows()[0].is_blank());

    let recorded = errors.borrow();
    assert_eq!(recorded.len(), 1);
    assert!(recorded[0].contains("Cell[0][SystemTz]"));
    assert!(recorded[0].contains("Not/AZone"));
}

#[test]
fn test_corrupt_store_opens_with_partial_table() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tzmap.xml");
    fs::write(
        &path,
        "<TimeZoneMaps>\
           <TimeZoneMap><OrganiserTz>GMT Standard Time</OrganiserTz><SystemTz>Europe/London</SystemTz></TimeZoneMap>\
           <oops></TimeZoneMaps>",
    )
    .unwrap();

    let sink = RecordingSink::default();
    let errors = sink.handle();
    let session = MappingSession::open(&path, KnownTimezoneSet::from_host(), sink);

    // The valid prefix survived and the load failure went to the sink.
    assert_eq!(session.rows()[0].organiser_tz, "GMT Standard Time");
    assert_eq!(errors.borrow().len(), 1);
    assert!(errors.borrow()[0].contains("Could not load timezone mappings"));
}

#[test]
fn test_save_failure_reports_but_session_still_ends() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tzmap.xml");
    let sink = RecordingSink::default();
    let errors = sink.handle();

    let mut session = MappingSession::open(&path, KnownTimezoneSet::from_host(), sink);
    session
        .add_mapping("Tokyo Standard Time", "Asia/Tokyo")
        .unwrap();

    let unwritable = dir.path().join("missing-subdir").join("tzmap.xml");
    let result = session.finish(&unwritable);
    assert!(matches!(result, Err(TzMapError::Save(_))));
    assert_eq!(errors.borrow().len(), 1);
    assert!(errors.borrow()[0].contains("Could not save timezone mappings"));
}
