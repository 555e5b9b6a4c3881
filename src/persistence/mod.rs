//! Round-trip persistence of the mapping table.
//!
//! On-disk format: UTF-8 XML, root `TimeZoneMaps`, one `TimeZoneMap`
//! record per mapping with `OrganiserTz` and `SystemTz` text fields.
//! A missing file, or a file with no root element, is valid and means
//! zero mappings.

use crate::error::{TzMapError, TzMapResult};
use crate::models::{MappingTable, TimezoneMapping};
use log::debug;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

const ROOT_TAG: &str = "TimeZoneMaps";
const RECORD_TAG: &str = "TimeZoneMap";
const ORGANISER_TAG: &str = "OrganiserTz";
const SYSTEM_TAG: &str = "SystemTz";

/// Load mapping records from `path` into `table`, in document order, via
/// the table's append-or-insert rule (an existing placeholder is filled
/// first, later records insert fresh rows).
///
/// A missing file or a structurally empty document is not an error. A
/// parse failure partway through returns `Load`; rows assembled before the
/// failure stay in the table so the caller can log and proceed.
pub fn load_into(table: &mut MappingTable, path: &Path) -> TzMapResult<()> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => {
            return Err(TzMapError::load(format!("{}: {}", path.display(), err)));
        }
    };
    debug!("Loading timezone mappings from {}", path.display());

    if content.trim().is_empty() {
        debug!("{} is empty", path.display());
        return Ok(());
    }

    let mut reader = Reader::from_str(&content);
    reader.trim_text(true);

    enum Field {
        None,
        Organiser,
        System,
    }

    let mut in_record = false;
    let mut field = Field::None;
    let mut organiser = String::new();
    let mut system = String::new();
    let mut saw_root = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref tag)) => {
                saw_root = true;
                match tag.local_name().as_ref() {
                    b"TimeZoneMap" => {
                        in_record = true;
                        organiser.clear();
                        system.clear();
                    }
                    b"OrganiserTz" if in_record => field = Field::Organiser,
                    b"SystemTz" if in_record => field = Field::System,
                    _ => {}
                }
            }
            Ok(Event::Text(text)) => {
                let value = text
                    .unescape()
                    .map_err(|err| TzMapError::load(err.to_string()))?;
                match field {
                    Field::Organiser => organiser.push_str(&value),
                    Field::System => system.push_str(&value),
                    Field::None => {}
                }
            }
            Ok(Event::End(ref tag)) => match tag.local_name().as_ref() {
                b"TimeZoneMap" => {
                    in_record = false;
                    table.append_or_insert(&organiser, &system)?;
                }
                b"OrganiserTz" | b"SystemTz" => field = Field::None,
                _ => {}
            },
            Ok(Event::Empty(_)) => saw_root = true,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(TzMapError::load(format!(
                    "{} at position {}",
                    err,
                    reader.buffer_position()
                )));
            }
        }
    }

    if !saw_root {
        // Declaration-only documents land here, same as a zero-byte file.
        debug!("{} has no root element", path.display());
    }
    Ok(())
}

/// Strict convenience form of [`load_into`] starting from an empty table.
pub fn load(path: &Path) -> TzMapResult<MappingTable> {
    let mut table = MappingTable::new();
    load_into(&mut table, path)?;
    Ok(table)
}

/// Persist the table's compacted rows to `path`.
///
/// The document is written to a sibling temporary file and renamed over
/// the target, so a failure leaves any prior content untouched.
pub fn save(path: &Path, table: &MappingTable) -> TzMapResult<()> {
    let rows = table.compact_for_save();
    let tmp_path = sibling_tmp_path(path);

    let result = write_document(&tmp_path, &rows)
        .and_then(|_| fs::rename(&tmp_path, path).map_err(Into::into));

    match result {
        Ok(()) => {
            debug!("Saved {} timezone mappings to {}", rows.len(), path.display());
            Ok(())
        }
        Err(err) => {
            let _ = fs::remove_file(&tmp_path);
            Err(TzMapError::save(format!("{}: {}", path.display(), err)))
        }
    }
}

fn sibling_tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

fn write_document(path: &Path, rows: &[TimezoneMapping]) -> Result<(), quick_xml::Error> {
    let file = File::create(path)?;
    let mut writer = Writer::new_with_indent(BufWriter::new(file), b' ', 4);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new(ROOT_TAG)))?;
    for row in rows {
        writer.write_event(Event::Start(BytesStart::new(RECORD_TAG)))?;

        writer.write_event(Event::Start(BytesStart::new(ORGANISER_TAG)))?;
        writer.write_event(Event::Text(BytesText::new(&row.organiser_tz)))?;
        writer.write_event(Event::End(BytesEnd::new(ORGANISER_TAG)))?;

        writer.write_event(Event::Start(BytesStart::new(SYSTEM_TAG)))?;
        writer.write_event(Event::Text(BytesText::new(&row.system_tz)))?;
        writer.write_event(Event::End(BytesEnd::new(SYSTEM_TAG)))?;

        writer.write_event(Event::End(BytesEnd::new(RECORD_TAG)))?;
    }
    writer.write_event(Event::End(BytesEnd::new(ROOT_TAG)))?;

    let mut out = writer.into_inner();
    out.flush()?;
    Ok(())
}
