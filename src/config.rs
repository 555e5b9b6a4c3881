//! Mapping store location
//!
//! The persisted mapping file lives at a well-known path under the
//! per-user data directory; the host application does not pass a path for
//! the common case.

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::PathBuf;

/// File name of the persisted mapping store.
pub const TZMAP_FILE: &str = "tzmap.xml";

/// Resolve the mapping store path, creating its directory if needed.
pub fn mapping_file_path() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .ok_or_else(|| anyhow!("Could not determine user data directory"))?
        .join("tzmap");
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
    Ok(dir.join(TZMAP_FILE))
}
