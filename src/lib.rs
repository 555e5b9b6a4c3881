// tzmap Library
// Timezone mapping store for a calendar synchronization engine: maps
// organiser timezone identifiers reported by a remote calendar service to
// local system timezone identifiers.

pub mod config;
pub mod error;
pub mod models;
pub mod persistence;
pub mod report;
pub mod session;
pub mod timezones;
pub mod utils;

// Re-export commonly used types
pub use error::{TzMapError, TzMapResult};
pub use models::{Column, MappingTable, TimezoneMapping};
pub use report::{ErrorSink, LogSink};
pub use session::MappingSession;
pub use timezones::KnownTimezoneSet;
