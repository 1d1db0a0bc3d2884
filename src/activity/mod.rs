//! Activity logging for the console tracker
//!
//! Tracker operations can be recorded in an append-only JSON-lines file.
//! The log is a diagnostic trail only; nothing reads it back into a tracker.
//!
//! - `ActivityEntry`: timestamp, event kind, optional day and the serialized
//!   outcome of the operation.
//! - `ActivityLogger`: appends entries and reads them back.

mod entry;
mod logger;

pub use entry::{ActivityEntry, ActivityKind};
pub use logger::ActivityLogger;
