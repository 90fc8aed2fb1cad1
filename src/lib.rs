//! Mask driven date/time formatting for log output.
//!
//! The crate renders a [`Timestamp`] through a date mask
//! ([`format::date_format`]) and a whole [`LogEvent`] through a `%` layout
//! pattern ([`layout::format_event`]). Both entry points are pure functions:
//! they never fail, never touch I/O and never hold state between calls.

pub mod format;
pub mod layout;
pub mod types;

pub(crate) mod core;

pub use crate::format::date_format;
pub use crate::layout::format_event;
pub use crate::types::errors::ParseLevelError;
pub use crate::types::event::LogEvent;
pub use crate::types::level::LogLevel;
pub use crate::types::timestamp::{Components, Timestamp};
