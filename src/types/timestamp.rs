use chrono::{DateTime, Datelike, FixedOffset, Local, TimeZone, Timelike, Utc};

/// An instant in time carrying its local UTC offset.
///
/// `Timestamp` wraps a [`DateTime<FixedOffset>`] so the same instant can be
/// read either through its local wall clock or shifted to UTC. The offset is
/// frozen at construction; a `Timestamp` never consults the environment
/// again after it is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timestamp {
    value: DateTime<FixedOffset>,
}

impl Timestamp {
    /// Captures the current instant with the system's local offset.
    pub fn now() -> Self {
        Local::now().into()
    }

    /// Extracts the clock components, reading the instant either as local
    /// wall time or shifted to UTC.
    pub fn components(&self, utc: bool) -> Components {
        if utc {
            Components::read(&self.value.with_timezone(&Utc))
        } else {
            Components::read(&self.value)
        }
    }

    /// Minutes the local clock lags behind UTC; negative east of Greenwich.
    pub fn offset_minutes(&self) -> i32 {
        -(self.value.offset().local_minus_utc() / 60)
    }

    /// Textual rendering of the local instant, the shape timezone
    /// abbreviations are extracted from (e.g. `Thu Mar 04 2021 05:06:07
    /// GMT+0100`).
    pub(crate) fn zone_text(&self) -> String {
        self.value.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self { value }
    }
}

impl From<DateTime<Local>> for Timestamp {
    fn from(value: DateTime<Local>) -> Self {
        Self {
            value: value.fixed_offset(),
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self {
            value: value.fixed_offset(),
        }
    }
}

/// Clock components of a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Components {
    /// Day of week, 0 = Sunday.
    pub week_day: u32,
    /// Day of month, 1-31.
    pub day: u32,
    /// Month index, 0 = January.
    pub month0: u32,
    /// Full year.
    pub year: i32,
    /// Hour, 0-23.
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl Components {
    fn read<Tz: TimeZone>(value: &DateTime<Tz>) -> Self {
        Self {
            week_day: value.weekday().num_days_from_sunday(),
            day: value.day(),
            month0: value.month0(),
            year: value.year(),
            hour: value.hour(),
            minute: value.minute(),
            second: value.second(),
            millisecond: value.timestamp_subsec_millis(),
        }
    }
}
