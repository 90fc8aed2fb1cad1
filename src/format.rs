use crate::core::mask;
use crate::types::timestamp::Timestamp;

/// Formats a timestamp according to a mask.
///
/// The mask is either one of the predefined names (`DEFAULT`, `ABSOLUTE`,
/// `COMPACT`, `DATE`, `ISO8601`, `ISO8601_BASIC`) or a literal token pattern;
/// `None` and the empty string mean `DEFAULT`. A literal mask starting with
/// `UTC:` formats the UTC wall clock instead of the local one.
///
/// Every call is pure: the same timestamp and mask always produce the same
/// bytes, and no input makes the function fail.
pub fn date_format(timestamp: &Timestamp, mask: Option<&str>) -> String {
    let (pattern, is_utc) = mask::resolve(mask);
    let parts = timestamp.components(is_utc);

    // timezone fields are fixed in UTC mode
    let zone: String = if is_utc {
        "UTC".to_string()
    } else {
        mask::zone_abbreviation(&timestamp.zone_text())
    };
    let offset_minutes: i32 = if is_utc { 0 } else { timestamp.offset_minutes() };

    mask::substitute(pattern, &parts, &zone, offset_minutes)
}
