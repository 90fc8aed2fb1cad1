use crate::core::names::{DAY_NAMES, MONTH_NAMES};
use crate::types::timestamp::Components;

/// Renders a single matched token, or `None` when the match has no table
/// entry (quoted literals, `L`/`l`) and must pass through unchanged.
pub(crate) fn value(
    token: &str,
    c: &Components,
    zone: &str,
    offset_minutes: i32,
) -> Option<String> {
    let rendered: String = match token {
        "d" => c.day.to_string(),
        "dd" => pad(c.day, 2),
        "ddd" => DAY_NAMES[c.week_day as usize].to_string(),
        "dddd" => DAY_NAMES[c.week_day as usize + 7].to_string(),
        "M" => (c.month0 + 1).to_string(),
        "MM" => pad(c.month0 + 1, 2),
        "MMM" => MONTH_NAMES[c.month0 as usize].to_string(),
        "MMMM" => MONTH_NAMES[c.month0 as usize + 12].to_string(),
        "yy" => short_year(c.year),
        "yyyy" => c.year.to_string(),
        "h" => twelve_hour(c.hour).to_string(),
        "hh" => pad(twelve_hour(c.hour), 2),
        "H" => c.hour.to_string(),
        "HH" => pad(c.hour, 2),
        "m" => c.minute.to_string(),
        "mm" => pad(c.minute, 2),
        "s" => c.second.to_string(),
        "ss" => pad(c.second, 2),
        "S" => pad(c.millisecond, 1),
        "a" => if c.hour < 12 { "a" } else { "p" }.to_string(),
        "aa" => if c.hour < 12 { "am" } else { "pm" }.to_string(),
        "A" => if c.hour < 12 { "A" } else { "P" }.to_string(),
        "AA" => if c.hour < 12 { "AM" } else { "PM" }.to_string(),
        "Z" => zone.to_string(),
        "o" => utc_offset_field(offset_minutes),
        _ => return None,
    };
    Some(rendered)
}

/// Zero-pads to a minimum width; values already wide enough are unchanged.
fn pad(value: u32, width: usize) -> String {
    format!("{value:0width$}")
}

/// Hour on the 12-hour dial: 0 and 12 both render as 12.
fn twelve_hour(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// Year with its first two characters dropped: 2021 gives "21", 985 gives
/// "5".
fn short_year(year: i32) -> String {
    let digits: String = year.to_string();
    digits.get(2..).unwrap_or("").to_string()
}

/// Signed four-digit offset field, `-0500` style. A positive minute offset
/// (local behind UTC) renders with a `-` sign.
fn utc_offset_field(offset_minutes: i32) -> String {
    let sign: char = if offset_minutes > 0 { '-' } else { '+' };
    let magnitude: u32 = offset_minutes.unsigned_abs();
    format!("{sign}{:04}", (magnitude / 60) * 100 + magnitude % 60)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn parts() -> Components {
        Components {
            week_day: 4,
            day: 4,
            month0: 2,
            year: 2021,
            hour: 5,
            minute: 6,
            second: 7,
            millisecond: 8,
        }
    }

    #[rstest]
    #[case("d", "4")]
    #[case("dd", "04")]
    #[case("ddd", "Thu")]
    #[case("dddd", "Thursday")]
    #[case("M", "3")]
    #[case("MM", "03")]
    #[case("MMM", "Mar")]
    #[case("MMMM", "March")]
    #[case("yy", "21")]
    #[case("yyyy", "2021")]
    #[case("h", "5")]
    #[case("hh", "05")]
    #[case("H", "5")]
    #[case("HH", "05")]
    #[case("m", "6")]
    #[case("mm", "06")]
    #[case("s", "7")]
    #[case("ss", "07")]
    #[case("S", "8")]
    #[case("a", "a")]
    #[case("aa", "am")]
    #[case("A", "A")]
    #[case("AA", "AM")]
    fn test_token_table(#[case] token: &str, #[case] expected: &str) {
        assert_eq!(value(token, &parts(), "", 0).as_deref(), Some(expected));
    }

    #[rstest]
    #[case("L")]
    #[case("l")]
    #[case("'quoted'")]
    #[case("q")]
    fn test_entry_less_matches_pass_through(#[case] token: &str) {
        assert_eq!(value(token, &parts(), "", 0), None);
    }

    #[rstest]
    fn test_zone_is_emitted_verbatim() {
        assert_eq!(
            value("Z", &parts(), "GMT+0100", -60).as_deref(),
            Some("GMT+0100")
        );
    }

    #[rstest]
    #[case(300, "-0500")]
    #[case(-60, "+0100")]
    #[case(0, "+0000")]
    #[case(-90, "+0130")]
    fn test_offset_field(#[case] offset_minutes: i32, #[case] expected: &str) {
        assert_eq!(utc_offset_field(offset_minutes), expected);
    }

    #[rstest]
    #[case(0, 12)]
    #[case(5, 5)]
    #[case(12, 12)]
    #[case(23, 11)]
    fn test_twelve_hour_dial(#[case] hour: u32, #[case] expected: u32) {
        assert_eq!(twelve_hour(hour), expected);
    }

    #[rstest]
    #[case(2021, "21")]
    #[case(1999, "99")]
    #[case(985, "5")]
    #[case(12, "")]
    fn test_short_year(#[case] year: i32, #[case] expected: &str) {
        assert_eq!(short_year(year), expected);
    }

    #[rstest]
    fn test_pad_keeps_wider_values() {
        assert_eq!(pad(123, 2), "123");
        assert_eq!(pad(0, 1), "0");
        assert_eq!(pad(100, 4), "0100");
    }
}
