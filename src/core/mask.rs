use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::core::token;
use crate::types::timestamp::Components;

/// Recognizes one mask token at a time: day/month runs, two- or four-digit
/// years, optionally doubled time fields, single-character tokens and quoted
/// literal segments. Alternation order keeps longer runs ahead of their
/// prefixes, so `dddd` wins over `d` at the same position.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"d{1,4}|M{1,4}|yy(?:yy)?|HH?|hh?|mm?|ss?|AA?|aa?|[LloSZ]|'[^']*'").unwrap()
});

/// Matches a timezone name in a textual date rendering: a two/three letter
/// abbreviation, a spelled-out North American zone, or `GMT`/`UTC` with an
/// optional numeric offset.
static TIMEZONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:[PMCEA][SDP]T|(?:Pacific|Mountain|Central|Eastern|Atlantic) (?:Standard|Daylight|Prevailing) Time|(?:GMT|UTC)(?:[-+]\d{4})?)\b",
    )
    .unwrap()
});

/// Characters stripped from an extracted timezone name.
static TIMEZONE_CLIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^-+\dA-Z]").unwrap());

pub(crate) const DEFAULT_PATTERN: &str = "yyyy-MM-dd HH:mm:ss,S";

/// Predefined named formats. ABSOLUTE keeps the month token in its middle
/// position for compatibility with the historical format table.
fn predefined(name: &str) -> Option<&'static str> {
    let pattern: &str = match name {
        "DEFAULT" => DEFAULT_PATTERN,
        "ABSOLUTE" => "HH:MM:ss,S",
        "COMPACT" => "yyyyMMddHHmmssS",
        "DATE" => "dd MMM yyyy HH:mm:ss,S",
        "ISO8601" => "yyyy-MM-ddTHH:mm:ss,S",
        "ISO8601_BASIC" => "yyyyMMddTHHmmss,S",
        _ => return None,
    };
    Some(pattern)
}

/// Resolves a mask to a concrete pattern and splits off the `UTC:` prefix.
///
/// A missing or empty mask falls back to [`DEFAULT_PATTERN`]; anything that
/// is not a predefined name is used as a literal pattern. The `UTC:` prefix
/// is checked on the resolved pattern, so it can only come from a literal
/// mask (no predefined name starts with it).
pub(crate) fn resolve(mask: Option<&str>) -> (&str, bool) {
    let pattern: &str = match mask {
        Some(name) if !name.is_empty() => predefined(name).unwrap_or(name),
        _ => DEFAULT_PATTERN,
    };

    match pattern.strip_prefix("UTC:") {
        Some(rest) => (rest, true),
        None => (pattern, false),
    }
}

/// Extracts a timezone abbreviation from a textual date rendering.
///
/// The last match wins, everything outside `[A-Z0-9+-]` is stripped, and a
/// rendering without a recognizable zone yields an empty string.
pub(crate) fn zone_abbreviation(rendered: &str) -> String {
    match TIMEZONE.find_iter(rendered).last() {
        Some(m) => TIMEZONE_CLIP.replace_all(m.as_str(), "").into_owned(),
        None => String::new(),
    }
}

/// Replaces every recognized token in `pattern` with its rendered value.
/// Matches without a table entry pass through verbatim, quote characters
/// included.
pub(crate) fn substitute(
    pattern: &str,
    parts: &Components,
    zone: &str,
    offset_minutes: i32,
) -> String {
    TOKEN
        .replace_all(pattern, |caps: &Captures| {
            let matched: &str = &caps[0];
            token::value(matched, parts, zone, offset_minutes)
                .unwrap_or_else(|| matched.to_string())
        })
        .into_owned()
}
