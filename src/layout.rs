use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::format::date_format;
use crate::types::event::LogEvent;

/// Recognizes one `%` directive: a directive name with an optional `{...}`
/// argument, or the `%%` escape.
static DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(?:(?P<name>[A-Za-z]+)(?:\{(?P<arg>[^}]*)\})?|%)").unwrap());

/// Renders a log event through a layout pattern.
///
/// Directive names come in a short and a long form (`%c`/`%logger`,
/// `%d`/`%date`, `%m`/`%message`, `%p`/`%level`, `%r`/`%relative`, plus `%n`
/// and `%%`). Text outside directives and unrecognized directives pass
/// through unchanged, so a typo in a pattern degrades to visible literal
/// text instead of an error.
pub fn format_event(pattern: &str, event: &LogEvent) -> String {
    DIRECTIVE
        .replace_all(pattern, |caps: &Captures| {
            let name: &str = match caps.name("name") {
                Some(name) => name.as_str(),
                None => return "%".to_string(), // the %% escape
            };
            let arg: Option<&str> = caps.name("arg").map(|m| m.as_str());

            match name {
                "c" | "logger" => logger_name(&event.logger, arg),
                "d" | "date" => date_format(&event.timestamp, arg),
                "m" | "message" => event.message.clone(),
                "p" | "level" => event.level.to_string(),
                "r" | "relative" => event.relative.to_string(),
                "n" => "\n".to_string(),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Logger name, optionally cut down to its last `n` dot separated segments
/// (`%c{2}` on `app.net.client` keeps `net.client`).
fn logger_name(logger: &str, precision: Option<&str>) -> String {
    let Some(precision) = precision.and_then(|p| p.parse::<usize>().ok()) else {
        return logger.to_string();
    };
    if precision == 0 {
        return logger.to_string();
    }

    let segments: Vec<&str> = logger.split('.').collect();
    let keep: usize = precision.min(segments.len());
    segments[segments.len() - keep..].join(".")
}
