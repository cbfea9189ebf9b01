use chrono::NaiveDateTime;
use pure_rust_locales::{locale_match, Locale};

/// Used when the system locale is missing or unknown.
pub const FALLBACK_LOCALE: Locale = Locale::en_US;

/// Resolves the locale of the running system, falling back to `en_US`.
pub fn current_locale() -> Locale {
    sys_locale::get_locale()
        .and_then(|tag| parse_locale(&tag))
        .unwrap_or(FALLBACK_LOCALE)
}

/// Parses a locale tag such as `de-DE`, `fr_FR` or `en_US.UTF-8`.
pub fn parse_locale(tag: &str) -> Option<Locale> {
    let name = tag.trim().split(['.', '@']).next()?.replace('-', "_");
    Locale::try_from(name.as_str()).ok()
}

/// Whether the locale writes times of day on a 12-hour clock.
pub fn uses_twelve_hour_clock(locale: Locale) -> bool {
    let time_format = locale_match!(locale => LC_TIME::T_FMT);
    ["%r", "%p", "%P", "%I", "%l"]
        .iter()
        .any(|specifier| time_format.contains(specifier))
}

/// Short time of day with no date: "1:26 PM" in `en_US`, "13:26" in `de_DE`.
pub fn short_time(departure: &NaiveDateTime, locale: Locale) -> String {
    let pattern = if uses_twelve_hour_clock(locale) {
        "%-I:%M %p"
    } else {
        "%H:%M"
    };
    departure
        .and_utc()
        .format_localized(pattern, locale)
        .to_string()
}
