//! Display helpers for API date/time strings.

use crate::mask::truncate_chars;

/// Placeholder shown for missing values.
pub const EMPTY_PLACEHOLDER: &str = "-";

const TIME_DISPLAY_CHARS: usize = 5;

/// Formats an ISO date (`YYYY-MM-DD`) as `DD/MM/YYYY`.
///
/// Empty input yields `-`. Values without exactly three non-empty `-`
/// separated parts are returned trimmed and unchanged.
pub fn format_date(iso: &str) -> String {
    let trimmed = iso.trim();
    if trimmed.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let parts = trimmed.split('-').collect::<Vec<_>>();
    match parts.as_slice() {
        [year, month, day] if parts.iter().all(|part| !part.is_empty()) => {
            format!("{day}/{month}/{year}")
        }
        _ => trimmed.to_string(),
    }
}

/// Formats a time (`HH:MM[:SS]`) as `HH:MM`.
///
/// Empty input yields `-`.
pub fn format_time(time: &str) -> String {
    let trimmed = time.trim();
    if trimmed.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    truncate_chars(trimmed, TIME_DISPLAY_CHARS).to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_date, format_time};

    #[test]
    fn format_date_reorders_iso_parts() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date(" 2024-03-15 "), "15/03/2024");
    }

    #[test]
    fn format_date_passes_through_unknown_shapes() {
        assert_eq!(format_date("15/03/2024"), "15/03/2024");
        assert_eq!(format_date("2024--15"), "2024--15");
        assert_eq!(format_date("2024-03"), "2024-03");
    }

    #[test]
    fn empty_values_render_placeholder() {
        assert_eq!(format_date(""), "-");
        assert_eq!(format_time("   "), "-");
    }

    #[test]
    fn format_time_drops_seconds() {
        assert_eq!(format_time("14:30:00"), "14:30");
        assert_eq!(format_time("9:05"), "9:05");
    }
}
