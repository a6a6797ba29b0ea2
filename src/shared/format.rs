use chrono::{Datelike, NaiveDate};

const MONTHS_SHORT: [&str; 12] = [
    "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

const MONTHS_LONG: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];

/// "13 okt 2025"
pub fn format_date_short(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_SHORT[date.month0() as usize],
        date.year()
    )
}

/// "13 oktober 2025"
pub fn format_date_long(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_LONG[date.month0() as usize],
        date.year()
    )
}

/// Emoji for the season named by the holiday kind.
pub fn season_emoji(kind: &str) -> &'static str {
    let lowered = kind.to_lowercase();
    if lowered.contains("herfst") {
        "🍂"
    } else if lowered.contains("kerst") {
        "🎄"
    } else if lowered.contains("voorjaar") || lowered.contains("mei") {
        "🌸"
    } else if lowered.contains("zomer") {
        "☀️"
    } else {
        "📅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_dutch_month_names() {
        assert_eq!(format_date_short(date(2025, 10, 13)), "13 okt 2025");
        assert_eq!(format_date_long(date(2025, 10, 13)), "13 oktober 2025");
        assert_eq!(format_date_short(date(2026, 3, 1)), "1 mrt 2026");
    }

    #[test]
    fn test_season_emoji_matches_kind() {
        assert_eq!(season_emoji("Herfstvakantie"), "🍂");
        assert_eq!(season_emoji("kerstvakantie"), "🎄");
        assert_eq!(season_emoji("Meivakantie"), "🌸");
        assert_eq!(season_emoji("Zomervakantie"), "☀️");
        assert_eq!(season_emoji("Studiedag"), "📅");
    }
}
