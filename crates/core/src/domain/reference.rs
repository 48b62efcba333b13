// Internal Reference Generation

use chrono::{Datelike, NaiveDate};

/// Build the internal reference code for the next process to be created.
///
/// Layout: up to three characters of the client name upper-cased, the
/// two-digit year, then the 1-based global process ordinal zero-padded to
/// four digits. `"Acme Corp"` with no stored processes in 2024 yields
/// `ACM240001`.
///
/// The ordinal counts ALL processes, not just the client's, and keeps
/// growing past 9999 without truncation. Client names shorter than three
/// characters produce a shorter prefix; an empty name produces none.
pub fn internal_reference(client_name: &str, today: NaiveDate, process_count: i64) -> String {
    let prefix: String = client_name.chars().take(3).collect::<String>().to_uppercase();
    format!("{}{:02}{:04}", prefix, today.year() % 100, process_count + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, 6, 15).unwrap()
    }

    #[test]
    fn first_process_for_acme_corp() {
        assert_eq!(internal_reference("Acme Corp", date(2024), 0), "ACM240001");
    }

    #[test]
    fn ordinal_is_count_plus_one() {
        assert_eq!(internal_reference("Acme Corp", date(2024), 1), "ACM240002");
        assert_eq!(internal_reference("Beta", date(2024), 41), "BET240042");
    }

    #[test]
    fn prefix_shrinks_with_short_names() {
        assert_eq!(internal_reference("Ab", date(2025), 0), "AB250001");
        assert_eq!(internal_reference("", date(2025), 0), "250001");
    }

    #[test]
    fn prefix_upper_cases_accented_names() {
        assert_eq!(internal_reference("águia", date(2024), 0), "ÁGU240001");
    }

    #[test]
    fn year_component_is_modulo_100() {
        assert_eq!(internal_reference("Acme", date(2101), 0), "ACM010001");
    }

    #[test]
    fn ordinal_widens_past_four_digits() {
        assert_eq!(internal_reference("Acme", date(2024), 9999), "ACM2410000");
    }
}
