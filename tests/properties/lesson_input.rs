//! Property tests for lesson-log ingestion.

use proptest::prelude::*;

use kidari::infrastructure::lessons::parse_lessons;
use kidari::{LessonDate, TimeOfDay};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `LessonDate::normalize` never panics on arbitrary text.
    #[test]
    fn property_full_date_normalize_never_panics(text in "(?s).{0,64}") {
        let _ = LessonDate::Text(text).normalize();
    }

    /// PROPERTY: ISO calendar dates always normalize to themselves.
    #[test]
    fn property_iso_dates_normalize(y in 2000i32..2100, m in 1u32..=12, d in 1u32..=28) {
        let text = format!("{y:04}-{m:02}-{d:02}");
        let expected = chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap();
        prop_assert_eq!(LessonDate::Text(text).normalize(), Some(expected));
    }

    /// PROPERTY: every H:MM clock time in the day parses and keeps its text.
    #[test]
    fn property_clock_times_parse(hour in 0u16..24, minute in 0u16..60) {
        let text = format!("{hour}:{minute:02}");
        let time: TimeOfDay = text.parse().unwrap();
        prop_assert_eq!(time.as_str(), text.as_str());
        prop_assert_eq!(time.minutes_since_midnight(), hour * 60 + minute);
    }

    /// PROPERTY: `parse_lessons` never panics on arbitrary replies.
    #[test]
    fn property_parse_lessons_never_panics(content in "(?s).{0,256}") {
        let _ = parse_lessons(&content, std::path::Path::new("reply.txt"));
    }
}
