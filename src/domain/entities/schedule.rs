//! Schedule record entity
//!
//! An approved duty or business-trip block taken from the official
//! attendance system. Unlike lesson times these are already absolute
//! (local wall-clock) instants.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const INSTANT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y.%m.%d %H:%M",
];

const PERIOD_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    #[serde(with = "local_instant")]
    pub start_time: NaiveDateTime,
    #[serde(with = "local_instant")]
    pub end_time: NaiveDateTime,
    /// Duty-status name or trip destination
    #[serde(rename = "type")]
    pub kind: String,
    /// Reason or purpose
    #[serde(default)]
    pub detail: String,
}

impl ScheduleRecord {
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        kind: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            start_time,
            end_time,
            kind: kind.into(),
            detail: detail.into(),
        }
    }

    /// True unless one window ends at or before the other begins.
    ///
    /// Touching endpoints do not overlap.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        !(end <= self.start_time || start >= self.end_time)
    }

    /// `YYYY-MM-DD HH:MM ~ YYYY-MM-DD HH:MM`
    pub fn period_label(&self) -> String {
        format!(
            "{} ~ {}",
            self.start_time.format(PERIOD_FORMAT),
            self.end_time.format(PERIOD_FORMAT)
        )
    }

    /// `type: detail`
    pub fn summary(&self) -> String {
        format!("{}: {}", self.kind, self.detail)
    }
}

/// Parse a local instant in any of the formats the exports use.
pub fn parse_instant(text: &str) -> Option<NaiveDateTime> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    INSTANT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&normalized, format).ok())
}

mod local_instant {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const SERIALIZE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S>(instant: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&instant.format(SERIALIZE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        super::parse_instant(&text).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid schedule instant '{}' - expected YYYY-MM-DD HH:MM",
                text
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str) -> NaiveDateTime {
        parse_instant(text).unwrap()
    }

    fn schedule(start: &str, end: &str) -> ScheduleRecord {
        ScheduleRecord::new(at(start), at(end), "연가", "family event")
    }

    #[test]
    fn parse_instant_accepts_export_formats() {
        assert_eq!(at("2025-12-16 14:30"), at("2025-12-16T14:30:00"));
        assert_eq!(at("2025.12.16 14:30"), at("2025-12-16 14:30"));
        assert_eq!(at("2025-12-16   14:30"), at("2025-12-16 14:30"));
        assert!(parse_instant("16/12/2025 14:30").is_none());
    }

    #[test]
    fn touching_endpoints_do_not_overlap() {
        let s = schedule("2025-04-18 14:20", "2025-04-18 15:00");
        assert!(!s.overlaps(at("2025-04-18 13:40"), at("2025-04-18 14:20")));
        assert!(!s.overlaps(at("2025-04-18 15:00"), at("2025-04-18 15:40")));
    }

    #[test]
    fn any_shared_minute_overlaps() {
        let s = schedule("2025-04-18 14:19", "2025-04-18 15:00");
        assert!(s.overlaps(at("2025-04-18 13:40"), at("2025-04-18 14:20")));

        let all_day = schedule("2025-04-18 00:00", "2025-04-19 00:00");
        assert!(all_day.overlaps(at("2025-04-18 13:40"), at("2025-04-18 14:20")));
    }

    #[test]
    fn period_label_uses_local_wall_clock() {
        let s = schedule("2025-12-16 14:30", "2025-12-16 16:30");
        assert_eq!(s.period_label(), "2025-12-16 14:30 ~ 2025-12-16 16:30");
        assert_eq!(s.summary(), "연가: family event");
    }

    #[test]
    fn serde_uses_type_field_and_accepts_export_instants() {
        let json = r#"{"startTime": "2025-12-16 14:30", "endTime": "2025-12-16T16:30:00", "type": "출장", "detail": "training"}"#;
        let s: ScheduleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(s.kind, "출장");
        assert_eq!(s.period_label(), "2025-12-16 14:30 ~ 2025-12-16 16:30");

        let value = serde_json::to_value(&s).unwrap();
        assert_eq!(value["startTime"], "2025-12-16T14:30:00");
        assert_eq!(value["type"], "출장");
    }

    #[test]
    fn serde_rejects_unreadable_instant() {
        let json = r#"{"startTime": "soon", "endTime": "2025-12-16 16:30", "type": "x"}"#;
        let err = serde_json::from_str::<ScheduleRecord>(json).unwrap_err();
        assert!(err.to_string().contains("invalid schedule instant 'soon'"));
    }
}
