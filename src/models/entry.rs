use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A persisted journal entry; this struct is the representation used in
/// every API response.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct JournalEntry {
    pub id: i64,
    /// Assigned at creation (UTC) and never modified by updates.
    #[serde(with = "entry_date")]
    #[schema(value_type = String, example = "2024-05-01 13:45:00")]
    pub date: NaiveDateTime,
    pub mood: String,
    pub entry: String,
    pub title: String,
    pub activity: String,
    pub private: bool,
}

/// Wire format for `date`: `YYYY-MM-DD HH:MM:SS`, sub-second precision
/// dropped.
mod entry_date {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_entry() -> JournalEntry {
        JournalEntry {
            id: 7,
            date: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(13, 45, 0)
                .unwrap(),
            mood: "calm".to_string(),
            entry: "wrote some rust".to_string(),
            title: "tuesday".to_string(),
            activity: "coding".to_string(),
            private: true,
        }
    }

    #[test]
    fn date_serializes_without_subseconds() {
        let value = serde_json::to_value(sample_entry()).unwrap();
        assert_eq!(value["date"], "2024-05-01 13:45:00");
    }

    #[test]
    fn representation_round_trips() {
        let entry = sample_entry();
        let json = serde_json::to_string(&entry).unwrap();
        let back: JournalEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, entry.id);
        assert_eq!(back.date, entry.date);
        assert_eq!(back.title, entry.title);
        assert!(back.private);
    }

    #[test]
    fn serialization_is_repeatable() {
        let entry = sample_entry();
        let first = serde_json::to_string(&entry).unwrap();
        let second = serde_json::to_string(&entry).unwrap();
        assert_eq!(first, second);
    }
}
