pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time.format(DATE_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)?;
        Ok(time)
    }
}

// current_year is the default publication year for new books
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Serialize};
    use crate::utils::date::{current_year, serializer};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "serializer")]
        at: NaiveDateTime,
    }

    #[test]
    fn test_should_serialize_timestamps() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9).expect("date")
            .and_hms_milli_opt(10, 20, 30, 400).expect("time");
        let json = serde_json::to_string(&Stamped { at }).expect("serialize");
        assert_eq!(r#"{"at":"2024-03-09T10:20:30.400"}"#, json);
        let parsed: Stamped = serde_json::from_str(json.as_str()).expect("deserialize");
        assert_eq!(at, parsed.at);
    }

    #[test]
    fn test_should_reject_malformed_timestamps() {
        assert!(serde_json::from_str::<Stamped>(r#"{"at":"yesterday"}"#).is_err());
    }

    #[test]
    fn test_should_return_current_year() {
        assert!(current_year() >= 2024);
    }
}
