//! serializers for days of the week written as full English names ("Monday").
use chrono::Weekday;
use serde::{de::Error, Deserialize, Deserializer, Serializer};

use crate::model::TollError;

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// parses a full day name, ignoring case and surrounding whitespace
pub fn parse_day_name(name: &str) -> Result<Weekday, TollError> {
    match name.trim().to_lowercase().as_str() {
        "monday" => Ok(Weekday::Mon),
        "tuesday" => Ok(Weekday::Tue),
        "wednesday" => Ok(Weekday::Wed),
        "thursday" => Ok(Weekday::Thu),
        "friday" => Ok(Weekday::Fri),
        "saturday" => Ok(Weekday::Sat),
        "sunday" => Ok(Weekday::Sun),
        _ => Err(TollError::InvalidInput(format!(
            "'{name}' is not a day of the week"
        ))),
    }
}

pub fn serialize<S>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(day_name(*day))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Weekday, D::Error>
where
    D: Deserializer<'de>,
{
    let day_str: String = String::deserialize(deserializer)?;
    parse_day_name(&day_str).map_err(|e| D::Error::custom(format!("Invalid day format: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WEEK;

    #[test]
    fn test_names_round_trip() {
        for day in WEEK {
            assert_eq!(parse_day_name(day_name(day)).unwrap(), day);
        }
        assert_eq!(parse_day_name(" SATURDAY").unwrap(), Weekday::Sat);
        assert!(parse_day_name("Sat").is_err());
    }
}
