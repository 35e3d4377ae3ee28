use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

pub(crate) fn time_to_string(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn serialize_timestamp<S: Serializer>(
    time: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match time {
        Some(time) => serializer.serialize_str(&time_to_string(time)),
        None => serializer.serialize_none(),
    }
}
