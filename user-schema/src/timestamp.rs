//! JSON form of `timestamp` fields:
//! `{"unix_millis": 1743592409000, "formatted": "2025-04-02T11:13:29.000Z"}`.
//!
//! Precision below the millisecond goes to `sub_millis_nanos`, omitted when zero, so every
//! timestamp survives a round trip. `formatted` is informative only and ignored when reading.
use chrono::{DateTime, SecondsFormat};
use prost_types::Timestamp;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const NANOS_PER_MILLI: i32 = 1_000_000;

#[derive(Serialize, Deserialize)]
struct TimestampJson {
    unix_millis: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    sub_millis_nanos: i32,
    #[serde(default, skip_deserializing)]
    formatted: String,
}

fn is_zero(value: &i32) -> bool {
    *value == 0
}

pub fn serialize<S: Serializer>(value: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
    let unix_millis = value
        .seconds
        .saturating_mul(1000)
        .saturating_add(i64::from(value.nanos.div_euclid(NANOS_PER_MILLI)));

    let formatted = DateTime::from_timestamp_millis(unix_millis)
        .map(|date| date.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default();

    TimestampJson {
        unix_millis,
        sub_millis_nanos: value.nanos.rem_euclid(NANOS_PER_MILLI),
        formatted,
    }
    .serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
    let TimestampJson {
        unix_millis,
        sub_millis_nanos,
        ..
    } = TimestampJson::deserialize(deserializer)?;

    if !(0..NANOS_PER_MILLI).contains(&sub_millis_nanos) {
        return Err(D::Error::custom(format!(
            "sub_millis_nanos must be in 0..{NANOS_PER_MILLI}, got {sub_millis_nanos}"
        )));
    }

    // Both terms are in range, so nanos stays in 0..1_000_000_000.
    let millis_of_second = unix_millis.rem_euclid(1000) as i32;

    Ok(Timestamp {
        seconds: unix_millis.div_euclid(1000),
        nanos: millis_of_second * NANOS_PER_MILLI + sub_millis_nanos,
    })
}
