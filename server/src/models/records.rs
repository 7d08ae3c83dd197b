use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Raw article text, one document per processed request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FullTextRecord {
    pub url: String,
    pub text: String,
}

/// Final summary row. Not linked back to the source URL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub time: String,
    pub text: String,
}

impl SummaryRecord {
    pub fn new(text: String) -> Self {
        Self::at(Utc::now(), text)
    }

    pub fn at(time: DateTime<Utc>, text: String) -> Self {
        Self {
            time: iso_timestamp(time),
            text,
        }
    }
}

/// `2025-07-01T12:00:00.000Z`
pub fn iso_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}
