//! Wire representations exchanged with the remote collection API.
//!
//! The native schema uses the remote API's own field names. A generic
//! placeholder service may answer instead, so every collection payload is
//! decoded as a tagged union: native first, placeholder second.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{event_kind::EventKind, location::Location};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeWire {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "cargo")]
    pub job_title: String,
    #[serde(rename = "departamento")]
    pub department: String,
    #[serde(rename = "dataAdmissao")]
    pub admission_date: NaiveDate,
    #[serde(rename = "dataCadastro", default)]
    pub registered_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockEventWire {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "funcionarioId")]
    pub employee_id: i64,
    #[serde(rename = "tipoRegistro")]
    pub kind: EventKind,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "hora", with = "hhmm")]
    pub time: NaiveTime,
    #[serde(rename = "observacao", default)]
    pub note: Option<String>,
    #[serde(rename = "localizacao")]
    pub location: Location,
    #[serde(rename = "dataCriacao", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// User record as served by the placeholder service.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceholderUser {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Post record as served by the placeholder service.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceholderPost {
    pub id: i64,
    #[serde(rename = "userId", default)]
    pub user_id: Option<i64>,
    pub title: String,
    pub body: String,
}

#[derive(Debug)]
pub enum EmployeePayload {
    Native(Vec<EmployeeWire>),
    Placeholder(Vec<PlaceholderUser>),
}

impl EmployeePayload {
    /// Native schema wins; the placeholder error is reported when neither matches.
    pub fn decode(value: &Value) -> Result<Self, serde_json::Error> {
        match Vec::<EmployeeWire>::deserialize(value) {
            Ok(items) => Ok(Self::Native(items)),
            Err(_) => Vec::<PlaceholderUser>::deserialize(value).map(Self::Placeholder),
        }
    }
}

#[derive(Debug)]
pub enum ClockEventPayload {
    Native(Vec<ClockEventWire>),
    Placeholder(Vec<PlaceholderPost>),
}

impl ClockEventPayload {
    pub fn decode(value: &Value) -> Result<Self, serde_json::Error> {
        match Vec::<ClockEventWire>::deserialize(value) {
            Ok(items) => Ok(Self::Native(items)),
            Err(_) => Vec::<PlaceholderPost>::deserialize(value).map(Self::Placeholder),
        }
    }
}

/// `HH:MM` time-of-day; seconds are accepted on input and dropped.
pub mod hhmm {
    use chrono::{NaiveTime, Timelike};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map(|t| t.with_second(0).unwrap_or(t))
            .map_err(|_| D::Error::custom(format!("invalid time of day '{raw}'")))
    }
}
