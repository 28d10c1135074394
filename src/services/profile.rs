use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use std::fmt;

/// Client profile as sent by `GET /api/therapist/clients/{id}`
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfilePayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birthday: String,
    #[serde(default)]
    pub last_session: Option<String>,
}

/// Validated client profile, dates already parsed
#[derive(Debug, Clone, PartialEq)]
pub struct ClientProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birthday: NaiveDate,
    /// None when the client has not had a session yet
    pub last_session: Option<DateTime<Utc>>,
}

impl ClientProfile {
    /// "First Last", or whichever name is present when the other is blank
    pub fn full_name(&self) -> String {
        match (self.first_name.trim().is_empty(), self.last_name.trim().is_empty()) {
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

/// Reasons a decoded payload is rejected
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidProfile {
    MissingName,
    InvalidBirthday(String),
    InvalidLastSession(String),
}

impl fmt::Display for InvalidProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "profile has neither first nor last name"),
            Self::InvalidBirthday(raw) => write!(f, "unparseable birthday: {:?}", raw),
            Self::InvalidLastSession(raw) => write!(f, "unparseable lastSession: {:?}", raw),
        }
    }
}

impl std::error::Error for InvalidProfile {}

impl TryFrom<ClientProfilePayload> for ClientProfile {
    type Error = InvalidProfile;

    fn try_from(payload: ClientProfilePayload) -> Result<Self, Self::Error> {
        if payload.first_name.trim().is_empty() && payload.last_name.trim().is_empty() {
            return Err(InvalidProfile::MissingName);
        }

        let birthday = parse_birthday(&payload.birthday)
            .ok_or_else(|| InvalidProfile::InvalidBirthday(payload.birthday.clone()))?;

        let last_session = match payload.last_session.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                parse_timestamp(raw)
                    .ok_or_else(|| InvalidProfile::InvalidLastSession(raw.to_string()))?,
            ),
        };

        Ok(Self {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            birthday,
            last_session,
        })
    }
}

/// `YYYY-MM-DD`, or the date part of a full timestamp
fn parse_birthday(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_timestamp(raw).map(|ts| ts.date_naive()))
}

/// RFC 3339; timestamps without an offset are read as UTC
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
