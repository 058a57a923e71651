use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scam categories offered by the report form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScamType {
    PhishingEmail,
    FakeWebsite,
    SmsScam,
    SocialMedia,
    Other,
}

impl ScamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PhishingEmail => "phishing_email",
            Self::FakeWebsite => "fake_website",
            Self::SmsScam => "sms_scam",
            Self::SocialMedia => "social_media",
            Self::Other => "other",
        }
    }
}

impl FromStr for ScamType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "phishing_email" => Ok(Self::PhishingEmail),
            "fake_website" => Ok(Self::FakeWebsite),
            "sms_scam" => Ok(Self::SmsScam),
            "social_media" => Ok(Self::SocialMedia),
            "other" => Ok(Self::Other),
            _ => Err(format!("unknown scam type: {value}")),
        }
    }
}

/// Optional delivery channel of the reported scam.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HowReceived {
    Email,
    Sms,
    Social,
    Direct,
}

impl HowReceived {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "sms",
            Self::Social => "social",
            Self::Direct => "direct",
        }
    }
}

impl FromStr for HowReceived {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            "social" => Ok(Self::Social),
            "direct" => Ok(Self::Direct),
            _ => Err(format!("unknown delivery channel: {value}")),
        }
    }
}

/// A persisted report. Append-only; never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScamReport {
    pub id: i64,
    pub scam_url: String,
    pub scam_type: ScamType,
    pub how_received: Option<HowReceived>,
    pub details: String,
    pub contact_email: Option<String>,
    pub date_submitted: DateTime<Utc>,
}

/// A report as accepted from the form, before the server assigns an id
/// and submission timestamp.
#[derive(Debug, Clone)]
pub struct NewScamReport {
    pub scam_url: String,
    pub scam_type: ScamType,
    pub how_received: Option<HowReceived>,
    pub details: String,
    pub contact_email: Option<String>,
}
