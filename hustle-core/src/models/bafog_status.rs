use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseStatusError;

/// Whether the student currently draws BAföG student aid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BafogStatus {
    Receiving,
    NotReceiving,
}

impl BafogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Receiving => "receiving",
            Self::NotReceiving => "not-receiving",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "receiving" => Some(Self::Receiving),
            "not-receiving" => Some(Self::NotReceiving),
            _ => None,
        }
    }
}

impl FromStr for BafogStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseStatusError {
            kind: "BAföG",
            value: s.to_string(),
        })
    }
}
