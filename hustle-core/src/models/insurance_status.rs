use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseStatusError;

/// How the student is currently health-insured.
///
/// The insurance risk rules branch on this: family insurance is bounded by
/// monthly income, KVdS (student insurance) by weekly working hours, and any
/// other arrangement is outside the rules entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsuranceStatus {
    /// Covered through a parent's statutory family insurance.
    Family,
    /// Krankenversicherung der Studenten (statutory student insurance).
    Kvds,
    /// Private or other coverage not subject to the student limits.
    Other,
}

impl InsuranceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Kvds => "kvds",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "family" => Some(Self::Family),
            "kvds" => Some(Self::Kvds),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl FromStr for InsuranceStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseStatusError {
            kind: "insurance",
            value: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_all_tags() {
        for status in [
            InsuranceStatus::Family,
            InsuranceStatus::Kvds,
            InsuranceStatus::Other,
        ] {
            assert_eq!(InsuranceStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn parse_rejects_unknown_tag() {
        assert_eq!(InsuranceStatus::parse("public"), None);
    }
}
