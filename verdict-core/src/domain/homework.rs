//! Homework domain types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review status reported by the homework API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// All known statuses
    pub const ALL: [HomeworkStatus; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Wire value as sent by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Verdict sentence shown to the student
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeworkStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// A single homework record, most recent first in API responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Homework {
    pub name: String,
    pub status: HomeworkStatus,
}

impl Homework {
    /// Renders the status-change notification for this homework
    pub fn message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.name,
            self.status.verdict()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_str() {
        for status in HomeworkStatus::ALL {
            assert_eq!(status.as_str().parse::<HomeworkStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert_eq!(
            "graded".parse::<HomeworkStatus>(),
            Err("graded".to_string())
        );
        assert!("Approved".parse::<HomeworkStatus>().is_err());
    }

    #[test]
    fn test_message_template() {
        let homework = Homework {
            name: "hw1".to_string(),
            status: HomeworkStatus::Rejected,
        };
        assert_eq!(
            homework.message(),
            "Изменился статус проверки работы \"hw1\". Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn test_status_serde_uses_lowercase() {
        let json = serde_json::to_string(&HomeworkStatus::Reviewing).unwrap();
        assert_eq!(json, "\"reviewing\"");
    }
}
