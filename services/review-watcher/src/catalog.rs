//! Known review statuses and their verdict texts

use std::fmt;

/// A review status reported by the homework API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    pub const ALL: [ReviewStatus; 3] = [
        ReviewStatus::Approved,
        ReviewStatus::Reviewing,
        ReviewStatus::Rejected,
    ];

    /// Look up a status by its wire code. Returns `None` for codes outside the catalog.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    pub fn code(self) -> &'static str {
        match self {
            ReviewStatus::Approved => "approved",
            ReviewStatus::Reviewing => "reviewing",
            ReviewStatus::Rejected => "rejected",
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            ReviewStatus::Reviewing => "Работа взята на проверку ревьюером.",
            ReviewStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
