//! Run status labels and their visual categories.
//!
//! The backend reports status as a free string. Current labels are
//! PENDING, RUNNING, COMPLETED, FAILED and CANCELLED; older runs may carry
//! GENERATING, SUCCEEDED or ERROR, which are treated as RUNNING, COMPLETED
//! and FAILED respectively. Matching is case-insensitive and only decides the
//! pill color; finalize and cancel gating compare the exact labels.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Canonical run status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Cancelled,
    Unknown,
}

impl RunStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Self::Pending,
            "RUNNING" | "GENERATING" => Self::Running,
            "COMPLETED" | "SUCCEEDED" => Self::Completed,
            "FAILED" | "ERROR" => Self::Failed,
            "CANCELLED" => Self::Cancelled,
            _ => Self::Unknown,
        }
    }

    pub fn tone(self) -> StatusTone {
        match self {
            Self::Pending | Self::Unknown => StatusTone::Neutral,
            Self::Running => StatusTone::Active,
            Self::Completed => StatusTone::Success,
            Self::Failed => StatusTone::Failure,
            Self::Cancelled => StatusTone::Warning,
        }
    }
}

/// Visual category of a status pill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusTone {
    /// Gray.
    #[default]
    Neutral,
    /// Blue.
    Active,
    /// Green.
    Success,
    /// Red.
    Failure,
    /// Yellow.
    Warning,
}

/// Category for a raw backend status string.
pub fn status_tone(raw: &str) -> StatusTone {
    RunStatus::parse(raw).tone()
}

/// Text shown inside a status pill.
pub fn status_label(raw: &str) -> String {
    raw.to_uppercase()
}
