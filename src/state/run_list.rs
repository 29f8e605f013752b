#[cfg(test)]
#[path = "run_list_test.rs"]
mod run_list_test;

use crate::net::types::Run;

/// Status filter chips above the run table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Running,
    Completed,
    Failed,
    Cancelled,
}

impl StatusFilter {
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::Pending,
        Self::Running,
        Self::Completed,
        Self::Failed,
        Self::Cancelled,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name().eq_ignore_ascii_case(raw.trim()))
    }

    /// Compares the raw status string, so legacy aliases do not match.
    pub fn matches(self, status: &str) -> bool {
        match self {
            Self::All => true,
            other => status.eq_ignore_ascii_case(other.name()),
        }
    }
}

/// State of the run list view.
#[derive(Clone, Debug)]
pub struct RunListState {
    pub runs: Vec<Run>,
    /// True until the first fetch settles, whether it succeeded or not.
    pub loading: bool,
    pub filter: StatusFilter,
}

impl Default for RunListState {
    fn default() -> Self {
        Self { runs: Vec::new(), loading: true, filter: StatusFilter::All }
    }
}

impl RunListState {
    /// Apply a successful fetch.
    pub fn set_runs(&mut self, runs: Vec<Run>) {
        self.runs = runs;
        self.loading = false;
    }

    /// A failed fetch keeps whatever was shown before.
    pub fn fetch_failed(&mut self) {
        self.loading = false;
    }

    pub fn filtered(&self) -> Vec<&Run> {
        self.runs.iter().filter(|run| self.filter.matches(&run.status)).collect()
    }
}
