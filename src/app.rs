//! Routes between the three screens.

use std::fmt;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// A screen the user can navigate to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// `/`: the new run form.
    NewRun,
    /// `/runs`: the run list.
    Runs,
    /// `/runs/{id}`: one run.
    RunDetail(String),
}

impl Route {
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed.strip_prefix("/runs") {
            None if trimmed.is_empty() => Some(Self::NewRun),
            Some("") => Some(Self::Runs),
            Some(rest) => rest
                .strip_prefix('/')
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Self::RunDetail(id.to_owned())),
            None => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewRun => f.write_str("/"),
            Self::Runs => f.write_str("/runs"),
            Self::RunDetail(id) => write!(f, "/runs/{id}"),
        }
    }
}
