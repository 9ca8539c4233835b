use super::invocation::Invocation;
use crate::core::models::entry::ModelTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationStatus {
    /// The process exited with code 0.
    Succeeded,
    /// The process ran but exited unsuccessfully. `code` is `None` when it was killed by a
    /// signal.
    Failed { code: Option<i32> },
    /// The process could not be started (missing interpreter, permissions, ...).
    SpawnFailed { message: String },
    /// No command could be built for the row.
    Rejected { reason: String },
    /// Dry run; nothing was executed.
    Skipped,
}

impl InvocationStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, InvocationStatus::Succeeded)
    }
}

/// What a [`super::runner::CommandRunner`] reports back for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub status: InvocationStatus,
    pub stdout: String,
    pub stderr: String,
}

impl Execution {
    pub fn without_output(status: InvocationStatus) -> Self {
        Self {
            status,
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationOutcome {
    pub target: ModelTarget,
    /// `None` when the row was rejected before a command could be built.
    pub invocation: Option<Invocation>,
    pub execution: Execution,
}

impl InvocationOutcome {
    pub fn status(&self) -> &InvocationStatus {
        &self.execution.status
    }
}

/// Every outcome of one driver run, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub outcomes: Vec<InvocationOutcome>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.count(|s| s.is_success())
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, InvocationStatus::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded() - self.skipped()
    }

    /// Outcomes that neither succeeded nor were skipped.
    pub fn failures(&self) -> impl Iterator<Item = &InvocationOutcome> {
        self.outcomes
            .iter()
            .filter(|o| !o.status().is_success() && *o.status() != InvocationStatus::Skipped)
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }

    fn count(&self, predicate: impl Fn(&InvocationStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(o.status())).count()
    }
}
