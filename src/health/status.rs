// src/health/status.rs
use std::fmt;

/// Tri-state check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Ok,
    Warning,
    Critical,
}

impl CheckState {
    /// Process exit code understood by Nagios-style monitoring agents.
    pub fn exit_code(self) -> i32 {
        match self {
            CheckState::Ok => 0,
            CheckState::Warning => 1,
            CheckState::Critical => 2,
        }
    }
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CheckState::Ok => "OK",
            CheckState::Warning => "WARNING",
            CheckState::Critical => "CRITICAL",
        };
        f.write_str(label)
    }
}

/// Outcome of one check invocation: a state, a summary line and the
/// individual findings behind a non-OK state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub state: CheckState,
    pub summary: String,
    pub messages: Vec<String>,
}

impl Verdict {
    pub fn ok(summary: impl Into<String>) -> Self {
        Self {
            state: CheckState::Ok,
            summary: summary.into(),
            messages: Vec::new(),
        }
    }

    pub fn warning(summary: impl Into<String>) -> Self {
        Self {
            state: CheckState::Warning,
            summary: summary.into(),
            messages: Vec::new(),
        }
    }

    pub fn critical(summary: impl Into<String>) -> Self {
        Self {
            state: CheckState::Critical,
            summary: summary.into(),
            messages: Vec::new(),
        }
    }

    /// CRITICAL with every collected finding attached.
    pub fn degraded(summary: impl Into<String>, messages: Vec<String>) -> Self {
        Self {
            state: CheckState::Critical,
            summary: summary.into(),
            messages,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.state == CheckState::Ok
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.messages.is_empty() {
            write!(f, "{}", self.summary)
        } else {
            write!(f, "{}: {}", self.summary, self.messages.join(", "))
        }
    }
}
